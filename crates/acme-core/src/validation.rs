//! # Validation Module
//!
//! Record checks applied before rows are written to the store.
//!
//! Reads never validate: a lookup with an unknown id or email simply finds
//! nothing.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dataset::validate (seeding)                                   │
//! │  └── THIS MODULE: ids, dates, amounts, email shape                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                             │
//! │  ├── CHECK (status IN ('pending', 'paid'))                              │
//! │  └── UNIQUE (users.email), foreign keys                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates the email of a user about to be stored.
///
/// Only the shape is checked (`local@domain`, no whitespace).
///
/// ## Returns
/// The trimmed email. Case is preserved: lookup is an exact match.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > 254 {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: 254,
        });
    }

    let well_formed = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain".to_string(),
        });
    }

    Ok(email.to_string())
}

/// Validates an invoice id.
///
/// Ids are opaque (UUIDs in production, short numbers in the sample data),
/// so only emptiness and length are checked.
pub fn validate_invoice_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    Ok(())
}

/// Validates an ISO calendar date (`YYYY-MM-DD`).
///
/// ## Example
/// ```rust
/// use acme_core::validation::validate_iso_date;
///
/// assert!(validate_iso_date("2023-02-28").is_ok());
/// assert!(validate_iso_date("2023-02-30").is_err());
/// assert!(validate_iso_date("28/02/2023").is_err());
/// ```
pub fn validate_iso_date(date: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an invoice amount in cents.
///
/// ## Rules
/// - Must be non-negative (zero-amount invoices are allowed)
pub fn validate_amount_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
