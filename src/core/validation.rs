//! Validation for the identity step's form fields.
//!
//! Each function checks one field's declared constraint and returns either
//! the typed value or a [`FieldError`] that the form renders inline.

use super::onboarding::Gender;

/// Minimum accepted customer age
pub const MIN_CUSTOMER_AGE: u32 = 16;

/// Maximum accepted customer age
pub const MAX_CUSTOMER_AGE: u32 = 150;

/// A field failed its declared constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty
    Required,
    /// The value could not be parsed as a whole number
    NotANumber,
    /// The age is below the accepted minimum
    BelowMinimumAge { min: u32 },
    /// The age is above the accepted maximum
    AboveMaximumAge { max: u32 },
    /// The value is not one of the enumerated choices
    UnknownChoice { value: String },
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required => write!(f, "This field is required"),
            FieldError::NotANumber => write!(f, "Please enter a whole number"),
            FieldError::BelowMinimumAge { min } => write!(f, "Minimum age is {}", min),
            FieldError::AboveMaximumAge { max } => write!(f, "Maximum age is {}", max),
            FieldError::UnknownChoice { value } => {
                write!(f, "\"{}\" is not a recognized option", value)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Validates the full name: non-empty after trimming
pub fn validate_name(input: &str) -> Result<String, FieldError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(name.to_string())
}

/// Validates the age: an integer within the accepted range
pub fn validate_age(input: &str) -> Result<u32, FieldError> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(FieldError::Required);
    }
    let age: u32 = raw.parse().map_err(|_| FieldError::NotANumber)?;
    if age < MIN_CUSTOMER_AGE {
        return Err(FieldError::BelowMinimumAge {
            min: MIN_CUSTOMER_AGE,
        });
    }
    if age > MAX_CUSTOMER_AGE {
        return Err(FieldError::AboveMaximumAge {
            max: MAX_CUSTOMER_AGE,
        });
    }
    Ok(age)
}

/// Validates the gender: a non-empty selection from the enumeration
pub fn validate_gender(input: &str) -> Result<Gender, FieldError> {
    if input.is_empty() {
        return Err(FieldError::Required);
    }
    Gender::from_str(input).ok_or_else(|| FieldError::UnknownChoice {
        value: input.to_string(),
    })
}
