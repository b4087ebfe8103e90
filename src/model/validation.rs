//! Input checks applied before anything is sent to the service.

use thiserror::Error;

/// Reasons a draft or patch is refused at the input boundary.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Product name must not be empty")]
    EmptyName,

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Update must change at least one field")]
    EmptyPatch,

    #[error("Product id must not be empty")]
    MissingId,
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice(price.to_string()));
    }
    Ok(())
}

/// Coerces text input (a form field, a CLI flag) into a price.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPrice(raw.trim().to_owned()))?;
    validate_price(price)?;
    Ok(price)
}
