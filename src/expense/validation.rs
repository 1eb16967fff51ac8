//! Submit-time checks for the new-expense form.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Description is required")]
    EmptyDescription,
    #[error("Amount is required")]
    MissingAmount,
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),
    #[error("Amount cannot be negative")]
    NegativeAmount,
}

/// Trimmed description, rejecting blank input.
pub fn parse_description(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

/// Parse amount text strictly. Unlike a lenient parser, malformed text is an
/// error rather than a silent NaN or zero.
pub fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::InvalidAmount(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount);
    }
    Ok(value)
}
