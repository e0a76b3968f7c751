//! Validation for user-submitted form input.
//!
//! Each rule returns the first failure as a [ValidationError] whose message is
//! suitable for display next to the offending field. Validation failures block
//! submission and are fully recoverable; they never touch the record stores.

use std::str::FromStr;

use email_address::EmailAddress;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// A rejected form field, with the message to show the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was left blank.
    #[error("{0} is required")]
    Required(String),

    /// The email field does not look like an email address.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// The password field was left blank.
    #[error("Password is required")]
    PasswordRequired,

    /// The password is shorter than [MIN_PASSWORD_LENGTH] characters.
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    /// The amount field was left blank.
    #[error("Amount is required")]
    AmountRequired,

    /// The amount field does not parse as a number.
    #[error("Amount must be a valid number")]
    AmountNotNumeric,

    /// The amount parsed but is zero or negative.
    #[error("Amount must be greater than zero")]
    AmountNotPositive,
}

/// Check that `email` is a plausible email address.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    EmailAddress::from_str(email)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidEmail)
}

/// Check the login password field.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Check that a required text field is not blank.
pub fn validate_required(value: &str, field_name: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field_name.to_owned()));
    }

    Ok(())
}

/// Check an amount field: present, numeric, and strictly positive.
pub fn validate_amount(amount: &str) -> Result<(), ValidationError> {
    if amount.is_empty() {
        return Err(ValidationError::AmountRequired);
    }

    let value: f64 = amount
        .trim()
        .parse()
        .map_err(|_| ValidationError::AmountNotNumeric)?;

    if !value.is_finite() {
        return Err(ValidationError::AmountNotNumeric);
    }

    if value <= 0.0 {
        return Err(ValidationError::AmountNotPositive);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        ValidationError, validate_amount, validate_email, validate_password, validate_required,
    };

    #[test]
    fn validate_email_accepts_plausible_addresses() {
        assert_eq!(validate_email("jo@example.com"), Ok(()));
        assert_eq!(validate_email("not-an-email"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(""), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn validate_password_enforces_minimum_length() {
        assert_eq!(validate_password(""), Err(ValidationError::PasswordRequired));
        assert_eq!(
            validate_password("12345"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_password("123456"), Ok(()));
    }

    #[test]
    fn validate_required_rejects_blank_strings() {
        assert_eq!(
            validate_required("   ", "Name"),
            Err(ValidationError::Required("Name".to_owned()))
        );
        assert_eq!(validate_required("Lunch", "Name"), Ok(()));
    }

    #[test]
    fn validate_amount_requires_a_positive_number() {
        assert_eq!(validate_amount(""), Err(ValidationError::AmountRequired));
        assert_eq!(
            validate_amount("abc"),
            Err(ValidationError::AmountNotNumeric)
        );
        assert_eq!(
            validate_amount("0"),
            Err(ValidationError::AmountNotPositive)
        );
        assert_eq!(
            validate_amount("-3"),
            Err(ValidationError::AmountNotPositive)
        );
        assert_eq!(validate_amount("12.50"), Ok(()));
    }
}
