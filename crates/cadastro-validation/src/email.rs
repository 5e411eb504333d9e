//! Email shape validation

use once_cell::sync::Lazy;
use regex::Regex;

// local@label.label[.label...], no whitespace, exactly one '@', no empty labels
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// Validates the `local@domain.tld` shape
///
/// Checks for:
/// - Exactly one '@' symbol
/// - Non-empty local part
/// - Domain with at least one '.' and no empty labels
/// - No whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_email_shape(email: &str, message: &str) -> Result<(), String> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}
