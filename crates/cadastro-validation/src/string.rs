//! String length validators
//!
//! Lengths are counted in chars, not bytes, so accented input such as `"SÃ"`
//! measures 2.

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Fails when the value is the empty string.
pub fn validate_required(s: &str, message: &str) -> Result<(), String> {
    if s.is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn validate_min_length(s: &str, min: usize, message: &str) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

pub fn validate_max_length(s: &str, max: usize, message: &str) -> Result<(), String> {
    if char_len(s) <= max {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Fails unless the value has exactly `len` chars.
pub fn validate_exact_length(s: &str, len: usize, message: &str) -> Result<(), String> {
    if char_len(s) == len {
        Ok(())
    } else {
        Err(message.to_string())
    }
}
