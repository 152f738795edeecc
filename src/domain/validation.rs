//! Input validation for contact fields

use crate::error::{PhonebookError, Result};

/// Longest phone number accepted, in characters
pub const MAX_PHONE_LEN: usize = 11;

/// Check a phone number.
///
/// Length is checked before content, so a value that is both too long and
/// non-numeric reports [`PhonebookError::PhoneTooLong`].
pub fn validate_phone(phone: &str) -> Result<()> {
    let len = phone.chars().count();
    if len > MAX_PHONE_LEN {
        return Err(PhonebookError::PhoneTooLong { len });
    }

    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(PhonebookError::PhoneNotDigits(phone.to_string()));
    }

    Ok(())
}

/// Make sure a field can be written to the flat file without shifting columns
pub fn validate_field(field: &'static str, value: &str, delimiter: char) -> Result<()> {
    if value.contains(delimiter) || value.contains(['\n', '\r']) {
        return Err(PhonebookError::DelimiterInField { field, delimiter });
    }
    Ok(())
}

/// Check a delimiter for use in the flat file
pub fn validate_delimiter(delimiter: char) -> Result<()> {
    if delimiter == '\n' || delimiter == '\r' {
        return Err(PhonebookError::Config(
            "Delimiter cannot be a line break".to_string(),
        ));
    }
    if delimiter.is_ascii_digit() {
        return Err(PhonebookError::Config(format!(
            "Delimiter cannot be a digit: '{}'",
            delimiter
        )));
    }
    if delimiter.is_control() && delimiter != '\t' {
        return Err(PhonebookError::Config(
            "Delimiter cannot be a control character".to_string(),
        ));
    }
    Ok(())
}
