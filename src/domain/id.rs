//! Contact identifiers

use crate::error::{PhonebookError, Result};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier of a contact. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(u32);

impl ContactId {
    /// The id given to the first contact of an empty store
    pub const FIRST: ContactId = ContactId(1);

    /// Wrap a raw value; `None` for zero
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(ContactId(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The id following this one
    pub fn next(self) -> Self {
        ContactId(self.0 + 1)
    }

    /// Parse an id typed by the user (surrounding whitespace is ignored)
    pub fn parse(input: &str) -> Result<Self> {
        input
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(ContactId::new)
            .ok_or_else(|| PhonebookError::InvalidId(input.to_string()))
    }
}

impl FromStr for ContactId {
    type Err = PhonebookError;

    fn from_str(s: &str) -> Result<Self> {
        ContactId::parse(s)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
