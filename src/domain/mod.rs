//! Domain layer - Contact records and the rules that govern them

pub mod contact;
pub mod id;
pub mod record_format;
pub mod validation;

pub use contact::{Contact, ContactPatch};
pub use id::ContactId;
pub use record_format::{format_records, parse_records};
pub use validation::{validate_delimiter, validate_field, validate_phone};
