//! Output formatting utilities

use crate::application::Contacts;
use crate::domain::{Contact, ContactId};
use crate::error::PhonebookError;

/// Format one contact as a table row
pub fn format_contact_row(id: ContactId, contact: &Contact) -> String {
    format!(
        "{}. {:<20} {:<20} {:<20}",
        id, contact.name, contact.phone, contact.comment
    )
    .trim_end()
    .to_string()
}

/// Format contacts as a table, or `empty_message` when there are none
pub fn format_contact_table(contacts: &Contacts, empty_message: &str) -> String {
    if contacts.is_empty() {
        return empty_message.to_string();
    }

    let mut output = String::new();
    for (id, contact) in contacts {
        output.push_str(&format_contact_row(*id, contact));
        output.push('\n');
    }
    output
}

/// Frame a message between dashed rules
pub fn format_message(msg: &str) -> String {
    let width = msg.lines().map(|l| l.chars().count()).max().unwrap_or(0) + 1;
    let rule = "-".repeat(width);
    format!("{}\n{}\n{}\n", rule, msg, rule)
}

/// Turn a failed command into a message for the user.
/// Phone book errors get their own text; anything else is a generic failure.
pub fn format_command_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PhonebookError>() {
        Some(e) => e.display_with_suggestions(),
        None => format!("Command failed: {}", err),
    }
}
