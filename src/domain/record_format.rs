//! Flat-file line format: one contact per line, `name<d>phone<d>comment`

use crate::domain::Contact;
use crate::error::{PhonebookError, Result};

/// Number of fields on every line
const FIELD_COUNT: usize = 3;

/// Parse file content into contacts, in file order.
///
/// Blank lines are skipped and a trailing `\r` is dropped. Any line that does
/// not split into exactly three fields fails the whole parse.
pub fn parse_records(content: &str, delimiter: char) -> Result<Vec<Contact>> {
    let mut contacts = Vec::new();

    for (idx, raw) in content.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).collect();
        if fields.len() != FIELD_COUNT {
            return Err(PhonebookError::MalformedRecord {
                line: idx + 1,
                fields: fields.len(),
            });
        }

        contacts.push(Contact::new(fields[0], fields[1], fields[2]));
    }

    Ok(contacts)
}

/// Render contacts as file content. Lines are joined by `\n`; no trailing newline.
pub fn format_records<'a, I>(contacts: I, delimiter: char) -> String
where
    I: IntoIterator<Item = &'a Contact>,
{
    let separator = delimiter.to_string();
    contacts
        .into_iter()
        .map(|contact| contact.join(&separator))
        .collect::<Vec<_>>()
        .join("\n")
}
