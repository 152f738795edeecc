use assert_cmd::Command;
use std::fs;
use std::path::Path;

#[allow(dead_code)]
pub const TWO_CONTACTS: &str = "John Doe;1234567890;Friend\nJane Smith;0987654321;Work";

pub fn phonebook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env_remove("PHONEBOOK_FILE");
    cmd.env_remove("PHONEBOOK_DELIMITER");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write the two-contact phone book to `dir/phone_book.txt`
#[allow(dead_code)]
pub fn write_book(dir: &Path) {
    fs::write(dir.join("phone_book.txt"), TWO_CONTACTS).unwrap();
}
