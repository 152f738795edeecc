//! Interactive menu

use crate::application::ContactStore;
use crate::cli::output::{format_command_error, format_contact_table, format_message};
use crate::domain::{Contact, ContactPatch};
use crate::infrastructure::ContactRepository;
use anyhow::bail;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

const MENU_TITLE: &str = "Main menu:";
const CHOICE_PROMPT: &str = "Choose a menu item: ";
const CHOICE_ERROR: &str = "Please enter a number from the menu";
const EMPTY_BOOK: &str = "Phone book is empty or not opened";
const NO_RESULTS: &str = "No contacts found";

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Open,
    Save,
    ShowAll,
    Add,
    Edit,
    Find,
    Delete,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 8] = [
        MenuCommand::Open,
        MenuCommand::Save,
        MenuCommand::ShowAll,
        MenuCommand::Add,
        MenuCommand::Edit,
        MenuCommand::Find,
        MenuCommand::Delete,
        MenuCommand::Exit,
    ];

    /// Number the user types to pick this entry
    pub fn number(self) -> u8 {
        match self {
            MenuCommand::Open => 1,
            MenuCommand::Save => 2,
            MenuCommand::ShowAll => 3,
            MenuCommand::Add => 4,
            MenuCommand::Edit => 5,
            MenuCommand::Find => 6,
            MenuCommand::Delete => 7,
            MenuCommand::Exit => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::Open => "Open phone book",
            MenuCommand::Save => "Save phone book",
            MenuCommand::ShowAll => "Show all contacts",
            MenuCommand::Add => "Add contact",
            MenuCommand::Edit => "Edit contact",
            MenuCommand::Find => "Find contact",
            MenuCommand::Delete => "Delete contact",
            MenuCommand::Exit => "Exit",
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.number() == number)
    }
}

impl FromStr for MenuCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(MenuCommand::from_number)
            .ok_or_else(|| format!("Invalid menu item: '{}'", s))
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Drives a [`ContactStore`] from line-based input until the user exits
/// or the input ends.
pub struct MenuSession<R: ContactRepository, I, O> {
    store: ContactStore<R>,
    input: I,
    output: O,
}

impl<R: ContactRepository, I: BufRead, O: Write> MenuSession<R, I, O> {
    pub fn new(store: ContactStore<R>, input: I, output: O) -> Self {
        MenuSession {
            store,
            input,
            output,
        }
    }

    pub fn into_store(self) -> ContactStore<R> {
        self.store
    }

    /// Run the menu loop. Failed commands are reported and the loop goes on;
    /// only output errors end it early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(command) = self.read_command()? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            debug!("Menu command: {:?}", command);
            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(err) => {
                    warn!("{:?} failed: {}", command, err);
                    let msg = format_command_error(&err);
                    self.print_message(&msg)?;
                }
            }
        }
    }

    fn dispatch(&mut self, command: MenuCommand) -> anyhow::Result<Flow> {
        match command {
            MenuCommand::Open => {
                self.store.load()?;
                self.print_message("Phone book opened successfully")?;
            }
            MenuCommand::Save => {
                self.store.save()?;
                self.print_message("Phone book saved successfully")?;
            }
            MenuCommand::ShowAll => {
                let table = format_contact_table(self.store.records(), EMPTY_BOOK);
                self.show_table(&table)?;
            }
            MenuCommand::Add => {
                writeln!(self.output, "Enter the new contact:")?;
                let (name, phone, comment) = self.prompt_fields()?;
                let id = self.store.add_contact(Contact::new(name, phone, comment))?;
                self.print_message(&format!("Contact added with id {}", id))?;
            }
            MenuCommand::Edit => {
                let id = self.prompt("Enter the id of the contact to edit: ")?;
                writeln!(
                    self.output,
                    "Enter new values (leave name or comment empty to keep them):"
                )?;
                let (name, phone, comment) = self.prompt_fields()?;
                let merged = self
                    .store
                    .edit_contact(&id, ContactPatch::new(name, phone, comment))?;
                self.print_message(&format!("Contact '{}' updated", merged.name))?;
            }
            MenuCommand::Find => {
                let keyword = self.prompt("Enter a keyword to search for: ")?;
                let found = self.store.find_contact(&keyword)?;
                let table = format_contact_table(&found, NO_RESULTS);
                self.show_table(&table)?;
            }
            MenuCommand::Delete => {
                let id = self.prompt("Enter the id of the contact to delete: ")?;
                let removed = self.store.delete_contact(&id)?;
                self.print_message(&format!("Contact '{}' deleted", removed.name))?;
            }
            MenuCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", MENU_TITLE)?;
        for command in MenuCommand::ALL {
            writeln!(self.output, "\t{}. {}", command.number(), command.label())?;
        }
        Ok(())
    }

    /// Ask until a valid menu number is entered; `None` once input ends
    fn read_command(&mut self) -> io::Result<Option<MenuCommand>> {
        loop {
            write!(self.output, "\n{}", CHOICE_PROMPT)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(command) => return Ok(Some(command)),
                Err(_) => writeln!(self.output, "{}", CHOICE_ERROR)?,
            }
        }
    }

    /// Read one line; bytes that are not UTF-8 become replacement characters
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        match self.read_line()? {
            Some(line) => Ok(line),
            None => bail!("input ended"),
        }
    }

    fn prompt_fields(&mut self) -> anyhow::Result<(String, String, String)> {
        let name = self.prompt("Name: ")?;
        let phone = self.prompt("Phone: ")?;
        let comment = self.prompt("Comment: ")?;
        Ok((name, phone, comment))
    }

    fn show_table(&mut self, table: &str) -> io::Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", table)?;
        if !table.ends_with('\n') {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn print_message(&mut self, msg: &str) -> io::Result<()> {
        write!(self.output, "{}", format_message(msg))
    }
}
