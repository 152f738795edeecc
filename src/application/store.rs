//! The in-memory contact store

use crate::domain::{
    format_records, parse_records, validate_field, validate_phone, Contact, ContactId,
    ContactPatch,
};
use crate::error::{PhonebookError, Result};
use crate::infrastructure::{Config, ContactRepository, FlatFileRepository};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Contacts keyed by id. Ids only grow, so key order is insertion order.
pub type Contacts = BTreeMap<ContactId, Contact>;

/// In-memory phone book backed by a repository.
///
/// The store starts closed; [`ContactStore::load`] opens it once, after which
/// every other operation is allowed.
pub struct ContactStore<R: ContactRepository = FlatFileRepository> {
    records: Contacts,
    delimiter: char,
    repository: R,
    opened: bool,
    last_issued: Option<ContactId>,
}

impl ContactStore<FlatFileRepository> {
    /// Create a closed store for the file and delimiter in `config`
    pub fn from_config(config: &Config) -> Self {
        ContactStore::new(FlatFileRepository::new(&config.file), config.delimiter)
    }
}

impl<R: ContactRepository> ContactStore<R> {
    /// Create a closed, empty store
    pub fn new(repository: R, delimiter: char) -> Self {
        ContactStore {
            records: Contacts::new(),
            delimiter,
            repository,
            opened: false,
            last_issued: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    pub fn path(&self) -> &Path {
        self.repository.location()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All contacts, in id order
    pub fn records(&self) -> &Contacts {
        &self.records
    }

    /// Read the backing file and populate the store.
    /// Ids are assigned 1, 2, 3... in file order.
    pub fn load(&mut self) -> Result<()> {
        if self.opened {
            warn!("Refusing to load {}: already open", self.path().display());
            return Err(PhonebookError::AlreadyOpen);
        }

        let content = self.repository.read()?;
        let contacts = parse_records(&content, self.delimiter)?;

        for contact in contacts {
            let id = self.next_id();
            self.insert(id, contact);
        }
        self.opened = true;

        info!(
            "Loaded {} contacts from {}",
            self.records.len(),
            self.path().display()
        );
        Ok(())
    }

    /// Overwrite the backing file with the current contacts
    pub fn save(&self) -> Result<()> {
        self.ensure_open()?;

        let content = format_records(self.records.values(), self.delimiter);
        self.repository.write(&content)?;

        info!(
            "Saved {} contacts to {}",
            self.records.len(),
            self.path().display()
        );
        Ok(())
    }

    /// Validate and insert a new contact, returning its id
    pub fn add_contact(&mut self, candidate: Contact) -> Result<ContactId> {
        self.ensure_open()?;
        validate_phone(&candidate.phone)?;
        self.validate_fields(&candidate.name, &candidate.phone, &candidate.comment)?;

        let id = self.next_id();
        debug!("Adding contact {} as id {}", candidate.name, id);
        self.insert(id, candidate);
        Ok(id)
    }

    /// Merge `patch` into the contact with the given id.
    ///
    /// The patch phone is validated as given, so an empty phone is rejected
    /// even though other empty fields mean "keep".
    pub fn edit_contact(&mut self, id: &str, patch: ContactPatch) -> Result<Contact> {
        self.ensure_open()?;
        let id = ContactId::parse(id)?;
        let current = self
            .records
            .get(&id)
            .ok_or(PhonebookError::NotFound(id))?;

        validate_phone(&patch.phone)?;
        self.validate_fields(&patch.name, &patch.phone, &patch.comment)?;

        let merged = current.merged_with(&patch);
        debug!("Editing contact {}: {:?} -> {:?}", id, current, merged);
        self.records.insert(id, merged.clone());
        Ok(merged)
    }

    /// Contacts whose "name phone comment" contains `keyword`, ignoring case
    pub fn find_contact(&self, keyword: &str) -> Result<Contacts> {
        self.ensure_open()?;

        let found: Contacts = self
            .records
            .iter()
            .filter(|(_, contact)| contact.matches(keyword))
            .map(|(id, contact)| (*id, contact.clone()))
            .collect();

        debug!("Search for '{}' matched {} contacts", keyword, found.len());
        Ok(found)
    }

    /// Remove and return the contact with the given id
    pub fn delete_contact(&mut self, id: &str) -> Result<Contact> {
        self.ensure_open()?;
        let id = ContactId::parse(id)?;
        let removed = self
            .records
            .remove(&id)
            .ok_or(PhonebookError::NotFound(id))?;

        debug!("Deleted contact {} ({})", id, removed.name);
        Ok(removed)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.opened {
            Ok(())
        } else {
            Err(PhonebookError::NotOpen)
        }
    }

    fn validate_fields(&self, name: &str, phone: &str, comment: &str) -> Result<()> {
        validate_field("name", name, self.delimiter)?;
        validate_field("phone", phone, self.delimiter)?;
        validate_field("comment", comment, self.delimiter)
    }

    /// One past the highest id ever issued or stored, so deleted ids stay retired
    fn next_id(&self) -> ContactId {
        let max_existing = self.records.keys().next_back().copied();
        max_existing
            .max(self.last_issued)
            .map_or(ContactId::FIRST, ContactId::next)
    }

    fn insert(&mut self, id: ContactId, contact: Contact) {
        self.records.insert(id, contact);
        self.last_issued = self.last_issued.max(Some(id));
    }
}
