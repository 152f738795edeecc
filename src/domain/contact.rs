//! Contact records and the edit merge

/// A single phone book entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub comment: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Contact {
            name: name.into(),
            phone: phone.into(),
            comment: comment.into(),
        }
    }

    /// The three fields joined by `separator`, in file order
    pub fn join(&self, separator: &str) -> String {
        [
            self.name.as_str(),
            self.phone.as_str(),
            self.comment.as_str(),
        ]
        .join(separator)
    }

    /// Case-insensitive substring match against "name phone comment".
    /// An empty keyword matches every contact.
    pub fn matches(&self, keyword: &str) -> bool {
        self.join(" ")
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// Apply a patch: non-empty patch fields replace ours, empty ones keep ours.
    pub fn merged_with(&self, patch: &ContactPatch) -> Contact {
        fn pick(new: &str, old: &str) -> String {
            let value = if new.is_empty() { old } else { new };
            value.to_string()
        }

        Contact {
            name: pick(&patch.name, &self.name),
            phone: pick(&patch.phone, &self.phone),
            comment: pick(&patch.comment, &self.comment),
        }
    }
}

/// Field values for an edit. Empty strings mean "keep the current value".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactPatch {
    pub name: String,
    pub phone: String,
    pub comment: String,
}

impl ContactPatch {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        ContactPatch {
            name: name.into(),
            phone: phone.into(),
            comment: comment.into(),
        }
    }
}
