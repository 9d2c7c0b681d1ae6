use serde::{Deserialize, Serialize};

/// A row from the `contacts` table. Names carry no uniqueness constraint;
/// several contacts may share one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
}

/// Read model combining a contact with its full sets of emails and phones,
/// as returned by list and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactView {
    pub id: i64,
    pub name: String,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

/// Result of adding a contact. Emails and phones that failed shape validation
/// are not stored; they are reported back here so front ends can surface them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOutcome {
    pub contact_id: i64,
    pub skipped_emails: Vec<String>,
    pub skipped_phones: Vec<String>,
}

impl AddOutcome {
    /// True when every submitted email and phone was stored.
    pub fn is_clean(&self) -> bool {
        self.skipped_emails.is_empty() && self.skipped_phones.is_empty()
    }
}

/// Result of a delete-by-name request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The supplied name was empty or whitespace-only; the store was not touched.
    Rejected,
    /// All contacts matching the name exactly were removed, along with their
    /// emails and phones. `count` is the number of contact rows deleted.
    Deleted { count: usize },
    /// No contact matched the name.
    NotFound,
}
