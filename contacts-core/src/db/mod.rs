//! SQLite persistence for the contact book.
//!
//! All writes go through [`Database`]; the store file is the single source of
//! truth and no state is cached between calls. Front ends open one `Database`,
//! call [`Database::migrate`], and then invoke the four operations.

mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::models::{AddOutcome, Contact, ContactView, DeleteOutcome};
use crate::validate::{is_valid_email, is_valid_phone};

/// Errors surfaced by database operations. Front ends render these as plain
/// text; no rusqlite fault reaches the user directly.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not determine a data directory for the contact book")]
    NoDataDir,

    #[error("failed to create database directory: {0}")]
    CreateDir(#[from] std::io::Error),
}

/// Handle on the contact store. Owns a single connection; operations are
/// synchronous and run to completion before returning.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if missing) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        Self::configure(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database. Used by tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        Self::configure(&conn)?;
        Ok(Self { conn })
    }

    /// Open the database at the default per-user location, creating parent
    /// directories as needed.
    pub fn open_default() -> Result<Self, DbError> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::open(path)
    }

    /// Default store location: `$CONTACTS_DB` if set, otherwise
    /// `contacts.db` under the platform data directory.
    pub fn default_path() -> Result<PathBuf, DbError> {
        if let Ok(path) = std::env::var("CONTACTS_DB") {
            return Ok(PathBuf::from(path));
        }
        let dirs = directories::ProjectDirs::from("", "", "contacts").ok_or(DbError::NoDataDir)?;
        Ok(dirs.data_dir().join("contacts.db"))
    }

    // SQLite ships with foreign keys off and ASCII-case-insensitive LIKE;
    // both defaults would break the cascade-delete and search contracts, so
    // every connection flips them explicitly.
    fn configure(conn: &Connection) -> Result<(), DbError> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "case_sensitive_like", "ON")?;
        Ok(())
    }

    /// Create the three tables if absent. Safe to call on every start.
    pub fn migrate(&self) -> Result<(), DbError> {
        self.conn.execute_batch(schema::SCHEMA)?;
        tracing::debug!("schema ensured");
        Ok(())
    }

    /// Insert a contact with its emails and phones as one transaction.
    ///
    /// Emails and phones that fail shape validation are skipped, logged, and
    /// reported in the returned [`AddOutcome`]; the rest of the operation
    /// proceeds. A store error rolls the whole insertion back, so no partial
    /// contact survives. The name is stored as given, empty or not, and may
    /// duplicate an existing contact's name.
    pub fn add_contact(
        &mut self,
        name: &str,
        emails: &[String],
        phones: &[String],
    ) -> Result<AddOutcome, DbError> {
        let tx = self.conn.transaction()?;

        tx.execute("INSERT INTO contacts (name) VALUES (?1)", params![name])?;
        let contact_id = tx.last_insert_rowid();

        let mut skipped_emails = Vec::new();
        for email in emails {
            if is_valid_email(email) {
                tx.execute(
                    "INSERT INTO emails (contact_id, email) VALUES (?1, ?2)",
                    params![contact_id, email],
                )?;
            } else {
                tracing::warn!(%email, "invalid email skipped");
                skipped_emails.push(email.clone());
            }
        }

        let mut skipped_phones = Vec::new();
        for phone in phones {
            if is_valid_phone(phone) {
                tx.execute(
                    "INSERT INTO phones (contact_id, phone) VALUES (?1, ?2)",
                    params![contact_id, phone],
                )?;
            } else {
                tracing::warn!(%phone, "invalid phone skipped");
                skipped_phones.push(phone.clone());
            }
        }

        tx.commit()?;

        Ok(AddOutcome {
            contact_id,
            skipped_emails,
            skipped_phones,
        })
    }

    /// Return every contact with its full email and phone sets, in storage
    /// order. No pagination.
    pub fn list_contacts(&self) -> Result<Vec<ContactView>, DbError> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM contacts")?;
        let contacts = stmt
            .query_map([], |row| {
                Ok(Contact {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        contacts.into_iter().map(|c| self.view_of(c)).collect()
    }

    /// Return every contact whose name, or any of its emails or phones,
    /// contains `term` as a case-sensitive substring. Each match appears once
    /// with its complete email and phone sets. The empty term matches all
    /// contacts; no match yields an empty vec.
    ///
    /// `%` and `_` in the term keep their LIKE wildcard meaning (any sequence
    /// / any single character) rather than matching literally; inherited
    /// behavior, kept intentionally.
    pub fn search_contacts(&self, term: &str) -> Result<Vec<ContactView>, DbError> {
        let pattern = format!("%{term}%");
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT contacts.id, contacts.name
             FROM contacts
             LEFT JOIN emails ON contacts.id = emails.contact_id
             LEFT JOIN phones ON contacts.id = phones.contact_id
             WHERE contacts.name LIKE ?1
                OR emails.email LIKE ?1
                OR phones.phone LIKE ?1",
        )?;
        let matches = stmt
            .query_map(params![pattern], |row| {
                Ok(Contact {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        matches.into_iter().map(|c| self.view_of(c)).collect()
    }

    /// Delete every contact named exactly `name`, cascading to its emails
    /// and phones. An empty or whitespace-only name is rejected before the
    /// store is touched.
    pub fn delete_contact(&self, name: &str) -> Result<DeleteOutcome, DbError> {
        if name.trim().is_empty() {
            return Ok(DeleteOutcome::Rejected);
        }

        let count = self
            .conn
            .execute("DELETE FROM contacts WHERE name = ?1", params![name])?;

        if count == 0 {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted { count })
        }
    }

    fn view_of(&self, contact: Contact) -> Result<ContactView, DbError> {
        let emails =
            self.strings_for_contact("SELECT email FROM emails WHERE contact_id = ?1", contact.id)?;
        let phones =
            self.strings_for_contact("SELECT phone FROM phones WHERE contact_id = ?1", contact.id)?;
        Ok(ContactView {
            id: contact.id,
            name: contact.name,
            emails,
            phones,
        })
    }

    fn strings_for_contact(&self, sql: &str, contact_id: i64) -> Result<Vec<String>, DbError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![contact_id], |row| row.get(0))?;
        Ok(rows.collect::<Result<Vec<String>, _>>()?)
    }
}
