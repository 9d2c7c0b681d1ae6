//! Core library for the contact book.
//!
//! This crate provides the domain models, the email/phone validators, and the
//! SQLite database operations, independent of any front end (CLI, TUI, etc.).
//!
//! # Usage
//!
//! ```no_run
//! use contacts_core::Database;
//!
//! let mut db = Database::open_default()?;
//! db.migrate()?;
//!
//! db.add_contact("Alice", &["alice@example.com".into()], &[])?;
//! let contacts = db.list_contacts()?;
//! # Ok::<(), contacts_core::db::DbError>(())
//! ```

pub mod db;
pub mod models;
pub mod validate;

// Re-export commonly used types at crate root
pub use db::Database;
