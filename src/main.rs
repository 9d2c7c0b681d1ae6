use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contacts_core::models::{ContactView, DeleteOutcome};
use contacts_core::Database;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "Personal contact book backed by SQLite")]
struct Cli {
    /// Path to the database file (defaults to the per-user data directory,
    /// or $CONTACTS_DB when set)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a contact
    Add {
        /// Contact name
        name: String,

        /// Comma-separated email addresses
        #[arg(short, long, default_value = "")]
        emails: String,

        /// Comma-separated phone numbers
        #[arg(short, long, default_value = "")]
        phones: String,
    },
    /// List all contacts
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Search contacts by name, email, or phone substring
    Search {
        term: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete every contact matching a name exactly
    Delete {
        /// Contact name
        name: String,
    },
    /// Print the database file location
    Path,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "contacts=info,contacts_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Path) => {
            let path = match cli.db {
                Some(path) => path,
                None => Database::default_path()?,
            };
            println!("{}", path.display());
        }
        Some(Commands::Add {
            name,
            emails,
            phones,
        }) => {
            let mut db = open_db(&cli.db)?;
            let outcome = db.add_contact(&name, &split_list(&emails), &split_list(&phones))?;
            println!("Added contact '{}' (id {}).", name, outcome.contact_id);
            for email in &outcome.skipped_emails {
                println!("Skipped invalid email: {email}");
            }
            for phone in &outcome.skipped_phones {
                println!("Skipped invalid phone: {phone}");
            }
        }
        Some(Commands::Search { term, json }) => {
            let db = open_db(&cli.db)?;
            print_contacts(&db.search_contacts(&term)?, json)?;
        }
        Some(Commands::Delete { name }) => {
            let db = open_db(&cli.db)?;
            match db.delete_contact(&name)? {
                DeleteOutcome::Deleted { count } => {
                    println!("Deleted {count} contact(s) named '{name}'.");
                }
                DeleteOutcome::NotFound => {
                    println!("No contact found with the name '{name}'.");
                }
                DeleteOutcome::Rejected => {
                    println!("Contact name cannot be empty.");
                }
            }
        }
        Some(Commands::List { json }) => {
            let db = open_db(&cli.db)?;
            print_contacts(&db.list_contacts()?, json)?;
        }
        None => {
            let db = open_db(&cli.db)?;
            print_contacts(&db.list_contacts()?, false)?;
        }
    }

    Ok(())
}

/// Open the store (at `path` when given, the default location otherwise) and
/// ensure the schema.
fn open_db(path: &Option<PathBuf>) -> anyhow::Result<Database> {
    let db = match path {
        Some(path) => Database::open(path)?,
        None => Database::open_default()?,
    };
    db.migrate()?;
    tracing::info!("contact book ready");
    Ok(db)
}

/// Split a comma-separated input into trimmed, non-empty entries.
fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_contacts(contacts: &[ContactView], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts found.");
        return Ok(());
    }

    for c in contacts {
        println!(
            "[{}] {}  emails: {}  phones: {}",
            c.id,
            c.name,
            c.emails.join(", "),
            c.phones.join(", "),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{open_db, split_list};

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list(" a@b.com , c@d.org ,,"),
            vec!["a@b.com".to_string(), "c@d.org".to_string()]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn open_db_creates_and_migrates_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = Some(dir.path().join("contacts.db"));

        let db = open_db(&path).unwrap();
        assert!(db.list_contacts().unwrap().is_empty());

        // Reopening an existing store is safe
        let db = open_db(&path).unwrap();
        assert!(db.list_contacts().unwrap().is_empty());
    }
}
