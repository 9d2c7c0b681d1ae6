//! Application state for the contact book TUI.

use contacts_core::db::DbError;
use contacts_core::models::{ContactView, DeleteOutcome};
use contacts_core::Database;
use crossterm::event::KeyCode;

/// Menu entries, in display order.
pub const MENU: [&str; 5] = [
    "Add contact",
    "View contacts",
    "Search contacts",
    "Delete contact",
    "Exit",
];

/// The add-contact form: three text fields plus focus tracking.
#[derive(Default)]
pub struct AddForm {
    pub name: String,
    pub emails: String,
    pub phones: String,
    pub focus: usize,
}

impl AddForm {
    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.emails,
            _ => &mut self.phones,
        }
    }
}

/// Which screen is showing.
pub enum Screen {
    Menu,
    Add(AddForm),
    Search { input: String },
    Delete { input: String },
    Results {
        title: String,
        contacts: Vec<ContactView>,
        scroll: usize,
    },
    Message(String),
}

/// Application state.
pub struct App {
    db: Database,
    pub screen: Screen,
    pub selected: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            screen: Screen::Menu,
            selected: 0,
            should_quit: false,
        }
    }

    /// Handle a key press on the current screen.
    pub fn on_key(&mut self, code: KeyCode) {
        let screen = std::mem::replace(&mut self.screen, Screen::Menu);
        self.screen = match screen {
            Screen::Menu => self.on_menu_key(code),
            Screen::Add(form) => self.on_add_key(form, code),
            Screen::Search { input } => self.on_search_key(input, code),
            Screen::Delete { input } => self.on_delete_key(input, code),
            Screen::Results {
                title,
                contacts,
                scroll,
            } => Self::on_results_key(title, contacts, scroll, code),
            Screen::Message(_) => Screen::Menu,
        };
    }

    fn on_menu_key(&mut self, code: KeyCode) -> Screen {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Screen::Menu
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < MENU.len() - 1 {
                    self.selected += 1;
                }
                Screen::Menu
            }
            KeyCode::Enter => self.open_selected(),
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                Screen::Menu
            }
            _ => Screen::Menu,
        }
    }

    fn open_selected(&mut self) -> Screen {
        match self.selected {
            0 => Screen::Add(AddForm::default()),
            1 => {
                let result = self.db.list_contacts();
                Self::show_contacts("Contacts".into(), result)
            }
            2 => Screen::Search {
                input: String::new(),
            },
            3 => Screen::Delete {
                input: String::new(),
            },
            _ => {
                self.should_quit = true;
                Screen::Menu
            }
        }
    }

    fn on_add_key(&mut self, mut form: AddForm, code: KeyCode) -> Screen {
        match code {
            KeyCode::Esc => Screen::Menu,
            KeyCode::Enter => self.submit_add(form),
            KeyCode::Tab | KeyCode::Down => {
                form.focus = (form.focus + 1) % 3;
                Screen::Add(form)
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focus = (form.focus + 2) % 3;
                Screen::Add(form)
            }
            KeyCode::Backspace => {
                form.field_mut().pop();
                Screen::Add(form)
            }
            KeyCode::Char(c) => {
                form.field_mut().push(c);
                Screen::Add(form)
            }
            _ => Screen::Add(form),
        }
    }

    fn submit_add(&mut self, form: AddForm) -> Screen {
        let emails = split_list(&form.emails);
        let phones = split_list(&form.phones);

        match self.db.add_contact(&form.name, &emails, &phones) {
            Ok(outcome) => {
                let mut lines = vec![format!("Contact '{}' added successfully.", form.name)];
                for email in &outcome.skipped_emails {
                    lines.push(format!("Invalid email skipped: {email}"));
                }
                for phone in &outcome.skipped_phones {
                    lines.push(format!("Invalid phone skipped: {phone}"));
                }
                Screen::Message(lines.join("\n"))
            }
            Err(e) => Screen::Message(format!("An error occurred: {e}")),
        }
    }

    fn on_search_key(&mut self, mut input: String, code: KeyCode) -> Screen {
        match code {
            KeyCode::Esc => Screen::Menu,
            KeyCode::Enter => {
                let result = self.db.search_contacts(&input);
                Self::show_contacts(format!("Results for '{input}'"), result)
            }
            KeyCode::Backspace => {
                input.pop();
                Screen::Search { input }
            }
            KeyCode::Char(c) => {
                input.push(c);
                Screen::Search { input }
            }
            _ => Screen::Search { input },
        }
    }

    fn on_delete_key(&mut self, mut input: String, code: KeyCode) -> Screen {
        match code {
            KeyCode::Esc => Screen::Menu,
            KeyCode::Enter => match self.db.delete_contact(&input) {
                Ok(DeleteOutcome::Deleted { count }) => {
                    Screen::Message(format!("Deleted {count} contact(s) named '{input}'."))
                }
                Ok(DeleteOutcome::NotFound) => {
                    Screen::Message(format!("No contact found with the name '{input}'."))
                }
                Ok(DeleteOutcome::Rejected) => {
                    Screen::Message("Contact name cannot be empty.".into())
                }
                Err(e) => Screen::Message(format!("An error occurred: {e}")),
            },
            KeyCode::Backspace => {
                input.pop();
                Screen::Delete { input }
            }
            KeyCode::Char(c) => {
                input.push(c);
                Screen::Delete { input }
            }
            _ => Screen::Delete { input },
        }
    }

    fn on_results_key(
        title: String,
        contacts: Vec<ContactView>,
        scroll: usize,
        code: KeyCode,
    ) -> Screen {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Screen::Menu,
            KeyCode::Up | KeyCode::Char('k') => Screen::Results {
                title,
                contacts,
                scroll: scroll.saturating_sub(1),
            },
            KeyCode::Down | KeyCode::Char('j') => {
                let max = contacts.len().saturating_sub(1);
                Screen::Results {
                    title,
                    contacts,
                    scroll: (scroll + 1).min(max),
                }
            }
            _ => Screen::Results {
                title,
                contacts,
                scroll,
            },
        }
    }

    fn show_contacts(title: String, result: Result<Vec<ContactView>, DbError>) -> Screen {
        match result {
            Ok(contacts) => Screen::Results {
                title,
                contacts,
                scroll: 0,
            },
            Err(e) => Screen::Message(format!("An error occurred: {e}")),
        }
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_core::Database;

    fn app() -> App {
        let db = Database::open_in_memory().unwrap();
        db.migrate().unwrap();
        App::new(db)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.on_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn menu_navigation_clamps_at_edges() {
        let mut a = app();
        a.on_key(KeyCode::Up);
        assert_eq!(a.selected, 0);
        for _ in 0..10 {
            a.on_key(KeyCode::Down);
        }
        assert_eq!(a.selected, MENU.len() - 1);
    }

    #[test]
    fn exit_entry_quits() {
        let mut a = app();
        for _ in 0..MENU.len() {
            a.on_key(KeyCode::Down);
        }
        a.on_key(KeyCode::Enter);
        assert!(a.should_quit);
    }

    #[test]
    fn add_form_flow_persists_contact() {
        let mut a = app();
        a.on_key(KeyCode::Enter); // open "Add contact"
        type_str(&mut a, "Alice");
        a.on_key(KeyCode::Tab);
        type_str(&mut a, "a@b.com, bad-email");
        a.on_key(KeyCode::Tab);
        type_str(&mut a, "+123456");
        a.on_key(KeyCode::Enter); // submit

        match &a.screen {
            Screen::Message(text) => {
                assert!(text.contains("Alice"));
                assert!(text.contains("bad-email"));
            }
            _ => panic!("expected message screen"),
        }

        // Back at the menu, viewing shows the stored contact
        a.on_key(KeyCode::Enter); // dismiss message
        a.on_key(KeyCode::Down);
        a.on_key(KeyCode::Enter); // "View contacts"
        match &a.screen {
            Screen::Results { contacts, .. } => {
                assert_eq!(contacts.len(), 1);
                assert_eq!(contacts[0].emails, vec!["a@b.com".to_string()]);
            }
            _ => panic!("expected results screen"),
        }
    }

    #[test]
    fn delete_prompt_rejects_empty_name() {
        let mut a = app();
        a.selected = 3;
        a.on_key(KeyCode::Enter); // open "Delete contact"
        a.on_key(KeyCode::Enter); // submit empty input
        match &a.screen {
            Screen::Message(text) => assert_eq!(text, "Contact name cannot be empty."),
            _ => panic!("expected message screen"),
        }
    }
}
