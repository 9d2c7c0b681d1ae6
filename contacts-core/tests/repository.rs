//! End-to-end tests of the contact repository through its public API.

use contacts_core::models::DeleteOutcome;
use contacts_core::Database;

fn open() -> Database {
    let db = Database::open_in_memory().expect("open in-memory db");
    db.migrate().expect("migrate");
    db
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn add_then_list_round_trips_valid_entries() {
    let mut db = open();
    let emails = strings(&["alice@example.com", "a@b.org"]);
    let phones = strings(&["+123456", "987654"]);

    let outcome = db.add_contact("Alice", &emails, &phones).unwrap();
    assert!(outcome.is_clean());

    let contacts = db.list_contacts().unwrap();
    assert_eq!(contacts.len(), 1);

    let alice = &contacts[0];
    assert_eq!(alice.id, outcome.contact_id);
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.emails, emails);
    assert_eq!(alice.phones, phones);
}

#[test]
fn invalid_entries_never_reach_list_output() {
    let mut db = open();
    let outcome = db
        .add_contact(
            "Alice",
            &strings(&["a@b.com", "bad-email"]),
            &strings(&["+123456", "abc"]),
        )
        .unwrap();

    assert_eq!(outcome.skipped_emails, strings(&["bad-email"]));
    assert_eq!(outcome.skipped_phones, strings(&["abc"]));

    let contacts = db.list_contacts().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].emails, strings(&["a@b.com"]));
    assert_eq!(contacts[0].phones, strings(&["+123456"]));
}

#[test]
fn contact_with_no_emails_or_phones_is_fine() {
    let mut db = open();
    db.add_contact("Bob", &[], &[]).unwrap();

    let contacts = db.list_contacts().unwrap();
    assert_eq!(contacts.len(), 1);
    assert!(contacts[0].emails.is_empty());
    assert!(contacts[0].phones.is_empty());
}

#[test]
fn list_preserves_insertion_order() {
    let mut db = open();
    db.add_contact("First", &[], &[]).unwrap();
    db.add_contact("Second", &[], &[]).unwrap();
    db.add_contact("Third", &[], &[]).unwrap();

    let names: Vec<_> = db
        .list_contacts()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, strings(&["First", "Second", "Third"]));
}

#[test]
fn delete_then_list_shows_no_trace() {
    let mut db = open();
    db.add_contact("Bob", &[], &[]).unwrap();

    let outcome = db.delete_contact("Bob").unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted { count: 1 });

    assert!(db.list_contacts().unwrap().is_empty());
}

#[test]
fn delete_unknown_name_reports_not_found() {
    let mut db = open();
    db.add_contact("Bob", &[], &[]).unwrap();

    let outcome = db.delete_contact("NoSuchName").unwrap();
    assert_eq!(outcome, DeleteOutcome::NotFound);
    assert_eq!(db.list_contacts().unwrap().len(), 1);
}

#[test]
fn delete_rejects_empty_and_whitespace_names() {
    let db = open();
    assert_eq!(db.delete_contact("").unwrap(), DeleteOutcome::Rejected);
    assert_eq!(db.delete_contact("   ").unwrap(), DeleteOutcome::Rejected);
}

#[test]
fn add_accepts_empty_name() {
    // Deliberate asymmetry with delete: add stores whatever name it is given.
    let mut db = open();
    db.add_contact("", &[], &[]).unwrap();
    assert_eq!(db.list_contacts().unwrap().len(), 1);
}

#[test]
fn duplicate_names_are_allowed() {
    let mut db = open();
    db.add_contact("Twin", &strings(&["one@a.io"]), &[]).unwrap();
    db.add_contact("Twin", &strings(&["two@a.io"]), &[]).unwrap();

    assert_eq!(db.list_contacts().unwrap().len(), 2);
}

#[test]
fn search_matches_name_email_or_phone() {
    let mut db = open();
    db.add_contact("Alice", &strings(&["x@y.com"]), &strings(&["+111222"]))
        .unwrap();
    db.add_contact("Bob", &strings(&["bob@mail.net"]), &strings(&["333444"]))
        .unwrap();

    let by_name = db.search_contacts("Ali").unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Alice");

    let by_email = db.search_contacts("mail.net").unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Bob");

    let by_phone = db.search_contacts("+111").unwrap();
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].name, "Alice");
}

#[test]
fn search_returns_each_match_once_with_full_sets() {
    // "com" hits both the email and (as a substring) nothing else for Alice;
    // the join must not duplicate her, and the result carries every field.
    let mut db = open();
    db.add_contact(
        "Communal",
        &strings(&["x@y.com", "z@w.com"]),
        &strings(&["+555"]),
    )
    .unwrap();

    let results = db.search_contacts("com").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].emails, strings(&["x@y.com", "z@w.com"]));
    assert_eq!(results[0].phones, strings(&["+555"]));
}

#[test]
fn empty_term_matches_every_contact_once() {
    let mut db = open();
    db.add_contact("Alice", &strings(&["a@b.com"]), &[]).unwrap();
    db.add_contact("Bob", &[], &strings(&["+999"])).unwrap();

    let results = db.search_contacts("").unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn search_with_no_match_returns_empty() {
    let mut db = open();
    db.add_contact("Alice", &[], &[]).unwrap();
    assert!(db.search_contacts("zzz").unwrap().is_empty());
}
