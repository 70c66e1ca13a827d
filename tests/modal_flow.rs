use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ldapform::{
    FieldId, LdapModal, MemoryDirectory, NotificationKind, NotificationSink, OrgId, SubmitMode,
    UiOptions,
};

#[derive(Default)]
struct CollectingSink {
    notes: RefCell<Vec<(NotificationKind, String)>>,
}

impl NotificationSink for CollectingSink {
    fn notify(&self, kind: NotificationKind, text: &str) {
        self.notes.borrow_mut().push((kind, text.to_string()));
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(modal: &mut LdapModal<'_, MemoryDirectory, CollectingSink>, text: &str) {
    for ch in text.chars() {
        assert!(modal.handle_key(key(KeyCode::Char(ch))));
    }
}

#[test]
fn create_then_update_round_trip() {
    let directory = MemoryDirectory::new();
    let sink = CollectingSink::default();
    let org = OrgId::new("acme");
    let mut modal =
        LdapModal::new(&directory, &sink, Some(org.clone()), UiOptions::default()).unwrap();

    // First open: nothing stored, so the form is in create mode.
    modal.handle_key(key(KeyCode::Enter));
    assert!(modal.is_open());
    assert_eq!(modal.mode(), SubmitMode::Create);

    type_text(&mut modal, "ldaps://ldap.acme.com:636");
    modal.handle_key(key(KeyCode::Tab));
    type_text(&mut modal, "cn=svc,dc=acme,dc=com");
    modal.handle_key(key(KeyCode::Tab));
    type_text(&mut modal, "hunter2");
    modal.handle_key(key(KeyCode::Tab));
    type_text(&mut modal, "ou=people,dc=acme,dc=com");
    modal.handle_key(ctrl('s'));

    assert!(!modal.is_open(), "successful submit closes the modal");
    let stored = directory.record(&org).expect("record was created");
    assert_eq!(stored.url, "ldaps://ldap.acme.com:636");
    assert_eq!(stored.bind_pass, "hunter2");
    assert_eq!(stored.ca_cert, "");
    assert!(!stored.is_active);

    // Second open: the stored record pre-populates the form and submits as
    // an update.
    modal.handle_key(key(KeyCode::Enter));
    assert_eq!(modal.mode(), SubmitMode::Update);
    assert_eq!(
        modal.form().field(FieldId::BindDn).buffer,
        "cn=svc,dc=acme,dc=com"
    );

    modal.handle_key(key(KeyCode::Tab));
    modal.handle_key(key(KeyCode::Tab));
    modal.handle_key(key(KeyCode::Tab));
    assert_eq!(modal.form().focused_field().id, FieldId::SearchBase);
    modal.handle_key(key(KeyCode::Delete));
    type_text(&mut modal, "ou=staff,dc=acme,dc=com");
    modal.handle_key(ctrl('s'));

    let stored = directory.record(&org).expect("record still present");
    assert_eq!(stored.search_base, "ou=staff,dc=acme,dc=com");
    assert!(!stored.is_active);

    assert_eq!(
        sink.notes.borrow().as_slice(),
        [
            (
                NotificationKind::Success,
                "Successfully added LDAP configuration".to_string()
            ),
            (
                NotificationKind::Success,
                "Successfully updated LDAP configuration".to_string()
            ),
        ]
    );
}

#[test]
fn invalid_draft_never_reaches_the_directory() {
    let directory = MemoryDirectory::new();
    let sink = CollectingSink::default();
    let org = OrgId::new("acme");
    let mut modal =
        LdapModal::new(&directory, &sink, Some(org.clone()), UiOptions::default()).unwrap();

    modal.handle_key(key(KeyCode::Enter));
    type_text(&mut modal, "ldaps://ldap.acme.com:636");
    modal.handle_key(ctrl('s'));

    assert!(modal.is_open());
    assert!(directory.record(&org).is_none());
    assert!(sink.notes.borrow().is_empty());
    assert_eq!(modal.form().error_count(), 3);
    assert_eq!(
        modal.form().field(FieldId::Url).buffer,
        "ldaps://ldap.acme.com:636",
        "failed validation keeps the typed input"
    );
}

#[test]
fn typing_with_auto_validate_surfaces_and_clears_field_errors() {
    let directory = MemoryDirectory::new();
    let sink = CollectingSink::default();
    let mut modal = LdapModal::new(
        &directory,
        &sink,
        Some(OrgId::new("acme")),
        UiOptions::default(),
    )
    .unwrap();

    modal.handle_key(key(KeyCode::Enter));
    type_text(&mut modal, "x");
    modal.handle_key(key(KeyCode::Backspace));
    assert_eq!(
        modal.form().field(FieldId::Url).error.as_deref(),
        Some("URL is required")
    );

    type_text(&mut modal, "ldap://dir");
    assert!(modal.form().field(FieldId::Url).error.is_none());
}
