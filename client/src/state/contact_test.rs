use super::*;

fn filled() -> ContactDraft {
    ContactDraft {
        name: "  Ada Lovelace ".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: String::new(),
        message: "Let's build something.\n".to_owned(),
    }
}

// --- validate ---

#[test]
fn valid_draft_is_trimmed() {
    let submission = filled().validate().expect("valid");
    assert_eq!(submission.name, "Ada Lovelace");
    assert_eq!(submission.message, "Let's build something.");
}

#[test]
fn blank_subject_becomes_none() {
    let mut draft = filled();
    draft.subject = "   ".to_owned();
    assert_eq!(draft.validate().expect("valid").subject, None);

    draft.subject = " Hello ".to_owned();
    assert_eq!(draft.validate().expect("valid").subject.as_deref(), Some("Hello"));
}

#[test]
fn empty_draft_reports_name_first() {
    let err = ContactDraft::default().validate().unwrap_err();
    assert_eq!(err, ContactFormError::Missing(ContactField::Name));
    assert_eq!(err.to_string(), "Name is required");
}

#[test]
fn whitespace_only_message_is_missing() {
    let mut draft = filled();
    draft.message = " \n\t".to_owned();
    assert_eq!(draft.validate().unwrap_err(), ContactFormError::Missing(ContactField::Message));
}

#[test]
fn email_needs_text_around_at() {
    for bad in ["ada.example.com", "@example.com", "ada@"] {
        let mut draft = filled();
        draft.email = bad.to_owned();
        let err = draft.validate().unwrap_err();
        assert_eq!(err, ContactFormError::InvalidEmail, "{bad}");
        assert_eq!(err.field(), ContactField::Email);
    }
}

// --- set / get ---

#[test]
fn set_and_get_address_the_same_field() {
    let mut draft = ContactDraft::default();
    for field in [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message] {
        draft.set(field, field.label().to_lowercase());
        assert_eq!(draft.get(field), field.label().to_lowercase());
    }
}
