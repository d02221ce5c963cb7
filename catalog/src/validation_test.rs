use super::*;

fn draft() -> BookDraft {
    BookDraft {
        title: "Dune".to_owned(),
        authors: "Frank Herbert".to_owned(),
        genre: "sci_fi".to_owned(),
        publication_date: "1965-08-01".to_owned(),
        ..BookDraft::default()
    }
}

#[test]
fn login_requires_both_fields() {
    let error = validate_login(&LoginCredentials::default()).unwrap_err();
    assert_eq!(error.first_field_message("email"), Some(REQUIRED));
    assert_eq!(error.first_field_message("password"), Some(REQUIRED));

    let ok = LoginCredentials { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    assert!(validate_login(&ok).is_ok());
}

#[test]
fn registration_password_mismatch_flags_confirm() {
    let registration = Registration {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "Secret#1".to_owned(),
        password_confirm: "Secret#2".to_owned(),
        ..Registration::default()
    };
    let error = validate_registration(&registration).unwrap_err();
    assert_eq!(error.field_messages("password_confirm"), [PASSWORD_MISMATCH.to_owned()]);
    assert!(error.field_messages("password").is_empty());
}

#[test]
fn registration_blank_password_skips_mismatch() {
    let registration = Registration { username: "bob".to_owned(), email: "b@x.y".to_owned(), ..Registration::default() };
    let error = validate_registration(&registration).unwrap_err();
    assert_eq!(error.first_field_message("password"), Some(REQUIRED));
    assert!(error.field_messages("password_confirm").is_empty());
}

#[test]
fn book_draft_converts_blank_optionals_to_null() {
    let input = draft().to_input().unwrap();
    assert_eq!(input.genre, Genre::SciFi);
    assert_eq!(input.pages, None);
    assert_eq!(input.isbn, None);
}

#[test]
fn book_draft_parses_pages_and_isbn() {
    let input = BookDraft { pages: " 412 ".to_owned(), isbn: "9780441013593".to_owned(), ..draft() }
        .to_input()
        .unwrap();
    assert_eq!(input.pages, Some(412));
    assert_eq!(input.isbn.as_deref(), Some("9780441013593"));
}

#[test]
fn book_draft_rejects_bad_values() {
    let error = BookDraft {
        genre: String::new(),
        pages: "many".to_owned(),
        isbn: "123".to_owned(),
        publication_date: "1965/08/01".to_owned(),
        ..draft()
    }
    .to_input()
    .unwrap_err();
    assert_eq!(error.first_field_message("genre"), Some(GENRE_REQUIRED));
    assert_eq!(error.first_field_message("pages"), Some(INVALID_PAGES));
    assert_eq!(error.first_field_message("isbn"), Some(INVALID_ISBN));
    assert_eq!(error.first_field_message("publication_date"), Some(INVALID_DATE));
}

#[test]
fn book_draft_requires_title_and_authors() {
    let error = BookDraft { title: "  ".to_owned(), authors: String::new(), ..draft() }.to_input().unwrap_err();
    assert_eq!(error.first_field_message("title"), Some(REQUIRED));
    assert_eq!(error.first_field_message("authors"), Some(REQUIRED));
}

#[test]
fn reading_list_draft_requires_name() {
    assert!(ReadingListDraft::default().to_input().is_err());
    let input = ReadingListDraft { name: " Summer ".to_owned(), is_public: true, ..ReadingListDraft::default() }
        .to_input()
        .unwrap();
    assert_eq!(input.name, "Summer");
    assert!(input.is_public);
}
