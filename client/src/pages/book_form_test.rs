use super::*;

#[test]
fn create_and_edit_wording_differ() {
    assert_eq!(FormMode::Create.heading(), "Add New Book");
    assert_eq!(FormMode::Edit.heading(), "Edit Book");
    assert_eq!(FormMode::Create.succeeded(), "Book created successfully!");
    assert_eq!(FormMode::Edit.succeeded(), "Book updated successfully!");
    assert_eq!(FormMode::Create.failed(), "Failed to create book");
    assert_eq!(FormMode::Edit.failed(), "Failed to update book");
}

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(FormMode::Create.submit_label(false), "Create Book");
    assert_eq!(FormMode::Create.submit_label(true), "Creating...");
    assert_eq!(FormMode::Edit.submit_label(true), "Updating...");
}

#[test]
fn invalid_draft_never_becomes_input() {
    let draft = BookDraft { title: "Dune".to_owned(), ..BookDraft::default() };
    let payload = draft.to_input().unwrap_err();
    assert!(payload.first_field_message("authors").is_some());
    assert!(payload.first_field_message("genre").is_some());
}
