use super::*;

#[test]
fn book_paths_keep_trailing_slash() {
    assert_eq!(book(12), "/book/12/");
    assert!(BOOKS.ends_with('/'));
}

#[test]
fn reading_list_paths_format_ids() {
    assert_eq!(reading_list(3), "/reading-list/3/");
    assert_eq!(reading_list_add_book(3), "/reading-list/3/add-book/");
    assert_eq!(reading_list_item(3, 41), "/reading-list/3/items/41/");
}
