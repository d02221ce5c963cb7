use serde_json::json;

use super::*;

fn list_with_items() -> ReadingList {
    serde_json::from_value(json!({
        "id": 3,
        "name": "Summer",
        "items": [
            {
                "id": 11,
                "order": 2,
                "notes": "",
                "book": {
                    "id": 7, "title": "Dune", "authors": "Frank Herbert", "genre": "sci_fi",
                    "publication_date": "1965-08-01", "created_by": 1
                }
            },
            {
                "id": 10,
                "order": 1,
                "notes": "start here",
                "book": {
                    "id": 9, "title": "Emma", "authors": "Jane Austen", "genre": "romance",
                    "publication_date": "1815-12-23", "created_by": 2
                }
            }
        ]
    }))
    .unwrap()
}

#[test]
fn book_ids_lists_every_book_on_the_list() {
    assert_eq!(book_ids(&list_with_items()), vec![7, 9]);
}

#[test]
fn ordered_items_sorts_by_position() {
    let ids: Vec<i64> = ordered_items(&list_with_items()).iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![10, 11]);
}

#[test]
fn empty_list_has_no_book_ids() {
    let list: ReadingList = serde_json::from_value(json!({ "id": 1, "name": "Empty" })).unwrap();
    assert!(book_ids(&list).is_empty());
    assert!(ordered_items(&list).is_empty());
}
