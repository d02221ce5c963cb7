use super::*;

#[test]
fn format_date_handles_plain_dates_and_timestamps() {
    assert_eq!(format_date("1965-08-01"), "Aug 1, 1965");
    assert_eq!(format_date("2024-12-31T23:59:59.123Z"), "Dec 31, 2024");
}

#[test]
fn format_date_passes_through_garbage() {
    assert_eq!(format_date("soon"), "soon");
    assert_eq!(format_date("2024-13-01"), "2024-13-01");
    assert_eq!(format_date("2024-00-01"), "2024-00-01");
}

#[test]
fn format_optional_date_empty_when_missing() {
    assert_eq!(format_optional_date(None), "");
    assert_eq!(format_optional_date(Some("2020-02-03")), "Feb 3, 2020");
}

#[test]
fn excerpt_keeps_short_text() {
    assert_eq!(excerpt("  short  ", 10), "short");
}

#[test]
fn excerpt_truncates_on_char_boundary() {
    assert_eq!(excerpt("déjà vu all over again", 7), "déjà vu…");
}

#[test]
fn page_count_unit() {
    assert_eq!(page_count(Some(1)).as_deref(), Some("1 page"));
    assert_eq!(page_count(Some(412)).as_deref(), Some("412 pages"));
    assert_eq!(page_count(None), None);
}

#[test]
fn book_count_pluralizes() {
    assert_eq!(book_count(0), "0 books");
    assert_eq!(book_count(1), "1 book");
    assert_eq!(book_count(12), "12 books");
}
