use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Info, "one");
    let second = state.push(NoticeKind::Error, "two");
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].text, "two");
}

#[test]
fn push_drops_oldest_past_limit() {
    let mut state = NoticeState::default();
    for n in 0..(MAX_VISIBLE + 2) {
        state.push(NoticeKind::Info, format!("n{n}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].text, "n2");
}

#[test]
fn resolve_rewrites_pending_in_place() {
    let mut state = NoticeState::default();
    let id = state.push(NoticeKind::Pending, "Deleting book...");
    assert!(state.resolve(id, NoticeKind::Success, "Book deleted successfully"));
    assert_eq!(
        state.items,
        vec![Notice { id, kind: NoticeKind::Success, text: "Book deleted successfully".to_owned() }]
    );
}

#[test]
fn resolve_after_dismiss_reports_missing() {
    let mut state = NoticeState::default();
    let id = state.push(NoticeKind::Pending, "Saving...");
    state.dismiss(id);
    assert!(!state.resolve(id, NoticeKind::Error, "Failed"));
    assert!(state.items.is_empty());
}

#[test]
fn css_modifier_per_kind() {
    assert_eq!(NoticeKind::Error.css_modifier(), "notice--error");
    assert_eq!(NoticeKind::Pending.css_modifier(), "notice--pending");
}
