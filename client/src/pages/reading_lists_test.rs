use super::*;

#[test]
fn visibility_label_names_both_states() {
    assert_eq!(visibility_label(true), "Public");
    assert_eq!(visibility_label(false), "Private");
}
