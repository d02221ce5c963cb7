use super::*;
use catalog::User;

fn alice() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
        bio: None,
        profile_picture: None,
        created_at: None,
    }
}

#[test]
fn should_redirect_unauth_when_settled_anonymous() {
    assert!(should_redirect_unauth(&Session::anonymous()));
}

#[test]
fn should_not_redirect_while_probe_pending() {
    assert!(!should_redirect_unauth(&Session::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&Session::authenticated(alice())));
}

#[test]
fn authed_redirect_only_for_settled_user() {
    assert!(should_redirect_authed(&Session::authenticated(alice())));
    assert!(!should_redirect_authed(&Session::anonymous()));
    assert!(!should_redirect_authed(&Session::default()));
}
