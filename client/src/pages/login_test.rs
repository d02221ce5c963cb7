use super::*;

#[test]
fn just_registered_accepts_the_redirect_flag() {
    assert!(just_registered(Some("1")));
    assert!(just_registered(Some("true")));
}

#[test]
fn just_registered_ignores_missing_or_other_values() {
    assert!(!just_registered(None));
    assert!(!just_registered(Some("0")));
    assert!(!just_registered(Some("")));
}

#[test]
fn credentials_trim_email_but_not_password() {
    let creds = credentials("  reader@example.com ", " secret ");
    assert_eq!(creds.email, "reader@example.com");
    assert_eq!(creds.password, " secret ");
}

#[test]
fn blank_credentials_fail_validation_before_any_request() {
    let creds = credentials("   ", "");
    let payload = validation::validate_login(&creds).unwrap_err();
    assert!(payload.first_field_message("email").is_some());
    assert!(payload.first_field_message("password").is_some());
}
