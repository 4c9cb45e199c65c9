use super::*;

#[test]
fn protected_path_without_token_goes_to_login() {
    assert_eq!(decide("/", false), GuardAction::ToLogin);
    assert_eq!(decide("/media/abc", false), GuardAction::ToLogin);
}

#[test]
fn protected_path_with_token_is_allowed() {
    assert_eq!(decide("/", true), GuardAction::Allow);
    assert_eq!(decide("/media/abc", true), GuardAction::Allow);
}

#[test]
fn login_path_with_token_goes_to_main() {
    assert_eq!(decide("/login", true), GuardAction::ToMain);
    assert_eq!(decide("/login/", true), GuardAction::ToMain);
}

#[test]
fn login_path_without_token_is_allowed() {
    assert_eq!(decide("/login", false), GuardAction::Allow);
}

#[test]
fn login_prefix_is_not_the_login_path() {
    // "/loginfoo" is an ordinary protected path.
    assert_eq!(decide("/loginfoo", false), GuardAction::ToLogin);
}
