use super::*;

#[test]
fn protected_route_without_token_redirects() {
    assert_eq!(decide("/", false), GuardDecision::RedirectToLogin);
    assert_eq!(decide("/users", false), GuardDecision::RedirectToLogin);
    assert_eq!(decide("/kyc", false), GuardDecision::RedirectToLogin);
}

#[test]
fn protected_route_with_token_renders() {
    assert_eq!(decide("/", true), GuardDecision::Render);
    assert_eq!(decide("/admin-generator", true), GuardDecision::Render);
}

#[test]
fn login_route_is_never_redirected() {
    assert_eq!(decide(LOGIN_PATH, false), GuardDecision::Render);
    assert_eq!(decide(LOGIN_PATH, true), GuardDecision::Render);
}
