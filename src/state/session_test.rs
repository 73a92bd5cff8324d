use super::*;
use serde_json::json;

fn session(admin: Option<&str>, user: Option<&str>) -> Session {
    Session {
        admin_token: admin.map(str::to_owned),
        user_token: user.map(str::to_owned),
    }
}

// =============================================================
// Token precedence
// =============================================================

#[test]
fn active_token_prefers_admin_over_user() {
    let s = session(Some("admin-t"), Some("user-t"));
    assert_eq!(s.active_token(), Some("admin-t"));
}

#[test]
fn active_token_falls_back_to_user() {
    let s = session(None, Some("user-t"));
    assert_eq!(s.active_token(), Some("user-t"));
}

#[test]
fn active_token_none_when_unauthenticated() {
    assert_eq!(session(None, None).active_token(), None);
}

#[test]
fn admin_authentication_ignores_user_token() {
    assert!(session(Some("a"), None).is_admin_authenticated());
    assert!(!session(None, Some("u")).is_admin_authenticated());
}

// =============================================================
// Token capture
// =============================================================

#[test]
fn classify_token_detects_admin_role() {
    let body = json!({
        "success": true,
        "data": {"token": "t1", "user": {"role": "admin"}}
    });
    assert_eq!(
        classify_token(&body),
        Some((TokenKind::Admin, "t1".to_owned()))
    );
}

#[test]
fn classify_token_defaults_to_user() {
    let body = json!({"data": {"token": "t2", "user": {"role": "customer"}}});
    assert_eq!(
        classify_token(&body),
        Some((TokenKind::User, "t2".to_owned()))
    );

    // No user object at all still yields a regular token.
    let body = json!({"data": {"token": "t3"}});
    assert_eq!(
        classify_token(&body),
        Some((TokenKind::User, "t3".to_owned()))
    );
}

#[test]
fn classify_token_requires_a_token() {
    assert_eq!(classify_token(&json!({"data": {}})), None);
    assert_eq!(classify_token(&json!({"success": true})), None);
    assert_eq!(classify_token(&json!({"data": {"token": 42}})), None);
}

#[test]
fn capture_stores_by_kind() {
    let mut s = Session::default();
    let body = json!({"data": {"token": "t1", "user": {"role": "admin"}}});
    assert_eq!(s.capture(&body), Some(TokenKind::Admin));
    assert_eq!(s.admin_token.as_deref(), Some("t1"));
    assert!(s.user_token.is_none());

    let body = json!({"data": {"token": "t2"}});
    assert_eq!(s.capture(&body), Some(TokenKind::User));
    assert_eq!(s.user_token.as_deref(), Some("t2"));
    // Admin token untouched by a user capture.
    assert_eq!(s.admin_token.as_deref(), Some("t1"));
}

#[test]
fn capture_without_token_changes_nothing() {
    let mut s = session(Some("a"), None);
    assert_eq!(s.capture(&json!({"success": true})), None);
    assert_eq!(s.admin_token.as_deref(), Some("a"));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn clear_drops_both_tokens() {
    let mut s = session(Some("a"), Some("u"));
    s.clear();
    assert_eq!(s, Session::default());
    assert!(!s.is_admin_authenticated());
}
