use super::*;
use serde_json::json;

// =============================================================
// URL construction
// =============================================================

#[test]
fn endpoint_joins_path_onto_base() {
    assert_eq!(
        endpoint("/auth/login"),
        format!("{}/auth/login", base_url())
    );
}

#[test]
fn base_url_has_no_trailing_slash() {
    assert!(!base_url().ends_with('/'));
}

#[test]
fn method_names() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn http_error_carries_backend_message() {
    let err = http_error(422, &json!({"message": "email already taken"}));
    assert_eq!(
        err,
        ApiError::Http {
            status: 422,
            message: "email already taken".to_owned()
        }
    );
    assert_eq!(err.to_string(), "email already taken");
}

#[test]
fn http_error_falls_back_to_generic_message() {
    let err = http_error(500, &serde_json::Value::Null);
    assert_eq!(err.to_string(), "request failed with status 500");
}

#[test]
fn http_error_accepts_error_field() {
    let err = http_error(401, &json!({"error": "bad credentials"}));
    assert_eq!(err.to_string(), "bad credentials");
}
