use super::*;
use serde_json::json;

fn user(value: serde_json::Value) -> UserRecord {
    serde_json::from_value(value).expect("user record")
}

// =============================================================
// Envelope helpers
// =============================================================

#[test]
fn error_message_prefers_message_then_error() {
    let body = json!({"message": "m1", "error": "m2"});
    assert_eq!(error_message(&body), Some("m1"));

    let body = json!({"error": "m2"});
    assert_eq!(error_message(&body), Some("m2"));

    let body = json!({"status": 500});
    assert_eq!(error_message(&body), None);
}

#[test]
fn is_success_defaults_to_false() {
    assert!(is_success(&json!({"success": true})));
    assert!(!is_success(&json!({"success": false})));
    assert!(!is_success(&json!({})));
}

#[test]
fn extract_users_reads_data_users_array() {
    let body = json!({
        "success": true,
        "data": {
            "users": [
                {"_id": "u1", "email": "a@b.c", "kycStatus": "pending"},
                {"_id": "u2", "isVerified": true}
            ]
        }
    });
    let users = extract_users(&body);
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, "u1");
    assert_eq!(users[0].email.as_deref(), Some("a@b.c"));
    assert!(users[1].is_verified);
}

#[test]
fn extract_users_tolerates_missing_data() {
    assert!(extract_users(&json!({"success": true})).is_empty());
    assert!(extract_users(&json!({"data": {}})).is_empty());
    assert!(extract_users(&json!({"data": {"users": "nope"}})).is_empty());
}

#[test]
fn extract_generated_admin_parses_admin_and_credentials() {
    let body = json!({
        "success": true,
        "data": {
            "admin": {"id": "a1", "username": "ops", "email": "ops@x.y", "role": "admin"},
            "credentials": {"username": "ops", "email": "ops@x.y", "password": "s3cret"}
        }
    });
    let (admin, creds) = extract_generated_admin(&body).expect("generated admin");
    assert_eq!(admin.username, "ops");
    assert_eq!(creds.password, "s3cret");
}

#[test]
fn extract_generated_admin_requires_both_parts() {
    let body = json!({"data": {"admin": {"id": "a1"}}});
    assert!(extract_generated_admin(&body).is_none());
}

// =============================================================
// KYC status
// =============================================================

#[test]
fn kyc_status_parse_defaults_to_pending() {
    assert_eq!(KycStatus::parse(None), KycStatus::Pending);
    assert_eq!(KycStatus::parse(Some("weird")), KycStatus::Pending);
    assert_eq!(KycStatus::parse(Some("completed")), KycStatus::Completed);
    assert_eq!(KycStatus::parse(Some("rejected")), KycStatus::Rejected);
}

#[test]
fn kyc_status_terminal_excludes_pending() {
    assert!(!KycStatus::Pending.is_terminal());
    assert!(KycStatus::Completed.is_terminal());
    assert!(KycStatus::Rejected.is_terminal());
}

#[test]
fn kyc_status_serializes_lowercase() {
    let req = UpdateKycStatusRequest {
        user_id: "u1".to_owned(),
        status: KycStatus::Completed,
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value, json!({"userId": "u1", "status": "completed"}));
}

// =============================================================
// User record
// =============================================================

#[test]
fn display_name_prefers_kyc_names() {
    let u = user(json!({
        "_id": "u1",
        "name": "Signup Name",
        "firstName": "Ada",
        "lastName": "Lovelace"
    }));
    assert_eq!(u.display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_name_then_email() {
    let u = user(json!({"_id": "u1", "name": "Signup Name"}));
    assert_eq!(u.display_name(), "Signup Name");

    let u = user(json!({"_id": "u1", "email": "a@b.c"}));
    assert_eq!(u.display_name(), "a@b.c");

    let u = user(json!({"_id": "u1"}));
    assert_eq!(u.display_name(), "Unnamed");
}

#[test]
fn contact_prefers_email_over_phone() {
    let u = user(json!({"_id": "u1", "email": "a@b.c", "phone": "123"}));
    assert_eq!(u.contact(), "a@b.c");

    let u = user(json!({"_id": "u1", "phone": "123"}));
    assert_eq!(u.contact(), "123");

    let u = user(json!({"_id": "u1"}));
    assert_eq!(u.contact(), "No contact");
}

#[test]
fn has_kyc_submission_requires_names_or_terminal_status() {
    let u = user(json!({"_id": "u1", "firstName": "Ada"}));
    assert!(u.has_kyc_submission());

    let u = user(json!({"_id": "u2", "kycStatus": "completed"}));
    assert!(u.has_kyc_submission());

    let u = user(json!({"_id": "u3", "kycStatus": "pending"}));
    assert!(!u.has_kyc_submission());
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn signup_request_omits_absent_fields() {
    let req = SignupRequest {
        email: Some("a@b.c".to_owned()),
        password: "pw".to_owned(),
        ..Default::default()
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value, json!({"email": "a@b.c", "password": "pw"}));
}

#[test]
fn change_password_uses_camel_case_keys() {
    let req = ChangePasswordRequest {
        current_password: "old".to_owned(),
        new_password: "new".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(
        value,
        json!({"currentPassword": "old", "newPassword": "new"})
    );
}

#[test]
fn kyc_submission_serializes_id_type_snake_case() {
    let req = KycSubmission {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        dob: "1815-12-10".to_owned(),
        government_id_type: GovernmentIdType::DrivingLicense,
        address: "1 Analytical Way".to_owned(),
        ..Default::default()
    };
    let value = serde_json::to_value(&req).expect("serialize");
    assert_eq!(value["governmentIdType"], "driving_license");
    assert!(value.get("profilePhoto").is_none());
}

#[test]
fn admin_login_classifies_identifier() {
    let req = AdminLoginRequest::from_identifier("ops@x.y", "pw");
    assert_eq!(req.email.as_deref(), Some("ops@x.y"));
    assert!(req.username.is_none());

    let req = AdminLoginRequest::from_identifier("  ops  ", "pw");
    assert!(req.email.is_none());
    assert_eq!(req.username.as_deref(), Some("ops"));
}

#[test]
fn non_empty_trims_and_drops_blank() {
    assert_eq!(non_empty("  x  "), Some("x".to_owned()));
    assert_eq!(non_empty("   "), None);
    assert_eq!(non_empty(""), None);
}
