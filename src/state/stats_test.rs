use super::*;
use serde_json::json;

fn users() -> Vec<UserRecord> {
    let list = json!([
        {"_id": "u1", "isVerified": true, "kycStatus": "pending"},
        {"_id": "u2", "isVerified": true, "kycStatus": "completed"},
        {"_id": "u3", "kycStatus": "rejected"},
        {"_id": "u4"}
    ]);
    serde_json::from_value(list).expect("user records")
}

#[test]
fn stats_count_per_field() {
    let stats = Stats::from_users(&users());
    assert_eq!(stats.total_users, 4);
    assert_eq!(stats.verified_users, 2);
    // Missing status counts as pending.
    assert_eq!(stats.pending_kyc, 2);
    assert_eq!(stats.completed_kyc, 1);
}

#[test]
fn server_status_from_health_outcomes() {
    assert_eq!(
        ServerStatus::from_health(&Ok(json!({"status": "OK"}))),
        ServerStatus::Online
    );
    assert_eq!(
        ServerStatus::from_health(&Ok(json!({"status": "degraded"}))),
        ServerStatus::Warning
    );
    assert_eq!(
        ServerStatus::from_health(&Err(ApiError::Network("timeout".to_owned()))),
        ServerStatus::Offline
    );
}

#[test]
fn overview_survives_partial_failures() {
    let health = Ok(json!({"status": "OK"}));
    let failed_users = Err(ApiError::Network("timeout".to_owned()));
    let overview = Overview::from_results(&health, &failed_users);
    assert_eq!(overview.server, ServerStatus::Online);
    assert_eq!(overview.stats, Stats::default());

    let overview = Overview::from_results(
        &Err(ApiError::Network("down".to_owned())),
        &Ok(users()),
    );
    assert_eq!(overview.server, ServerStatus::Offline);
    assert_eq!(overview.stats.total_users, 4);
}
