use super::*;
use serde_json::json;

fn user(id: &str, first_name: Option<&str>, status: Option<&str>) -> UserRecord {
    serde_json::from_value(json!({
        "_id": id,
        "firstName": first_name,
        "kycStatus": status,
    }))
    .expect("user record")
}

fn sample() -> Vec<UserRecord> {
    vec![
        user("u1", Some("Ada"), Some("pending")),
        user("u2", Some("Grace"), Some("completed")),
        user("u3", Some("Edsger"), Some("rejected")),
        user("u4", Some("Alan"), None),
        // No submission: no KYC names, still pending.
        user("u5", None, Some("pending")),
    ]
}

// =============================================================
// Submission list and filters
// =============================================================

#[test]
fn submissions_drops_users_without_kyc_data() {
    let subs = submissions(&sample());
    let ids: Vec<&str> = subs.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2", "u3", "u4"]);
}

#[test]
fn filtered_by_pending_includes_missing_status() {
    let subs = submissions(&sample());
    let pending = filtered(&subs, KycFilter::Pending);
    let ids: Vec<&str> = pending.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u4"]);
}

#[test]
fn filtered_all_keeps_everything() {
    let subs = submissions(&sample());
    assert_eq!(filtered(&subs, KycFilter::All).len(), subs.len());
}

#[test]
fn status_counts_sum_to_all() {
    let subs = submissions(&sample());
    let counts = status_counts(&subs);
    assert_eq!(counts.all, 4);
    assert_eq!(counts.pending, 2);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.rejected, 1);
    assert_eq!(
        counts.pending + counts.completed + counts.rejected,
        counts.all
    );
    assert_eq!(counts.of(KycFilter::Pending), 2);
}

// A completed record no longer shows up under the pending tab — the
// post-update refetch removes it from that filtered view.
#[test]
fn terminal_record_leaves_pending_view() {
    let before = vec![user("u1", Some("Ada"), Some("pending"))];
    assert_eq!(filtered(&before, KycFilter::Pending).len(), 1);

    let after = vec![user("u1", Some("Ada"), Some("completed"))];
    assert!(filtered(&after, KycFilter::Pending).is_empty());
    assert_eq!(filtered(&after, KycFilter::Completed).len(), 1);
}

// =============================================================
// Review actions
// =============================================================

#[test]
fn review_only_offered_while_pending() {
    assert!(can_review(&user("u1", Some("Ada"), Some("pending"))));
    assert!(can_review(&user("u1", Some("Ada"), None)));
    assert!(!can_review(&user("u2", Some("Grace"), Some("completed"))));
    assert!(!can_review(&user("u3", Some("Edsger"), Some("rejected"))));
}

#[test]
fn actions_map_to_terminal_statuses() {
    assert_eq!(ReviewAction::Approve.target_status(), KycStatus::Completed);
    assert_eq!(ReviewAction::Reject.target_status(), KycStatus::Rejected);
    assert!(ReviewAction::Approve.target_status().is_terminal());
    assert!(ReviewAction::Reject.target_status().is_terminal());
}

#[test]
fn confirm_prompts_name_the_action() {
    assert!(ReviewAction::Approve.confirm_prompt().contains("approve"));
    assert!(ReviewAction::Reject.confirm_prompt().contains("reject"));
}
