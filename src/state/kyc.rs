#[cfg(test)]
#[path = "kyc_test.rs"]
mod kyc_test;

use crate::net::types::{KycStatus, UserRecord};

/// Filter tabs on the KYC review page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KycFilter {
    #[default]
    All,
    Pending,
    Completed,
    Rejected,
}

impl KycFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Pending, Self::Completed, Self::Rejected];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    pub fn matches(self, status: KycStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == KycStatus::Pending,
            Self::Completed => status == KycStatus::Completed,
            Self::Rejected => status == KycStatus::Rejected,
        }
    }
}

/// Per-status submission counts shown on the filter tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub completed: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn of(self, filter: KycFilter) -> usize {
        match filter {
            KycFilter::All => self.all,
            KycFilter::Pending => self.pending,
            KycFilter::Completed => self.completed,
            KycFilter::Rejected => self.rejected,
        }
    }
}

/// The two review actions an operator can take on a pending submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    /// Terminal status this action transitions the record into.
    pub fn target_status(self) -> KycStatus {
        match self {
            Self::Approve => KycStatus::Completed,
            Self::Reject => KycStatus::Rejected,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
        }
    }

    /// Text of the explicit confirmation step shown before the transition.
    pub fn confirm_prompt(self) -> &'static str {
        match self {
            Self::Approve => "Are you sure you want to approve this KYC?",
            Self::Reject => "Are you sure you want to reject this KYC?",
        }
    }
}

/// Keep only users with an actual KYC submission to review.
pub fn submissions(users: &[UserRecord]) -> Vec<UserRecord> {
    users
        .iter()
        .filter(|u| u.has_kyc_submission())
        .cloned()
        .collect()
}

/// Apply the active filter tab to the submission list.
pub fn filtered(users: &[UserRecord], filter: KycFilter) -> Vec<UserRecord> {
    users
        .iter()
        .filter(|u| filter.matches(u.status()))
        .cloned()
        .collect()
}

/// Count submissions per status for the filter tabs.
pub fn status_counts(users: &[UserRecord]) -> StatusCounts {
    let mut counts = StatusCounts {
        all: users.len(),
        ..StatusCounts::default()
    };
    for user in users {
        match user.status() {
            KycStatus::Pending => counts.pending += 1,
            KycStatus::Completed => counts.completed += 1,
            KycStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}

/// Review actions are only offered while a submission is pending; there is
/// no transition out of a terminal status.
pub fn can_review(user: &UserRecord) -> bool {
    !user.status().is_terminal()
}
