#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use serde_json::Value;

use crate::net::api::{ApiError, ApiResult};
use crate::net::types::{KycStatus, UserRecord};

/// Backend reachability as shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ServerStatus {
    #[default]
    Checking,
    Online,
    Warning,
    Offline,
}

impl ServerStatus {
    /// Map the `/health` outcome: `status == "OK"` is online, any other
    /// 2xx body is a warning, and a failed call means offline.
    pub fn from_health(result: &ApiResult) -> Self {
        match result {
            Ok(body) => {
                if body.get("status").and_then(Value::as_str) == Some("OK") {
                    Self::Online
                } else {
                    Self::Warning
                }
            }
            Err(_) => Self::Offline,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "checking...",
            Self::Online => "Online",
            Self::Warning => "Warning",
            Self::Offline => "Offline",
        }
    }
}

/// Aggregate counts shown as dashboard stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_users: usize,
    pub verified_users: usize,
    pub pending_kyc: usize,
    pub completed_kyc: usize,
}

impl Stats {
    pub fn from_users(users: &[UserRecord]) -> Self {
        Self {
            total_users: users.len(),
            verified_users: users.iter().filter(|u| u.is_verified).count(),
            pending_kyc: users
                .iter()
                .filter(|u| u.status() == KycStatus::Pending)
                .count(),
            completed_kyc: users
                .iter()
                .filter(|u| u.status() == KycStatus::Completed)
                .count(),
        }
    }
}

/// Everything the dashboard page renders in one fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overview {
    pub server: ServerStatus,
    pub stats: Stats,
}

impl Overview {
    /// Combine the health and user-list results. A failed user fetch keeps
    /// zeroed stats but still reports the health outcome (and vice versa),
    /// so one dead endpoint does not blank the whole dashboard.
    pub fn from_results(health: &ApiResult, users: &Result<Vec<UserRecord>, ApiError>) -> Self {
        Self {
            server: ServerStatus::from_health(health),
            stats: users
                .as_ref()
                .map(|list| Stats::from_users(list))
                .unwrap_or_default(),
        }
    }
}
