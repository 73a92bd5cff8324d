#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// KYC STATUS
// =============================================================================

/// KYC review status of a user record.
///
/// A record with no status field is treated as `Pending`. Once a record
/// reaches `Completed` or `Rejected` the UI exposes no transition back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    #[default]
    Pending,
    Completed,
    Rejected,
}

impl KycStatus {
    /// Parse a backend status string; absent or unknown values are `Pending`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("completed") => Self::Completed,
            Some("rejected") => Self::Rejected,
            _ => Self::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    /// Terminal statuses expose no review actions.
    pub fn is_terminal(self) -> bool {
        self != Self::Pending
    }
}

/// Government ID document types accepted by KYC submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernmentIdType {
    #[default]
    Passport,
    DrivingLicense,
    NationalId,
    Other,
}

impl GovernmentIdType {
    pub const ALL: [Self; 4] = [
        Self::Passport,
        Self::DrivingLicense,
        Self::NationalId,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::DrivingLicense => "driving_license",
            Self::NationalId => "national_id",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Passport => "Passport",
            Self::DrivingLicense => "Driving License",
            Self::NationalId => "National ID",
            Self::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "driving_license" => Self::DrivingLicense,
            "national_id" => Self::NationalId,
            "other" => Self::Other,
            _ => Self::Passport,
        }
    }
}

// =============================================================================
// USER RECORD
// =============================================================================

/// A user as returned by `GET /user/all`. Read-only on this side; every
/// mutation goes through an API call. Fields are optional because records
/// accrete over signup → OTP verification → KYC submission.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub is_verified: bool,
    pub kyc_status: Option<String>,
    pub profile_photo: Option<String>,
    pub government_id_type: Option<String>,
    pub government_id_front: Option<String>,
    pub government_id_back: Option<String>,
    pub address: Option<String>,
    pub dob: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl UserRecord {
    /// Effective KYC status; records without one are pending.
    pub fn status(&self) -> KycStatus {
        KycStatus::parse(self.kyc_status.as_deref())
    }

    /// Display name: KYC first/last name, then signup name, then email.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => self
                .name
                .clone()
                .or_else(|| self.email.clone())
                .unwrap_or_else(|| "Unnamed".to_owned()),
        }
    }

    /// Preferred contact line: email, then phone.
    pub fn contact(&self) -> String {
        self.email
            .clone()
            .or_else(|| self.phone.clone())
            .unwrap_or_else(|| "No contact".to_owned())
    }

    /// Whether this record carries a KYC submission worth reviewing:
    /// KYC names are present, or the status already left `pending`.
    pub fn has_kyc_submission(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some() || self.status().is_terminal()
    }
}

// =============================================================================
// RESPONSE ENVELOPE HELPERS
// =============================================================================

/// Extract the operator-facing failure message from a backend error body.
/// Prefers `message`, then `error`; `None` means use a generic fallback.
pub fn error_message(body: &Value) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.get("error").and_then(Value::as_str))
}

/// Whether the envelope reports success. Missing flag counts as failure.
pub fn is_success(body: &Value) -> bool {
    body.get("success").and_then(Value::as_bool).unwrap_or(false)
}

/// Pull the user list out of a `GET /user/all` envelope
/// (`{ data: { users: [...] } }`). Malformed entries are skipped rather
/// than failing the whole list.
pub fn extract_users(body: &Value) -> Vec<UserRecord> {
    body.get("data")
        .and_then(|data| data.get("users"))
        .and_then(Value::as_array)
        .map(|users| {
            users
                .iter()
                .filter_map(|u| serde_json::from_value(u.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Admin account as returned by `POST /admin/generate`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratedAdmin {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl Default for GeneratedAdmin {
    fn default() -> Self {
        Self {
            id: String::new(),
            username: String::new(),
            email: String::new(),
            role: "admin".to_owned(),
        }
    }
}

/// One-time credentials shown to the operator after generating an admin.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Parse the `{ data: { admin, credentials } }` payload of a successful
/// admin generation.
pub fn extract_generated_admin(body: &Value) -> Option<(GeneratedAdmin, AdminCredentials)> {
    let data = body.get("data")?;
    let admin = serde_json::from_value(data.get("admin")?.clone()).ok()?;
    let credentials = serde_json::from_value(data.get("credentials")?.clone()).ok()?;
    Some((admin, credentials))
}

// =============================================================================
// REQUEST PAYLOADS
// =============================================================================
//
// Optional fields are skipped when absent so the wire body only carries
// what the operator actually filled in.

/// Convert a form field into an optional payload field: empty or
/// whitespace-only input is omitted from the request body.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// `POST /auth/signup`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// `POST /auth/login`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// `POST /auth/send-otp` and `POST /auth/forgot-password`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// `POST /auth/verify-otp`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub otp: String,
}

/// `POST /auth/reset-password`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub otp: String,
    pub new_password: String,
}

/// `PUT /user/profile`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// `PUT /user/change-password`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// `POST /kyc/submit`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    pub government_id_type: GovernmentIdType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub government_id_front: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub government_id_back: Option<String>,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// `POST /admin/login`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub password: String,
}

impl AdminLoginRequest {
    /// Build a login request from a single identifier field: values with an
    /// `@` are sent as `email`, everything else as `username`.
    pub fn from_identifier(identifier: &str, password: &str) -> Self {
        let identifier = identifier.trim();
        let (email, username) = if identifier.contains('@') {
            (Some(identifier.to_owned()), None)
        } else {
            (None, Some(identifier.to_owned()))
        };
        Self {
            email,
            username,
            password: password.to_owned(),
        }
    }
}

/// `POST /admin/register`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRegisterRequest {
    pub email: String,
    pub password: String,
}

/// `POST /admin/generate`
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAdminRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_password: Option<String>,
}

/// `PUT /admin/kyc/update-status`
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKycStatusRequest {
    pub user_id: String,
    pub status: KycStatus,
}
