//! API gateway client for the remote KYC backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with a bearer
//! token injected from the session. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`] since all data access happens in the browser.
//!
//! Every operation returns the parsed JSON body verbatim as a
//! [`serde_json::Value`]; business interpretation (token capture, user
//! extraction) happens at the call site via the helpers in
//! [`crate::net::types`] and [`crate::state::session`].
//!
//! ERROR HANDLING
//! ==============
//! Network failures and non-2xx responses both surface as [`ApiError`]
//! carrying the backend's `message` field when present. There are no
//! retries and no special treatment of 401 — an expired token reads the
//! same as a timeout to the operator.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde_json::Value;

use crate::net::types::{
    AdminLoginRequest, AdminRegisterRequest, ChangePasswordRequest, ContactRequest,
    GenerateAdminRequest, KycSubmission, LoginRequest, ResetPasswordRequest, SignupRequest,
    UpdateKycStatusRequest, UpdateProfileRequest, VerifyOtpRequest, error_message,
};
use crate::state::session::Session;

/// Production backend; override at compile time with `API_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "https://pals-back.onrender.com/api";

/// Base URL all request paths are joined onto.
pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Join an operation path onto the base URL.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", base_url())
}

/// HTTP methods used by the backend surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// Failure surfaced to the operator for any gateway call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the backend's message when present,
    /// otherwise a generic line naming the status.
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on the server")]
    Unavailable,
}

pub type ApiResult = Result<Value, ApiError>;

/// Build the error for a non-2xx response from its body.
pub fn http_error(status: u16, body: &Value) -> ApiError {
    let message = error_message(body)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Http { status, message }
}

/// Issue one request: method + path + optional JSON body, with the
/// session's active credential (admin preferred over user) as a bearer
/// header when one resolves.
#[cfg(feature = "hydrate")]
async fn send(session: &Session, method: Method, path: &str, body: Option<&Value>) -> ApiResult {
    use gloo_net::http::{Request, RequestBuilder};

    let url = endpoint(path);
    let mut builder: RequestBuilder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };

    if let Some(token) = session.active_token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .json(json)
            .map_err(|e| ApiError::Decode(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    // Error bodies still carry the backend's message envelope; an
    // unparseable body falls back to Null so the status drives the error.
    let status = response.status();
    let parsed: Value = response.json().await.unwrap_or(Value::Null);

    if response.ok() {
        Ok(parsed)
    } else {
        Err(http_error(status, &parsed))
    }
}

#[cfg(not(feature = "hydrate"))]
async fn send(session: &Session, method: Method, path: &str, body: Option<&Value>) -> ApiResult {
    let _ = (session, method, path, body);
    Err(ApiError::Unavailable)
}

async fn get(session: &Session, path: &str) -> ApiResult {
    send(session, Method::Get, path, None).await
}

async fn post<T: Serialize>(session: &Session, path: &str, payload: &T) -> ApiResult {
    let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    send(session, Method::Post, path, Some(&body)).await
}

async fn put<T: Serialize>(session: &Session, path: &str, payload: &T) -> ApiResult {
    let body = serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    send(session, Method::Put, path, Some(&body)).await
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/signup`
pub async fn signup(session: &Session, req: &SignupRequest) -> ApiResult {
    post(session, "/auth/signup", req).await
}

/// `POST /auth/login`
pub async fn login(session: &Session, req: &LoginRequest) -> ApiResult {
    post(session, "/auth/login", req).await
}

/// `POST /auth/send-otp`
pub async fn send_otp(session: &Session, req: &ContactRequest) -> ApiResult {
    post(session, "/auth/send-otp", req).await
}

/// `POST /auth/verify-otp`
pub async fn verify_otp(session: &Session, req: &VerifyOtpRequest) -> ApiResult {
    post(session, "/auth/verify-otp", req).await
}

/// `POST /auth/forgot-password`
pub async fn forgot_password(session: &Session, req: &ContactRequest) -> ApiResult {
    post(session, "/auth/forgot-password", req).await
}

/// `POST /auth/reset-password`
pub async fn reset_password(session: &Session, req: &ResetPasswordRequest) -> ApiResult {
    post(session, "/auth/reset-password", req).await
}

/// `GET /auth/me`
pub async fn current_user(session: &Session) -> ApiResult {
    get(session, "/auth/me").await
}

/// `POST /auth/logout`
pub async fn logout(session: &Session) -> ApiResult {
    send(session, Method::Post, "/auth/logout", None).await
}

// =============================================================================
// USER
// =============================================================================

/// `GET /user/profile`
pub async fn get_profile(session: &Session) -> ApiResult {
    get(session, "/user/profile").await
}

/// `PUT /user/profile`
pub async fn update_profile(session: &Session, req: &UpdateProfileRequest) -> ApiResult {
    put(session, "/user/profile", req).await
}

/// `PUT /user/change-password`
pub async fn change_password(session: &Session, req: &ChangePasswordRequest) -> ApiResult {
    put(session, "/user/change-password", req).await
}

/// `GET /user/all`
pub async fn list_users(session: &Session) -> ApiResult {
    get(session, "/user/all").await
}

// =============================================================================
// KYC
// =============================================================================

/// `POST /kyc/submit`
pub async fn submit_kyc(session: &Session, req: &KycSubmission) -> ApiResult {
    post(session, "/kyc/submit", req).await
}

/// `GET /kyc/status`
pub async fn kyc_status(session: &Session) -> ApiResult {
    get(session, "/kyc/status").await
}

// =============================================================================
// HEALTH
// =============================================================================

/// `GET /health`
pub async fn health(session: &Session) -> ApiResult {
    get(session, "/health").await
}

/// `GET /wake` — nudge the backend out of idle sleep.
pub async fn wake(session: &Session) -> ApiResult {
    get(session, "/wake").await
}

// =============================================================================
// ADMIN
// =============================================================================

/// `POST /admin/login`
pub async fn admin_login(session: &Session, req: &AdminLoginRequest) -> ApiResult {
    post(session, "/admin/login", req).await
}

/// `POST /admin/register`
pub async fn admin_register(session: &Session, req: &AdminRegisterRequest) -> ApiResult {
    post(session, "/admin/register", req).await
}

/// `GET /admin/me`
pub async fn admin_me(session: &Session) -> ApiResult {
    get(session, "/admin/me").await
}

/// `POST /admin/generate`
pub async fn generate_admin(session: &Session, req: &GenerateAdminRequest) -> ApiResult {
    post(session, "/admin/generate", req).await
}

/// `PUT /admin/kyc/update-status`
pub async fn update_kyc_status(session: &Session, req: &UpdateKycStatusRequest) -> ApiResult {
    put(session, "/admin/kyc/update-status", req).await
}
