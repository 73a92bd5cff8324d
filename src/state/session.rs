#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde_json::Value;

use crate::util::storage;

/// Which credential class a captured token belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Admin,
    User,
}

/// The two persisted credential tokens, held as an explicit session object
/// provided via context rather than read ambiently from storage.
///
/// Presence of the admin token is what the session guard checks; no expiry
/// or signature validation happens client-side. A stale token is only
/// discovered when the backend rejects the next call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub admin_token: Option<String>,
    pub user_token: Option<String>,
}

impl Session {
    /// Load both tokens from localStorage. Outside the browser this yields
    /// an empty (unauthenticated) session.
    pub fn load() -> Self {
        Self {
            admin_token: storage::read(storage::ADMIN_TOKEN_KEY),
            user_token: storage::read(storage::USER_TOKEN_KEY),
        }
    }

    /// Resolve the credential attached to outgoing requests.
    ///
    /// Precedence is fixed: the admin token wins over the regular-user
    /// token when both are present.
    pub fn active_token(&self) -> Option<&str> {
        self.admin_token.as_deref().or(self.user_token.as_deref())
    }

    /// Whether the admin panel considers the operator signed in.
    pub fn is_admin_authenticated(&self) -> bool {
        self.admin_token.is_some()
    }

    /// Store a freshly issued token under the right key.
    pub fn store(&mut self, kind: TokenKind, token: &str) {
        match kind {
            TokenKind::Admin => {
                storage::write(storage::ADMIN_TOKEN_KEY, token);
                self.admin_token = Some(token.to_owned());
            }
            TokenKind::User => {
                storage::write(storage::USER_TOKEN_KEY, token);
                self.user_token = Some(token.to_owned());
            }
        }
    }

    /// Inspect a successful auth response and persist any token it carries.
    /// Returns the credential class that was stored, if any.
    pub fn capture(&mut self, body: &Value) -> Option<TokenKind> {
        let (kind, token) = classify_token(body)?;
        self.store(kind, &token);
        Some(kind)
    }

    /// Logout: drop both tokens from memory and storage.
    pub fn clear(&mut self) {
        storage::remove(storage::ADMIN_TOKEN_KEY);
        storage::remove(storage::USER_TOKEN_KEY);
        self.admin_token = None;
        self.user_token = None;
    }
}

/// Pull `data.token` out of an auth response and classify it by the role
/// of the accompanying user object: `role == "admin"` marks an admin
/// credential, anything else a regular-user one.
pub fn classify_token(body: &Value) -> Option<(TokenKind, String)> {
    let data = body.get("data")?;
    let token = data.get("token")?.as_str()?;

    let role = data
        .get("user")
        .and_then(|user| user.get("role"))
        .and_then(Value::as_str);
    let kind = if role == Some("admin") {
        TokenKind::Admin
    } else {
        TokenKind::User
    };

    Some((kind, token.to_owned()))
}
