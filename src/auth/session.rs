//! Session Context
//!
//! Single process-wide holder of the current session, provided at the app
//! root. The state machine is explicit: `Unknown` until storage has been
//! checked once, then `Authenticated` or `Anonymous`. Expiry is detected
//! lazily at resolution points, never proactively before requests.

use chrono::Utc;
use leptos::*;
use serde::Deserialize;
use serde_json::json;

use super::{storage, token};
use crate::api::client::{self, ApiError};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub expires_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Storage not checked yet (initial render only)
    Unknown,
    Authenticated(SessionUser),
    Anonymous,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Resolve a stored token into a session state.
///
/// Expired or undecodable tokens always resolve `Anonymous`, regardless of
/// how well-formed the rest of the token is.
pub fn resolve_session(token: Option<&str>, now: i64) -> SessionState {
    let Some(token) = token else {
        return SessionState::Anonymous;
    };
    let Some(claims) = token::decode_claims(token) else {
        return SessionState::Anonymous;
    };
    if let Some(exp) = claims.exp {
        if exp <= now {
            return SessionState::Anonymous;
        }
    }
    SessionState::Authenticated(SessionUser {
        username: claims.username.unwrap_or_default(),
        email: claims.email.unwrap_or_default(),
        is_staff: claims.is_staff,
        expires_at: claims.exp,
    })
}

#[derive(Clone, Copy)]
pub struct Session {
    pub state: RwSignal<SessionState>,
}

/// Provide the session context, resolving `Unknown` from storage once
pub fn provide_session() {
    let session = Session {
        state: create_rw_signal(SessionState::Unknown),
    };
    session.resolve_from_storage();
    provide_context(session);
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found")
}

#[derive(Debug, Deserialize)]
struct TokenPair {
    access: String,
    refresh: String,
}

/// Login request body; the credential exchange expects exactly these fields
fn credentials_payload(username: &str, password: &str) -> serde_json::Value {
    json!({ "username": username, "password": password })
}

impl Session {
    /// One storage read + decode; the only `Unknown` exit
    pub fn resolve_from_storage(&self) {
        let state = resolve_session(storage::access_token().as_deref(), Utc::now().timestamp());
        self.state.set(state);
    }

    /// Exchange credentials for tokens. On failure storage is untouched and
    /// the session stays `Anonymous`; the error is returned for inline
    /// rendering rather than thrown at a boundary.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let result: Result<TokenPair, ApiError> =
            client::post("/auth/login/", &credentials_payload(username, password)).await;

        match result {
            Ok(pair) => {
                storage::store_tokens(&pair.access, &pair.refresh);
                self.state
                    .set(resolve_session(Some(&pair.access), Utc::now().timestamp()));
                Ok(())
            }
            Err(err) => {
                self.state.set(SessionState::Anonymous);
                Err(err)
            }
        }
    }

    /// Create an account. Does not authenticate; the caller sends the user
    /// to the login view on success.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = client::post(
            "/auth/register/",
            &json!({ "username": username, "email": email, "password": password }),
        )
        .await?;
        Ok(())
    }

    /// Clear both tokens. Succeeds even when no tokens were stored. Callers
    /// handle navigation; guarded routes also redirect once the state flips.
    pub fn logout(&self) {
        storage::clear_tokens();
        self.state.set(SessionState::Anonymous);
    }

    /// Staff claim from the decoded token; UI affordances only, never
    /// enforcement
    pub fn is_staff(&self) -> bool {
        self.state
            .with(|state| state.user().map(|u| u.is_staff).unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::test_token;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_no_token_resolves_anonymous() {
        assert_eq!(resolve_session(None, NOW), SessionState::Anonymous);
    }

    #[test]
    fn test_valid_token_resolves_authenticated() {
        let token = test_token(&json!({
            "username": "meron",
            "email": "meron@example.com",
            "exp": NOW + 3600
        }));
        let state = resolve_session(Some(&token), NOW);
        let user = state.user().expect("authenticated");
        assert_eq!(user.username, "meron");
        assert_eq!(user.expires_at, Some(NOW + 3600));
        assert!(!user.is_staff);
    }

    #[test]
    fn test_expired_token_resolves_anonymous() {
        // Well-formed in every other way; expiry alone demotes it
        let token = test_token(&json!({
            "username": "meron",
            "email": "meron@example.com",
            "exp": NOW - 1,
            "is_staff": true
        }));
        assert_eq!(resolve_session(Some(&token), NOW), SessionState::Anonymous);
    }

    #[test]
    fn test_malformed_token_treated_as_absent() {
        assert_eq!(
            resolve_session(Some("garbage"), NOW),
            SessionState::Anonymous
        );
    }

    #[test]
    fn test_token_without_expiry_is_accepted() {
        let token = test_token(&json!({ "username": "meron" }));
        assert!(resolve_session(Some(&token), NOW).is_authenticated());
    }

    #[test]
    fn test_staff_claim_carries_through() {
        let token = test_token(&json!({
            "username": "admin",
            "exp": NOW + 60,
            "is_staff": true
        }));
        let state = resolve_session(Some(&token), NOW);
        assert!(state.user().unwrap().is_staff);
    }

    #[test]
    fn test_credentials_payload_shape() {
        assert_eq!(
            credentials_payload("meron", "s3cret"),
            json!({ "username": "meron", "password": "s3cret" })
        );
    }

    #[test]
    fn test_token_pair_decodes_and_authenticates() {
        let access = test_token(&json!({ "username": "meron", "exp": NOW + 3600 }));
        let body = json!({ "access": access, "refresh": "opaque-refresh" });
        let pair: TokenPair = serde_json::from_value(body).expect("token pair");
        assert_eq!(pair.refresh, "opaque-refresh");
        let state = resolve_session(Some(&pair.access), NOW);
        assert_eq!(state.user().expect("authenticated").username, "meron");
    }

    #[test]
    fn test_token_pair_requires_both_tokens() {
        assert!(serde_json::from_value::<TokenPair>(json!({ "access": "a" })).is_err());
        assert!(serde_json::from_value::<TokenPair>(json!({ "refresh": "r" })).is_err());
    }
}
