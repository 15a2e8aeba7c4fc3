//! Opaque session handling for citizen logins.
//!
//! OTP delivery is not performed; the configured demo code is accepted for every
//! registered phone number. Tokens are random and carry no claims, so handlers
//! only ever learn the authenticated [`UserId`].

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::eligibility::domain::{User, UserId};

/// Turns credentials into sessions and sessions back into user identifiers.
pub trait Authenticator: Send + Sync {
    fn login(&self, user: &User, otp: &str) -> Result<SessionGrant, AuthError>;
    fn authenticate(&self, token: &str) -> Result<UserId, AuthError>;
    fn logout(&self, token: &str) -> Result<(), AuthError>;
}

/// Session handed back to the client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGrant {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("one-time password rejected")]
    InvalidOtp,
    #[error("missing bearer token")]
    MissingToken,
    #[error("session not recognised")]
    UnknownSession,
    #[error("session expired")]
    Expired,
}

#[derive(Debug, Clone)]
struct Session {
    user_id: UserId,
    expires_at: DateTime<Utc>,
}

/// In-memory session store keyed by opaque bearer tokens.
pub struct SessionAuthenticator {
    demo_otp: String,
    ttl: Duration,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionAuthenticator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            demo_otp: config.demo_otp.clone(),
            ttl: Duration::minutes(config.session_ttl_minutes),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn login_at(
        &self,
        user: &User,
        otp: &str,
        now: DateTime<Utc>,
    ) -> Result<SessionGrant, AuthError> {
        if otp.trim() != self.demo_otp {
            return Err(AuthError::InvalidOtp);
        }

        let token = Uuid::new_v4().simple().to_string();
        let session = Session {
            user_id: user.id.clone(),
            expires_at: now + self.ttl,
        };
        let grant = SessionGrant {
            token: token.clone(),
            user_id: session.user_id.clone(),
            expires_at: session.expires_at,
        };

        let mut sessions = self.sessions.lock().expect("session mutex poisoned");
        sessions.retain(|_, existing| existing.expires_at > now);
        sessions.insert(token, session);
        Ok(grant)
    }

    pub fn authenticate_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, AuthError> {
        let mut sessions = self.sessions.lock().expect("session mutex poisoned");
        let session = sessions.get(token).ok_or(AuthError::UnknownSession)?;
        if session.expires_at <= now {
            sessions.remove(token);
            return Err(AuthError::Expired);
        }
        Ok(session.user_id.clone())
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.lock().expect("session mutex poisoned").len()
    }
}

impl Authenticator for SessionAuthenticator {
    fn login(&self, user: &User, otp: &str) -> Result<SessionGrant, AuthError> {
        self.login_at(user, otp, Utc::now())
    }

    fn authenticate(&self, token: &str) -> Result<UserId, AuthError> {
        self.authenticate_at(token, Utc::now())
    }

    fn logout(&self, token: &str) -> Result<(), AuthError> {
        self.sessions
            .lock()
            .expect("session mutex poisoned")
            .remove(token)
            .map(|_| ())
            .ok_or(AuthError::UnknownSession)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}
