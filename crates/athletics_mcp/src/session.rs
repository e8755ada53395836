//! Administrator session held by each MCP connection.
//!
//! A session is a plain value owned by the handler. It starts out
//! [`Session::Anonymous`], becomes [`Session::Authenticated`] after a
//! successful [`Authenticator::login`], and stops counting once `expires_at`
//! has passed or [`Session::clear`] is called.

use chrono::{DateTime, TimeDelta, Utc};
use schemars::JsonSchema;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::error::McpError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSession {
    pub id: Uuid,
    pub user: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(ActiveSession),
}

impl Session {
    pub fn require_active(&self, now: DateTime<Utc>) -> Result<&ActiveSession, McpError> {
        match self {
            Session::Anonymous => Err(McpError::Unauthorized(
                "log in before changing data".into(),
            )),
            Session::Authenticated(active) if now >= active.expires_at => Err(
                McpError::Unauthorized("session expired, log in again".into()),
            ),
            Session::Authenticated(active) => Ok(active),
        }
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.require_active(now).is_ok()
    }

    pub fn clear(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn status(&self, now: DateTime<Utc>) -> SessionStatus {
        match self.require_active(now) {
            Ok(active) => SessionStatus {
                authenticated: true,
                user: Some(active.user.clone()),
                session_id: Some(active.id.to_string()),
                expires_at: Some(active.expires_at.to_rfc3339()),
            },
            Err(_) => SessionStatus::default(),
        }
    }
}

/// What `session_status` and `login` report back.
#[derive(Clone, Debug, Default, Serialize, JsonSchema, PartialEq)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub user: Option<String>,
    pub session_id: Option<String>,
    pub expires_at: Option<String>,
}

/// Checks administrator credentials and issues sessions.
#[derive(Clone, Debug)]
pub struct Authenticator {
    user: String,
    password: Option<SecretString>,
    ttl: TimeDelta,
}

impl Authenticator {
    pub fn new(user: impl Into<String>, password: Option<SecretString>, ttl: TimeDelta) -> Self {
        Self {
            user: user.into(),
            password,
            ttl,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.admin_user.clone(),
            config.admin_password.clone(),
            TimeDelta::minutes(i64::from(config.session_ttl_minutes)),
        )
    }

    pub fn login(
        &self,
        user: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<Session, McpError> {
        let Some(expected) = &self.password else {
            return Err(McpError::Unauthorized(
                "no administrator password configured".into(),
            ));
        };
        let password_matches: bool = expected
            .expose_secret()
            .as_bytes()
            .ct_eq(password.as_bytes())
            .into();
        if user != self.user || !password_matches {
            return Err(McpError::Unauthorized("invalid credentials".into()));
        }
        Ok(Session::Authenticated(ActiveSession {
            id: Uuid::new_v4(),
            user: user.to_string(),
            issued_at: now,
            expires_at: now + self.ttl,
        }))
    }

    pub fn default_user(&self) -> &str {
        &self.user
    }
}
