//! Server-side settings read from the environment.

use std::net::SocketAddr;

use secrecy::SecretString;

use crate::error::McpError;

pub const DEFAULT_ADMIN_USER: &str = "admin";
pub const DEFAULT_SESSION_TTL_MINUTES: u32 = 60;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub admin_user: String,
    /// Without a password every login attempt is refused.
    pub admin_password: Option<SecretString>,
    pub session_ttl_minutes: u32,
    pub address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            admin_user: DEFAULT_ADMIN_USER.into(),
            admin_password: None,
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            address: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, McpError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    pub fn from_env_with<F>(mut get: F) -> Result<Self, McpError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let admin_user = get("ATHLETICS_ADMIN_USER")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.admin_user);
        let admin_password = get("ATHLETICS_ADMIN_PASSWORD")
            .filter(|s| !s.is_empty())
            .map(|s| SecretString::new(s.into()));
        let session_ttl_minutes = match get("ATHLETICS_SESSION_TTL_MINUTES") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(0) | Err(_) => {
                    return Err(McpError::Validation(format!(
                        "ATHLETICS_SESSION_TTL_MINUTES must be a positive integer, got {raw}"
                    )));
                }
                Ok(m) => m,
            },
            None => defaults.session_ttl_minutes,
        };
        let address = match get("ADDRESS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| McpError::Validation(format!("ADDRESS invalid: {raw}")))?,
            None => defaults.address,
        };
        Ok(Self {
            admin_user,
            admin_password,
            session_ttl_minutes,
            address,
        })
    }
}

/// Log filter from `ATHLETICS_LOG_LEVEL`, then `RUST_LOG`, then `info`.
pub fn log_filter_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut lookup = |key: &str| get(key).filter(|s| !s.trim().is_empty());
    lookup("ATHLETICS_LOG_LEVEL")
        .or_else(|| lookup("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

pub fn log_filter() -> String {
    log_filter_with(|k| std::env::var(k).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn defaults_without_env() {
        let cfg = ServerConfig::from_env_with(|_| None).expect("cfg");
        assert_eq!(cfg.admin_user, "admin");
        assert!(cfg.admin_password.is_none());
        assert_eq!(cfg.session_ttl_minutes, 60);
        assert_eq!(cfg.address.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_all_values() {
        let cfg = ServerConfig::from_env_with(|k| match k {
            "ATHLETICS_ADMIN_USER" => Some("registrar".into()),
            "ATHLETICS_ADMIN_PASSWORD" => Some("pw".into()),
            "ATHLETICS_SESSION_TTL_MINUTES" => Some("15".into()),
            "ADDRESS" => Some("0.0.0.0:8080".into()),
            _ => None,
        })
        .expect("cfg");
        assert_eq!(cfg.admin_user, "registrar");
        assert_eq!(cfg.admin_password.unwrap().expose_secret(), "pw");
        assert_eq!(cfg.session_ttl_minutes, 15);
        assert_eq!(cfg.address.port(), 8080);
    }

    #[test]
    fn rejects_zero_ttl_and_bad_address() {
        let zero = |k: &str| (k == "ATHLETICS_SESSION_TTL_MINUTES").then(|| "0".to_string());
        assert!(ServerConfig::from_env_with(zero).is_err());
        let addr = |k: &str| (k == "ADDRESS").then(|| "somewhere".to_string());
        assert!(ServerConfig::from_env_with(addr).is_err());
    }

    #[test]
    fn log_filter_priority() {
        let both = |k: &str| match k {
            "ATHLETICS_LOG_LEVEL" => Some("debug".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        };
        assert_eq!(log_filter_with(both), "debug");
        let rust_log = |k: &str| (k == "RUST_LOG").then(|| "warn".to_string());
        assert_eq!(log_filter_with(rust_log), "warn");
        assert_eq!(log_filter_with(|_| None), "info");
    }

    #[test]
    fn blank_log_level_falls_through_to_rust_log() {
        let blank_level = |k: &str| match k {
            "ATHLETICS_LOG_LEVEL" => Some("  ".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        };
        assert_eq!(log_filter_with(blank_level), "warn");
        let both_blank = |_: &str| Some(String::new());
        assert_eq!(log_filter_with(both_blank), "info");
    }
}
