use crate::AthleticsError;
use secrecy::SecretString;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub api_token: Option<SecretString>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AthleticsError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, AthleticsError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let base_url = get("ATHLETICS_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AthleticsError::Config(format!(
                "ATHLETICS_API_URL must be an http(s) URL, got {base_url}"
            )));
        }
        let api_token = get("ATHLETICS_API_TOKEN")
            .filter(|s| !s.trim().is_empty())
            .map(|s| SecretString::new(s.into()));
        let timeout = match get("ATHLETICS_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                AthleticsError::Config(format!("ATHLETICS_HTTP_TIMEOUT_SECS invalid: {raw}"))
            })?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        Ok(Self {
            base_url,
            api_token,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn from_env_defaults() {
        let cfg = Config::from_env_with(|_| None).expect("cfg");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert!(cfg.api_token.is_none());
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "ATHLETICS_API_URL" => Some("https://results.example.org".into()),
            "ATHLETICS_API_TOKEN" => Some("sekrit".into()),
            "ATHLETICS_HTTP_TIMEOUT_SECS" => Some("5".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, "https://results.example.org");
        assert_eq!(cfg.api_token.unwrap().expose_secret(), "sekrit");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn from_env_rejects_bad_values() {
        let bad_url = |k: &str| (k == "ATHLETICS_API_URL").then(|| "localhost:8081".to_string());
        assert!(Config::from_env_with(bad_url).is_err());

        let bad_timeout =
            |k: &str| (k == "ATHLETICS_HTTP_TIMEOUT_SECS").then(|| "soon".to_string());
        assert!(Config::from_env_with(bad_timeout).is_err());
    }
}
