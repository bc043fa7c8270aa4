//! Host settings from the environment, with `.env` loaded first.

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM: &str = "http://antonvz.ru:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Base URL the `/api` and `/server` prefixes are forwarded to.
    pub upstream: String,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset or blank means default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let upstream = get("GRADEDESK_UPSTREAM").unwrap_or_else(|| DEFAULT_UPSTREAM.to_string());
        if !upstream.starts_with("http://") && !upstream.starts_with("https://") {
            return Err(ConfigError::Invalid {
                name: "GRADEDESK_UPSTREAM",
                value: upstream,
                reason: "expected an http(s) URL".to_string(),
            });
        }

        Ok(Self {
            host: get("GRADEDESK_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: get_parse("GRADEDESK_PORT", get("GRADEDESK_PORT"), DEFAULT_PORT)?,
            upstream: upstream.trim_end_matches('/').to_string(),
            open_browser: get("GRADEDESK_OPEN_BROWSER")
                .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no" | "off"))
                .unwrap_or(true),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn get_parse<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        HostConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.upstream, DEFAULT_UPSTREAM);
        assert!(config.open_browser);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("GRADEDESK_PORT", "9000"),
            ("GRADEDESK_UPSTREAM", "https://api.example.org/"),
            ("GRADEDESK_OPEN_BROWSER", "0"),
            ("GRADEDESK_HOST", " "),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.upstream, "https://api.example.org");
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_values() {
        assert!(matches!(
            config(&[("GRADEDESK_PORT", "eighty")]),
            Err(ConfigError::Invalid { name: "GRADEDESK_PORT", .. })
        ));
        assert!(config(&[("GRADEDESK_UPSTREAM", "antonvz.ru")]).is_err());
    }
}
