use std::path::PathBuf;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_SITE_BASE_URL: &str = "https://picomedia.sudicorp.com";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_prod(self) -> bool {
        self != Environment::Development
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    /// Canonical site URL, always without a trailing slash.
    pub site_base_url: String,
    pub static_dir: PathBuf,
    pub frontend_url: String,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|v| Environment::parse(&v))
            .unwrap_or(Environment::Development);

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        let site_base_url = normalize_base_url(
            &lookup("SITE_BASE_URL").unwrap_or_else(|| DEFAULT_SITE_BASE_URL.to_string()),
        )?;

        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        Url::parse(&frontend_url).map_err(|e| ConfigError::InvalidUrl {
            var: "FRONTEND_URL",
            value: frontend_url.clone(),
            reason: e.to_string(),
        })?;
        let frontend_url = frontend_url.trim_end_matches('/').to_string();

        let static_dir = PathBuf::from(
            lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        );

        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty());

        Ok(Self {
            environment,
            host,
            port,
            site_base_url,
            static_dir,
            frontend_url,
            sentry_dsn,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        var: "SITE_BASE_URL",
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ConfigError::InvalidUrl {
            var: "SITE_BASE_URL",
            value: raw.to_string(),
            reason: format!("unsupported scheme {}", parsed.scheme()),
        });
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.site_base_url, DEFAULT_SITE_BASE_URL);
        assert_eq!(config.frontend_url, DEFAULT_FRONTEND_URL);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert!(config.sentry_dsn.is_none());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let config = config_from(&[("SITE_BASE_URL", "https://example.com/")]).unwrap();
        assert_eq!(config.site_base_url, "https://example.com");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "eighty"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = config_from(&[("SITE_BASE_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { var: "SITE_BASE_URL", .. }));

        let err = config_from(&[("SITE_BASE_URL", "ftp://example.com")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { var: "SITE_BASE_URL", .. }));
    }

    #[test]
    fn environment_and_sentry() {
        let config = config_from(&[
            ("ENVIRONMENT", "Production"),
            ("SENTRY_DSN", "   "),
            ("PORT", "3100"),
        ])
        .unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert!(config.environment.is_prod());
        assert!(config.sentry_dsn.is_none());
        assert_eq!(config.port, 3100);
    }
}
