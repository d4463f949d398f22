use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Placeholder JWT secrets that MUST NOT be used.
const PLACEHOLDER_SECRETS: &[&str] = &["change-me-to-a-random-string", "dev-secret-change-me", "secretKey"];

const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Process configuration, read once at startup and handed to whatever needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub token_ttl_secs: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("NAIJA_JWT_SECRET").unwrap_or_default();
        if jwt_secret.trim().is_empty() || PLACEHOLDER_SECRETS.contains(&jwt_secret.as_str()) {
            bail!("NAIJA_JWT_SECRET is unset or still a placeholder");
        }

        let db_path = lookup("NAIJA_DB_PATH").unwrap_or_else(|| "naija.db".into()).into();
        let host = lookup("NAIJA_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("NAIJA_PORT") {
            Some(v) => v.parse().with_context(|| format!("invalid NAIJA_PORT '{}'", v))?,
            None => 3000,
        };
        let token_ttl_secs = match lookup("NAIJA_TOKEN_TTL_SECS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("invalid NAIJA_TOKEN_TTL_SECS '{}'", v))?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };
        if token_ttl_secs <= 0 {
            bail!("NAIJA_TOKEN_TTL_SECS must be positive");
        }

        Ok(Self {
            jwt_secret,
            db_path,
            host,
            port,
            token_ttl_secs,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().with_context(|| format!("invalid listen address '{}'", addr))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let cfg = config(&[("NAIJA_JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("naija.db"));
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.token_ttl_secs, DEFAULT_TOKEN_TTL_SECS);
        assert_eq!(cfg.addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn missing_or_placeholder_secret_is_rejected() {
        assert!(config(&[]).is_err());
        assert!(config(&[("NAIJA_JWT_SECRET", "  ")]).is_err());
        assert!(config(&[("NAIJA_JWT_SECRET", "dev-secret-change-me")]).is_err());
    }

    #[test]
    fn bad_numbers_are_rejected() {
        assert!(config(&[("NAIJA_JWT_SECRET", "s3cret"), ("NAIJA_PORT", "http")]).is_err());
        assert!(config(&[("NAIJA_JWT_SECRET", "s3cret"), ("NAIJA_TOKEN_TTL_SECS", "0")]).is_err());
    }

    #[test]
    fn overrides_are_read() {
        let cfg = config(&[
            ("NAIJA_JWT_SECRET", "s3cret"),
            ("NAIJA_HOST", "127.0.0.1"),
            ("NAIJA_PORT", "8080"),
            ("NAIJA_DB_PATH", "/tmp/emoji.db"),
            ("NAIJA_TOKEN_TTL_SECS", "60"),
        ])
        .unwrap();
        assert_eq!(cfg.addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/emoji.db"));
        assert_eq!(cfg.token_ttl_secs, 60);
    }
}
