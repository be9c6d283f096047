use std::env;

use crate::client::SupabaseClient;
use crate::error::{Error, Result};

/// Connection settings for the hosted backend.
///
/// Both values are required. Reading them happens once at startup so a
/// misconfigured process aborts before the first request, not on the first
/// user action.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let url = require_env("SUPABASE_URL")?;
        let anon_key = require_env("SUPABASE_ANON_KEY")?;

        Ok(Self { url, anon_key })
    }

    /// Create configuration from explicit values, applying the same
    /// non-empty validation as [`BackendConfig::from_env`].
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let anon_key = anon_key.into();

        if url.trim().is_empty() {
            return Err(Error::config("backend URL must not be empty"));
        }
        if anon_key.trim().is_empty() {
            return Err(Error::config("backend access key must not be empty"));
        }

        Ok(Self { url, anon_key })
    }

    /// Build the request-issuing client handle
    pub fn connect(&self) -> Result<SupabaseClient> {
        SupabaseClient::new(&self.url, &self.anon_key)
    }
}

fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::config(format!(
            "missing required environment variable {name}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_reads_both_values() {
        env::set_var("SUPABASE_URL", "https://example.supabase.co");
        env::set_var("SUPABASE_ANON_KEY", "anon-key");

        let config = BackendConfig::from_env().expect("config should load");
        assert_eq!(config.url, "https://example.supabase.co");
        assert_eq!(config.anon_key, "anon-key");
    }

    #[test]
    #[serial]
    fn test_from_env_fails_fast_when_url_missing() {
        env::remove_var("SUPABASE_URL");
        env::set_var("SUPABASE_ANON_KEY", "anon-key");

        let err = BackendConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("SUPABASE_URL"));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_empty_key() {
        env::set_var("SUPABASE_URL", "https://example.supabase.co");
        env::set_var("SUPABASE_ANON_KEY", "   ");

        let err = BackendConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_new_rejects_empty_values() {
        assert!(BackendConfig::new("", "key").is_err());
        assert!(BackendConfig::new("https://example.supabase.co", "").is_err());
        assert!(BackendConfig::new("https://example.supabase.co", "key").is_ok());
    }
}
