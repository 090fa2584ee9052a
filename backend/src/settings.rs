//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `LAZY_USERS_*` environment variables or a
//! configuration file. The pool size carries a concrete default; the other
//! fields are optional and their accessors supply defaults and validate the
//! values the server cannot start without.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{DEFAULT_RECORD_SET, RecordSetName, RecordSetNameError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings that cannot be turned into a runnable server.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The bind address is not a socket address.
    #[error("invalid bind address `{value}`: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// The record set is not a plain SQL identifier.
    #[error("invalid record set: {0}")]
    RecordSet(#[from] RecordSetNameError),
}

/// Configuration for the lazy users server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LAZY_USERS")]
pub struct AppSettings {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Fixture data is served when absent.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Table the user record cursor is opened over.
    pub record_set: Option<String>,
}

impl AppSettings {
    /// Return the parsed bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Return the configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Return the maximum number of pooled connections.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size
    }

    /// Return the validated record set, falling back to `lazy_user_records`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::RecordSet`] when the name is not a plain
    /// identifier.
    pub fn record_set(&self) -> Result<RecordSetName, SettingsError> {
        let name = self.record_set.as_deref().unwrap_or(DEFAULT_RECORD_SET);
        Ok(RecordSetName::new(name)?)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing and validation.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "LAZY_USERS_BIND_ADDR",
        "LAZY_USERS_DATABASE_URL",
        "LAZY_USERS_POOL_MAX_SIZE",
        "LAZY_USERS_RECORD_SET",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("lazy-users")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default bind address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal address")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(settings.pool_max_size(), 10);
        assert_eq!(
            settings.record_set().expect("default record set").as_ref(),
            DEFAULT_RECORD_SET
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("LAZY_USERS_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "LAZY_USERS_DATABASE_URL",
                Some("postgres://localhost/lazy_users".to_owned()),
            ),
            ("LAZY_USERS_POOL_MAX_SIZE", Some("3".to_owned())),
            ("LAZY_USERS_RECORD_SET", Some("archived_users".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("bind address parses"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal address")
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/lazy_users")
        );
        assert_eq!(settings.pool_max_size(), 3);
        assert_eq!(
            settings.record_set().expect("record set parses").as_ref(),
            "archived_users"
        );
    }

    #[rstest]
    fn invalid_values_are_rejected() {
        let settings = AppSettings {
            bind_addr: Some("not an address".to_owned()),
            database_url: None,
            pool_max_size: 10,
            record_set: Some("users; drop table users".to_owned()),
        };

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::BindAddr { ref value, .. }) if value == "not an address"
        ));
        assert!(matches!(
            settings.record_set(),
            Err(SettingsError::RecordSet(
                RecordSetNameError::InvalidCharacters { .. }
            ))
        ));
    }
}
