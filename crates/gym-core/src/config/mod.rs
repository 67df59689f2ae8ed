//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//!
//! > **This module contains data only.** Missing values map to empty values;
//! > callers decide what an empty value means.

use std::path::PathBuf;

/// A demo account accepted by the mock auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,
    pub name: String,
    pub membership_type: String,
}

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory for durable storage slots (empty = platform default)
    pub data_dir: PathBuf,

    /// Simulated latency of token verification
    pub verify_delay_ms: u64,

    /// Simulated latency of login
    pub login_delay_ms: u64,

    /// Accounts accepted by the demo auth service
    pub accounts: Vec<AccountConfig>,

    /// Write logs to a rolling file in addition to stdout
    pub file_logging: bool,
}

fn str_at<'a>(value: &'a toml::Value, table: &str, key: &str) -> Option<&'a str> {
    value.get(table).and_then(|t| t.get(key)).and_then(|v| v.as_str())
}

fn u64_at(value: &toml::Value, table: &str, key: &str) -> u64 {
    value
        .get(table)
        .and_then(|t| t.get(key))
        .and_then(|v| v.as_integer())
        .unwrap_or(0)
        .max(0) as u64
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation logic.
    /// Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let accounts = toml_value
            .get("auth")
            .and_then(|a| a.get("accounts"))
            .and_then(|a| a.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| {
                        let field = |key: &str| {
                            entry
                                .get(key)
                                .and_then(|v| v.as_str())
                                .unwrap_or("")
                                .to_string()
                        };
                        AccountConfig {
                            email: field("email"),
                            password: field("password"),
                            name: field("name"),
                            membership_type: field("membership_type"),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            data_dir: PathBuf::from(str_at(toml_value, "storage", "data_dir").unwrap_or("")),
            verify_delay_ms: u64_at(toml_value, "auth", "verify_delay_ms"),
            login_delay_ms: u64_at(toml_value, "auth", "login_delay_ms"),
            accounts,
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            verify_delay_ms: 0,
            login_delay_ms: 0,
            accounts: Vec::new(),
            file_logging: false,
        }
    }
}
