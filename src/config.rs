// Copyright 2025 Cowboy AI, LLC.

//! Runtime configuration

use crate::employee::{Employee, StaticDirectory};
use serde::{Deserialize, Serialize};

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for one demo run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// `tracing-subscriber` filter directive for stderr diagnostics
    pub log_filter: String,

    /// Employee served by the default directory
    pub employee: Employee,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            employee: Employee::default(),
        }
    }
}

impl DemoConfig {
    /// Defaults, with the log filter taken from `RUST_LOG` when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(filter) = lookup(LOG_ENV_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        config
    }

    /// Directory serving the configured employee
    pub fn directory(&self) -> StaticDirectory {
        StaticDirectory::new(self.employee.clone())
    }
}
