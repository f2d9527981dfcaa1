//! Mock server configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::Method;

/// Where the mock server runs. Tests get no latency and an empty store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockServerConfig {
    pub environment: Environment,
    /// Path prefix of every route, without slashes
    pub namespace: String,
    /// Simulated latency of every request
    pub timing_ms: u64,
    /// Simulated latency of creates, which are deliberately slow
    pub create_timing_ms: u64,
}

impl Default for MockServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            namespace: "api".to_string(),
            timing_ms: 750,
            create_timing_ms: 5000,
        }
    }
}

impl MockServerConfig {
    pub fn development() -> Self {
        Self::default()
    }

    pub fn test() -> Self {
        Self {
            environment: Environment::Test,
            ..Self::default()
        }
    }

    pub fn loads_seeds(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn latency_for(&self, method: Method) -> Duration {
        if self.environment == Environment::Test {
            return Duration::ZERO;
        }
        match method {
            Method::Post => Duration::from_millis(self.create_timing_ms),
            _ => Duration::from_millis(self.timing_ms),
        }
    }
}
