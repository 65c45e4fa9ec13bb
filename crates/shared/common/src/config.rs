//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Tracing configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Fallback filter directive when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// JWT configuration for token signing.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// Get JWT secret as bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_hours: 24,
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}
