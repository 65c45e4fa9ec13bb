//! Common utilities shared across services.
//!
//! This crate provides:
//! - The infrastructure fault type raised by capability adapters
//! - Configuration structures
//! - Tracing subscriber initialisation

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
