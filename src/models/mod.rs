// src/models/mod.rs

//! Domain models for the analyzer application.

mod config;
mod page;

// Re-export all public types
pub use config::{Config, FetcherConfig, LoggingConfig};
pub use page::{ElementKind, PageRecord};
