//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment: programmatic defaults, a
//! `ticketeer.yaml` file, then `TICKETEER_`-prefixed environment variables,
//! validated after extraction.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
