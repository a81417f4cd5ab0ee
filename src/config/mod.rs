//! Configuration loading for the shift reconciliation engine.
//!
//! The expected hours per shift name are read from a YAML policy file. When no
//! file is available, [`ConfigLoader::builtin`] provides the standard policy.
//!
//! # Example
//!
//! ```no_run
//! use shift_reconciler::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.name());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SHIFTS_FILE};
pub use types::ShiftPolicyConfig;
