//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shift
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::ExpectedHoursPolicy;
use crate::error::{EngineError, EngineResult};

use super::types::ShiftPolicyConfig;

/// File name of the shift policy inside a configuration directory.
pub const SHIFTS_FILE: &str = "shifts.yaml";

/// Loads and provides access to the shift policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── shifts.yaml   # Expected hours per shift name
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_reconciler::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Loaded policy: {} ({})", loader.name(), loader.version());
/// # Ok::<(), shift_reconciler::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    name: String,
    version: String,
    policy: ExpectedHoursPolicy,
}

impl ConfigLoader {
    /// Loads the shift policy from `shifts.yaml` in the given directory.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if the file is not valid YAML for the policy
    /// - `InvalidShiftPolicy` if any expected hours are negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let shifts_path = path.as_ref().join(SHIFTS_FILE);
        let path_str = shifts_path.display().to_string();

        let content = fs::read_to_string(&shifts_path).map_err(|_| {
            EngineError::ConfigNotFound {
                path: path_str.clone(),
            }
        })?;

        let loader = Self::from_yaml(&content, &path_str)?;
        debug!(
            path = %path_str,
            policy = %loader.name,
            shifts = loader.policy.shifts().len(),
            "Loaded shift policy"
        );
        Ok(loader)
    }

    /// Parses a shift policy from YAML text. `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> EngineResult<Self> {
        let config: ShiftPolicyConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let policy = config.to_policy()?;
        Ok(Self {
            name: config.name,
            version: config.version,
            policy,
        })
    }

    /// The built-in policy: Day Shift 7h, Night Shift 8h, otherwise 7h.
    pub fn builtin() -> Self {
        Self {
            name: "Built-in shift policy".to_string(),
            version: "builtin".to_string(),
            policy: ExpectedHoursPolicy::default(),
        }
    }

    /// Returns the policy name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the policy version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the expected-hours policy.
    pub fn policy(&self) -> &ExpectedHoursPolicy {
        &self.policy
    }

    /// Expected hours for a shift name under the loaded policy.
    pub fn expected_hours(&self, shift_name: Option<&str>) -> Decimal {
        self.policy.expected_hours(shift_name)
    }
}
