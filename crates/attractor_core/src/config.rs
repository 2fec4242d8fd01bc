use crate::systems::{Lorenz, Rossler};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when a run configuration fails validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Step count must be at least 1.")]
    ZeroSteps,
    #[error("Step size dt must be finite and non-negative, got {0}.")]
    InvalidDt(f64),
    #[error("Initial state must be finite, got ({0}, {1}, {2}).")]
    NonFiniteInitialState(f64, f64, f64),
}

/// Which system to integrate, together with its constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "lowercase")]
pub enum SystemConfig {
    Lorenz(Lorenz<f64>),
    Rossler(Rossler<f64>),
}

impl fmt::Display for SystemConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemConfig::Lorenz(_) => write!(f, "lorenz"),
            SystemConfig::Rossler(_) => write!(f, "rossler"),
        }
    }
}

/// Immutable description of one integration run.
///
/// Everything the integrator needs is carried here explicitly and checked
/// up front, rather than living in process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub system: SystemConfig,
    pub steps: usize,
    pub dt: f64,
    pub initial_state: (f64, f64, f64),
}

impl RunConfig {
    /// Default Lorenz run: 100k steps from near the origin.
    pub fn lorenz() -> Self {
        Self {
            system: SystemConfig::Lorenz(Lorenz::default()),
            steps: 100_000,
            dt: 0.01,
            initial_state: (0.0, 0.2, 0.1001),
        }
    }

    /// Default Rössler run: 600k steps from (3, 3, 3).
    pub fn rossler() -> Self {
        Self {
            system: SystemConfig::Rossler(Rossler::default()),
            steps: 600_000,
            dt: 0.01,
            initial_state: (3.0, 3.0, 3.0),
        }
    }

    /// Checks the configuration before any buffer is allocated.
    ///
    /// A zero dt is accepted and yields a constant trajectory; only
    /// negative or non-finite step sizes are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if !self.dt.is_finite() || self.dt < 0.0 {
            return Err(ConfigError::InvalidDt(self.dt));
        }
        let (x, y, z) = self.initial_state;
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(ConfigError::NonFiniteInitialState(x, y, z));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, RunConfig, SystemConfig};
    use crate::systems::Lorenz;

    fn assert_err_contains(result: Result<(), ConfigError>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn default_runs_validate() {
        assert!(RunConfig::lorenz().validate().is_ok());
        assert!(RunConfig::rossler().validate().is_ok());
    }

    #[test]
    fn rejects_zero_steps() {
        let mut config = RunConfig::lorenz();
        config.steps = 0;
        assert_err_contains(config.validate(), "Step count");
    }

    #[test]
    fn rejects_bad_step_sizes() {
        let mut config = RunConfig::lorenz();
        config.dt = -0.01;
        assert_err_contains(config.validate(), "Step size");

        config.dt = f64::NAN;
        assert_err_contains(config.validate(), "Step size");

        config.dt = f64::INFINITY;
        assert_err_contains(config.validate(), "Step size");

        config.dt = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_initial_state() {
        let mut config = RunConfig::rossler();
        config.initial_state = (3.0, f64::NAN, 3.0);
        assert_err_contains(config.validate(), "Initial state");
    }

    #[test]
    fn parses_the_flat_json_layout() {
        let raw = r#"{
            "system": "lorenz",
            "a": 12.0,
            "b": 24.0,
            "c": 2.67,
            "steps": 1000,
            "dt": 0.01,
            "initial_state": [0.0, 0.2, 0.1001]
        }"#;
        let config: RunConfig = serde_json::from_str(raw).expect("config should parse");

        assert_eq!(config.system, SystemConfig::Lorenz(Lorenz::default()));
        assert_eq!(config.steps, 1000);
        assert_eq!(config.initial_state, (0.0, 0.2, 0.1001));
    }
}
