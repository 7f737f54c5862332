//! Deadzone + low-pass conditioning for a single scalar channel
//!
//! Combines [`apply_deadzone`] and [`apply_low_pass`] behind a validated,
//! serializable configuration. The conditioner holds no filter state: the
//! caller passes the previous output on every call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MathError, Result};
use crate::numeric::{apply_deadzone, apply_low_pass};

/// Conditioning parameters for one channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditioningConfig {
    /// Magnitudes strictly below this are zeroed
    pub deadzone: f64,
    /// Low-pass coefficient (0-1). Lower = more smoothing.
    pub alpha: f64,
}

impl Default for ConditioningConfig {
    fn default() -> Self {
        Self {
            deadzone: 0.0, // Nothing is suppressed
            alpha: 1.0,    // Output follows input
        }
    }
}

impl ConditioningConfig {
    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        if !self.deadzone.is_finite() || self.deadzone < 0.0 {
            return Err(MathError::InvalidThreshold(self.deadzone));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(MathError::InvalidAlpha(self.alpha));
        }
        Ok(())
    }
}

/// Applies a validated [`ConditioningConfig`] to samples
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalConditioner {
    config: ConditioningConfig,
}

impl SignalConditioner {
    /// Create a conditioner, rejecting out-of-range parameters
    pub fn new(config: ConditioningConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            deadzone = config.deadzone,
            alpha = config.alpha,
            "signal conditioner configured"
        );
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &ConditioningConfig {
        &self.config
    }

    /// Deadzone the new sample, then blend it with `previous`
    ///
    /// Returns the new filtered value; feed it back as `previous` next time.
    #[must_use]
    pub fn condition(&self, current: f64, previous: f64) -> f64 {
        let gated = apply_deadzone(current, self.config.deadzone);
        apply_low_pass(gated, previous, self.config.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_passes_through() {
        let conditioner = SignalConditioner::default();
        assert_relative_eq!(conditioner.condition(0.3, 7.0), 0.3);
        assert_relative_eq!(conditioner.condition(-1e-9, 7.0), -1e-9);
    }

    #[test]
    fn test_deadzone_then_smooth() {
        let conditioner = SignalConditioner::new(ConditioningConfig {
            deadzone: 0.1,
            alpha: 0.5,
        })
        .unwrap();

        // Noise is zeroed before blending
        assert_relative_eq!(conditioner.condition(0.05, 2.0), 1.0);
        assert_relative_eq!(conditioner.condition(10.0, 0.0), 5.0);
    }

    #[test]
    fn test_threading_previous_converges() {
        let conditioner = SignalConditioner::new(ConditioningConfig {
            deadzone: 0.0,
            alpha: 0.2,
        })
        .unwrap();

        let mut filtered = 0.0;
        for _ in 0..200 {
            filtered = conditioner.condition(1.0, filtered);
        }

        assert_relative_eq!(filtered, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_bad_alpha() {
        for alpha in [-0.1, 1.5, f64::NAN] {
            let config = ConditioningConfig { deadzone: 0.0, alpha };
            assert!(matches!(
                SignalConditioner::new(config),
                Err(MathError::InvalidAlpha(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_deadzone() {
        for deadzone in [-0.1, f64::INFINITY, f64::NAN] {
            let config = ConditioningConfig { deadzone, alpha: 0.5 };
            assert!(matches!(
                config.validate(),
                Err(MathError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let config: ConditioningConfig = serde_json::from_str(r#"{"deadzone": 0.02}"#).unwrap();

        assert_relative_eq!(config.deadzone, 0.02);
        assert_relative_eq!(config.alpha, 1.0);
        assert!(config.validate().is_ok());
    }
}
