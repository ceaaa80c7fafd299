//! Window layer configuration

use serde::{Deserialize, Serialize};

use crate::error::{WmError, WmResult};
use crate::geometry::GeometryLimits;

/// Tunables for placement and clamping
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WmConfig {
    /// Clamp bounds and fallbacks
    pub limits: GeometryLimits,
    /// Fraction of the content area a new window covers
    pub default_fill: f32,
    /// Offset added per already-open window so new windows do not overlap exactly
    pub cascade_step: f32,
    /// Number of cascade steps before placement wraps back to center
    pub cascade_cycle: u32,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            limits: GeometryLimits::DEFAULT,
            default_fill: 0.8,
            cascade_step: 30.0,
            cascade_cycle: 10,
        }
    }
}

impl WmConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> WmResult<Self> {
        let config: WmConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is inside its usable range
    pub fn validate(&self) -> WmResult<()> {
        if !(self.default_fill > 0.0 && self.default_fill <= 1.0) {
            return Err(WmError::InvalidConfig {
                field: "default_fill",
                reason: "must be in (0, 1]",
            });
        }
        if self.cascade_cycle == 0 {
            return Err(WmError::InvalidConfig {
                field: "cascade_cycle",
                reason: "must be at least 1",
            });
        }
        if !self.cascade_step.is_finite() || self.cascade_step < 0.0 {
            return Err(WmError::InvalidConfig {
                field: "cascade_step",
                reason: "must be a non-negative number",
            });
        }
        if !self.limits.edge_margin.is_finite() || self.limits.edge_margin < 0.0 {
            return Err(WmError::InvalidConfig {
                field: "limits.edge_margin",
                reason: "must be a non-negative number",
            });
        }
        let min = self.limits.min_size;
        if !(min.width > 0.0 && min.height > 0.0 && min.is_finite()) {
            return Err(WmError::InvalidConfig {
                field: "limits.min_size",
                reason: "must be positive",
            });
        }
        if !self.limits.fallback_position.is_finite() || !self.limits.fallback_size.is_finite() {
            return Err(WmError::InvalidConfig {
                field: "limits.fallback",
                reason: "fallback geometry must be finite",
            });
        }
        Ok(())
    }
}
