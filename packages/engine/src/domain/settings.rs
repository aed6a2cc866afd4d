//! Pool configuration loaded from JSON.
//!
//! ```json
//! { "capacity": 512, "lifetime": 1500.0, "style": { "radius_scale": 0.02 } }
//! ```
//!
//! Every field is optional and falls back to [`PoolSettings::default`].

use serde::{Deserialize, Serialize};

use super::style::{SmokeStyle, PUFF_STRIDE};

pub const DEFAULT_CAPACITY: usize = 256;

/// Largest capacity whose puff transfer buffer (the widest per-particle
/// allocation) stays within `isize::MAX` bytes.
pub const MAX_CAPACITY: usize = isize::MAX as usize / (PUFF_STRIDE * std::mem::size_of::<f32>());

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to parse pool settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSettings {
    pub capacity: usize,
    /// Age at which `step` retires a particle. Without it only caller
    /// supplied predicates retire anything.
    pub lifetime: Option<f32>,
    pub style: SmokeStyle,
}

impl Default for PoolSettings {
    fn default() -> Self {
        PoolSettings {
            capacity: DEFAULT_CAPACITY,
            lifetime: None,
            style: SmokeStyle::default(),
        }
    }
}

impl PoolSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: PoolSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.capacity > MAX_CAPACITY {
            return Err(SettingsError::Invalid {
                field: "capacity",
                reason: "exceeds the largest allocatable pool",
            });
        }
        if let Some(lifetime) = self.lifetime {
            if !lifetime.is_finite() || lifetime <= 0.0 {
                return Err(SettingsError::Invalid {
                    field: "lifetime",
                    reason: "must be a positive finite number",
                });
            }
        }
        if !self.style.radius_scale.is_finite() || self.style.radius_scale < 0.0 {
            return Err(SettingsError::Invalid {
                field: "style.radius_scale",
                reason: "must be a non-negative finite number",
            });
        }
        if !self.style.epsilon.is_finite() || self.style.epsilon <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "style.epsilon",
                reason: "must be a positive finite number",
            });
        }
        Ok(())
    }
}
