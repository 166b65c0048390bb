use crate::error::ArgumentError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ALPHA_STAIRS: f64 = 6.0;
pub const DEFAULT_SPEED: f64 = 1.2;
pub const DEFAULT_COST_SCALE: u32 = 10;

/// Parameters of the travel-time cost model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvacuationConfig {
    /// Time penalty added to every stairs edge.
    pub alpha_stairs: f64,
    /// Walking speed, length units per time unit.
    pub speed: f64,
    /// Fixed-point factor applied to travel times before rounding to integer costs.
    pub cost_scale: u32,
}

impl Default for EvacuationConfig {
    fn default() -> Self {
        Self { alpha_stairs: DEFAULT_ALPHA_STAIRS, speed: DEFAULT_SPEED, cost_scale: DEFAULT_COST_SCALE }
    }
}

impl EvacuationConfig {
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ArgumentError::Speed(self.speed));
        }
        if !self.alpha_stairs.is_finite() || self.alpha_stairs < 0.0 {
            return Err(ArgumentError::StairsPenalty(self.alpha_stairs));
        }
        if self.cost_scale == 0 {
            return Err(ArgumentError::CostScale);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(EvacuationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_speed() {
        let config = EvacuationConfig { speed: 0.0, ..EvacuationConfig::default() };
        assert_eq!(config.validate(), Err(ArgumentError::Speed(0.0)));
    }

    #[test]
    fn rejects_negative_penalty() {
        let config = EvacuationConfig { alpha_stairs: -1.0, ..EvacuationConfig::default() };
        assert_eq!(config.validate(), Err(ArgumentError::StairsPenalty(-1.0)));
    }
}
