//! Building topology: edge records, travel-time costs and the reference
//! eight-node floor plan.
use crate::config::EvacuationConfig;
use crate::error::{ArgumentError, Error, ValidationError};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const ENTRANCE: &str = "N";
pub const EXIT: &str = "S";

const CORRIDOR_LENGTH: f64 = 12.0;
const STAIRS_LENGTH: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Corridor,
    Ramp,
    Stairs,
}

/// One directed connection as supplied by a floor plan. Two-way corridors
/// appear as two records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub capacity: i64,
    pub length: f64,
    pub kind: EdgeKind,
}

impl EdgeSpec {
    pub fn new(from: &str, to: &str, capacity: i64, length: f64, kind: EdgeKind) -> Self {
        Self { from: from.to_string(), to: to.to_string(), capacity, length, kind }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(ValidationError::InvalidLength { from: self.from.clone(), to: self.to.clone(), length: self.length });
        }
        if self.capacity < 0 {
            return Err(ValidationError::NegativeCapacity { from: self.from.clone(), to: self.to.clone() });
        }
        Ok(())
    }

    fn penalty(&self, config: &EvacuationConfig) -> f64 {
        match self.kind {
            EdgeKind::Stairs => config.alpha_stairs,
            EdgeKind::Corridor | EdgeKind::Ramp => 0.0,
        }
    }

    /// Unscaled traversal time: `length / speed + penalty`.
    pub fn travel_time(&self, config: &EvacuationConfig) -> f64 {
        self.length / config.speed + self.penalty(config)
    }

    /// Travel time in fixed point, `round(time * cost_scale)`.
    pub fn cost(&self, config: &EvacuationConfig) -> Result<i64, ValidationError> {
        let scaled = (self.travel_time(config) * f64::from(config.cost_scale)).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !scaled.is_finite() || scaled < 0.0 || scaled >= i64::MAX as f64 {
            return Err(ValidationError::CostOverflow { from: self.from.clone(), to: self.to.clone() });
        }
        Ok(scaled as i64)
    }
}

/// The reference floor plan: entrance N, hall A, wings B and C, stairwells
/// S1 and S2, ground floor D and exit S, with crosslinks between the wings and
/// between the stairwells.
pub fn default_edges() -> Vec<EdgeSpec> {
    use EdgeKind::{Corridor, Stairs};

    vec![
        EdgeSpec::new("N", "A", 120, CORRIDOR_LENGTH, Corridor),
        EdgeSpec::new("A", "B", 60, CORRIDOR_LENGTH, Corridor),
        EdgeSpec::new("A", "C", 60, CORRIDOR_LENGTH, Corridor),
        EdgeSpec::new("B", "S1", 40, CORRIDOR_LENGTH, Corridor),
        EdgeSpec::new("C", "S2", 40, CORRIDOR_LENGTH, Corridor),
        EdgeSpec::new("S1", "D", 40, STAIRS_LENGTH, Stairs),
        EdgeSpec::new("S2", "D", 40, STAIRS_LENGTH, Stairs),
        EdgeSpec::new("D", "S", 120, CORRIDOR_LENGTH, Corridor),
        EdgeSpec::new("B", "C", 20, 8.0, Corridor),
        EdgeSpec::new("C", "B", 20, 8.0, Corridor),
        EdgeSpec::new("S1", "S2", 15, 6.0, Corridor),
        EdgeSpec::new("S2", "S1", 15, 6.0, Corridor),
    ]
}

pub fn build_graph(specs: &[EdgeSpec], config: &EvacuationConfig) -> Result<Graph<i64>, Error> {
    config.validate()?;

    let mut graph = Graph::new();
    for spec in specs {
        spec.validate()?;
        graph.add_edge(&spec.from, &spec.to, spec.capacity, spec.cost(config)?)?;
    }
    Ok(graph)
}

/// Reads a JSON array of edge records.
pub fn load_edges(path: &Path) -> Result<Vec<EdgeSpec>, ArgumentError> {
    let edge_file_error = |reason: String| ArgumentError::EdgeFile { path: path.display().to_string(), reason };
    let text = fs::read_to_string(path).map_err(|e| edge_file_error(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| edge_file_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_carry_no_penalty() {
        let config = EvacuationConfig::default();
        let ramp = EdgeSpec::new("a", "b", 10, 12.0, EdgeKind::Ramp);
        assert_eq!(ramp.cost(&config), Ok(100));
    }

    #[test]
    fn finer_scale_keeps_more_precision() {
        let config = EvacuationConfig { cost_scale: 100, ..EvacuationConfig::default() };
        let corridor = EdgeSpec::new("a", "b", 10, 8.0, EdgeKind::Corridor);
        assert_eq!(corridor.cost(&config), Ok(667));
    }

    #[test]
    fn edge_kinds_use_lowercase_names() {
        let spec: EdgeSpec = serde_json::from_str(r#"{"from":"S1","to":"D","capacity":40,"length":10.0,"kind":"stairs"}"#).unwrap();
        assert_eq!(spec, EdgeSpec::new("S1", "D", 40, 10.0, EdgeKind::Stairs));
    }
}
