use thiserror::Error;

/// Malformed network input, raised while a graph is being built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("edge {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: String, to: String },
    #[error("edge {from} -> {to} has a negative cost")]
    NegativeCost { from: String, to: String },
    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge { from: String, to: String },
    #[error("edge {from} -> {to} has invalid length {length}")]
    InvalidLength { from: String, to: String, length: f64 },
    #[error("cost of edge {from} -> {to} does not fit in an integer")]
    CostOverflow { from: String, to: String },
    #[error("source and sink are both {0}")]
    SameSourceAndSink(String),
    #[error("{quantity} does not fit in the flow type")]
    Overflow { quantity: &'static str },
}

/// The requested demands cannot be met within the edge capacities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfeasibleFlowError {
    #[error("demands sum to {total} instead of zero")]
    Unbalanced { total: i64 },
    #[error("node {node} has a non-zero demand but is not in the graph")]
    UnknownNode { node: String },
    #[error("{remaining} units of supply cannot reach any demand")]
    Unsatisfiable { remaining: i64 },
}

/// Bad external configuration, detected before any graph is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("walking speed must be positive and finite, got {0}")]
    Speed(f64),
    #[error("stairs penalty must be non-negative and finite, got {0}")]
    StairsPenalty(f64),
    #[error("cost scale must be positive")]
    CostScale,
    #[error("unknown argument {0}")]
    Unknown(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },
    #[error("cannot read edge file {path}: {reason}")]
    EdgeFile { path: String, reason: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InfeasibleFlow(#[from] InfeasibleFlowError),
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error("cannot serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}
