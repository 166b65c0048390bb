//! Evacuation planning on capacitated, weighted directed networks.
//!
//! A building is modelled as a [`graph::Graph`] whose edges carry a capacity
//! (people per minute) and an integer travel cost. The maximum evacuation
//! rate is found with [`maximum_flow::EdmondsKarp`]; the cheapest assignment
//! realising that rate is found with
//! [`minimum_cost_flow::SuccessiveShortestPath`]. [`scenario`] chains both
//! and evaluates variants with corridors closed.
pub mod assignment;
pub mod building;
pub mod config;
pub mod error;
pub mod graph;
pub mod maximum_flow;
pub mod minimum_cost_flow;
pub mod scenario;

pub use assignment::{AssignedEdge, FlowAssignment};
pub use config::EvacuationConfig;
pub use error::{ArgumentError, Error, InfeasibleFlowError, ValidationError};
pub use graph::{EdgeRef, Graph};
pub use maximum_flow::{max_flow, MaximumFlow};
pub use minimum_cost_flow::demand::Demands;
pub use minimum_cost_flow::{min_cost_flow, min_cost_flow_for_value, MinimumCostFlow};
pub use scenario::{evaluate, run_scenario, run_scenarios, PositiveEdge, Report, Scenario};
