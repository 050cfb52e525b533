pub mod config;
pub mod corpus;
pub mod error;
pub mod readiness;
pub mod telemetry;

pub use readiness::{compute_mission_readiness_index, ReadinessEngine};
