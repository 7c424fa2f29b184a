//! RosterGraph Core - error types and runtime configuration.

pub mod config;
pub mod error;

pub use config::{ChainBudget, RosterGraphConfig};
pub use error::{Error, Result};
