//! RosterGraph Store - immutable roster graph snapshot and its loaders.

pub mod graph;
pub mod schema;
pub mod sqlite;
pub mod types;

pub use graph::GraphStore;
pub use sqlite::SqliteSource;
pub use types::*;
