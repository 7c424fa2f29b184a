//! Queries over a roster graph snapshot.
//!
//! Each component is a pure function of the snapshot, its parameters and an
//! injected random source, so a single [`rostergraph_store::GraphStore`] can
//! serve any number of concurrent callers. [`RosterService`] bundles them
//! into the id- and name-based query surface.

pub mod chains;
pub mod distractors;
pub mod path;
pub mod quiz;
pub mod roster;
pub mod search;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use chains::ChainEnumerator;
pub use distractors::DistractorSampler;
pub use path::PathFinder;
pub use quiz::QuizBuilder;
pub use roster::RosterFilter;
pub use search::NameSearch;
pub use service::RosterService;
pub use types::*;
