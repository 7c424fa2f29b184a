//! Data types for players, tenures, teammate edges and bulk loads.

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// Arena index of a player inside a [`crate::GraphStore`].
pub type PlayerIdx = NodeIndex;

/// Interned club identifier, valid for the snapshot that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClubId(pub(crate) u32);

impl ClubId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A player node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
}

/// A player's spell at a club, as stored in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenureEdge {
    pub club: ClubId,
    pub start_year: i32,
    pub end_year: i32,
    pub appearances: u32,
}

/// Teammate edge payload kept in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeammateEdge {
    pub club: ClubId,
    pub weight: f64,
}

/// One entry of a player's teammate adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub player: PlayerIdx,
    pub club: ClubId,
    pub weight: f64,
}

/// A tenure row of a bulk load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenureRecord {
    pub player_id: String,
    pub club: String,
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default)]
    pub appearances: u32,
}

/// A teammate (PLAYED_WITH) row of a bulk load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeammateRecord {
    pub player_a: String,
    pub player_b: String,
    pub club: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Externally supplied bulk load the snapshot is built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub players: Vec<Player>,
    #[serde(default)]
    pub tenures: Vec<TenureRecord>,
    #[serde(default)]
    pub teammates: Vec<TeammateRecord>,
}

/// Rows accepted and skipped while building a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub players: usize,
    pub tenures: usize,
    pub teammates: usize,
    pub skipped_tenures: usize,
    pub skipped_teammates: usize,
    /// Teammate edges whose club neither endpoint has a tenure at.
    pub teammates_without_tenure: usize,
}

/// Snapshot-level statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    pub players: usize,
    pub clubs: usize,
    pub tenures: usize,
    pub teammate_edges: usize,
}
