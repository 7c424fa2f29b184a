//! Configuration and search budget management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_SNAPSHOT: &str = "data/roster.json";
const DEFAULT_MAX_PATH_HOPS: usize = 10;
const DEFAULT_MAX_CHAIN_STEPS: usize = 6;
const DEFAULT_MAX_CHAIN_EXPANSIONS: usize = 2_000_000;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Upper bounds on a single chain enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainBudget {
    /// Largest `steps` value accepted at the request boundary.
    pub max_steps: usize,
    /// Neighbor edges the enumerator may examine, pruned or kept, before it
    /// stops searching.
    pub max_expansions: usize,
}

impl Default for ChainBudget {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_CHAIN_STEPS,
            max_expansions: DEFAULT_MAX_CHAIN_EXPANSIONS,
        }
    }
}

/// Top-level RosterGraph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterGraphConfig {
    /// HTTP server port.
    pub port: u16,
    /// Snapshot file the graph is loaded from (`.json` or SQLite).
    pub snapshot_path: PathBuf,
    /// Hop cap for shortest-path search.
    pub max_path_hops: usize,
    /// Chain enumeration bounds.
    pub chain_budget: ChainBudget,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
}

impl RosterGraphConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |key: &str, default: usize| -> usize {
            lookup(key)
                .and_then(|v| v.trim().replace('_', "").parse().ok())
                .unwrap_or(default)
        };

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let snapshot_path = lookup("ROSTERGRAPH_SNAPSHOT")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT));

        let chain_budget = ChainBudget {
            max_steps: parsed("ROSTERGRAPH_MAX_CHAIN_STEPS", DEFAULT_MAX_CHAIN_STEPS),
            max_expansions: parsed(
                "ROSTERGRAPH_MAX_CHAIN_EXPANSIONS",
                DEFAULT_MAX_CHAIN_EXPANSIONS,
            ),
        };
        if chain_budget.max_steps == 0 {
            return Err(Error::Config(
                "ROSTERGRAPH_MAX_CHAIN_STEPS must be at least 1".into(),
            ));
        }
        if chain_budget.max_expansions == 0 {
            return Err(Error::Config(
                "ROSTERGRAPH_MAX_CHAIN_EXPANSIONS must be at least 1".into(),
            ));
        }

        let cors_origins = lookup("ROSTERGRAPH_CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            port,
            snapshot_path,
            max_path_hops: parsed("ROSTERGRAPH_MAX_PATH_HOPS", DEFAULT_MAX_PATH_HOPS),
            chain_budget,
            cors_origins,
        })
    }
}

impl Default for RosterGraphConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT),
            max_path_hops: DEFAULT_MAX_PATH_HOPS,
            chain_budget: ChainBudget::default(),
            cors_origins: DEFAULT_CORS_ORIGINS
                .split(',')
                .map(str::to_string)
                .collect(),
        }
    }
}
