//! Immutable roster graph snapshot backed by a petgraph arena.
//!
//! Players are arena nodes, teammate edges are arena edges, and every
//! lookup the query layer needs is precomputed at build time. Nothing here
//! mutates after [`GraphStore::build`] returns, so a store can be shared
//! across threads behind an `Arc` without locking.
//!
//! Neighbor order: each adjacency list holds teammate edges in the order
//! their rows appeared in the bulk load. Both endpoints see the edge at the
//! same relative position, and the order never changes for a given snapshot.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::{debug, info, warn};

use crate::types::*;
use rostergraph_core::{Error, Result};

/// Read-only snapshot of players, clubs, tenures and teammate edges.
pub struct GraphStore {
    graph: UnGraph<Player, TeammateEdge>,
    player_index: HashMap<String, PlayerIdx>,
    clubs: Vec<String>,
    club_index: HashMap<String, ClubId>,
    adjacency: Vec<Vec<Neighbor>>,
    /// Unordered endpoint pairs with at least one teammate edge.
    teammate_pairs: HashSet<(u32, u32)>,
    tenures: Vec<Vec<TenureEdge>>,
    /// Per club: (player, position in that player's tenure list).
    club_tenures: Vec<Vec<(PlayerIdx, usize)>>,
    total_appearances: Vec<u64>,
    lowercase_names: Vec<String>,
    report: LoadReport,
}

impl GraphStore {
    /// Build a snapshot from a bulk load.
    ///
    /// Duplicate player ids are rejected. Rows that reference unknown
    /// players, tenures with `end_year < start_year` and self-loop teammate
    /// rows are skipped and counted in the [`LoadReport`].
    pub fn build(snapshot: GraphSnapshot) -> Result<Self> {
        let GraphSnapshot {
            players,
            tenures,
            teammates,
        } = snapshot;

        let mut graph = UnGraph::with_capacity(players.len(), teammates.len());
        let mut player_index = HashMap::with_capacity(players.len());
        let mut report = LoadReport::default();

        for player in players {
            if player_index.contains_key(&player.id) {
                return Err(Error::InvalidSnapshot(format!(
                    "duplicate player id '{}'",
                    player.id
                )));
            }
            let id = player.id.clone();
            let idx = graph.add_node(player);
            player_index.insert(id, idx);
        }
        report.players = graph.node_count();

        let node_count = graph.node_count();
        let mut clubs: Vec<String> = Vec::new();
        let mut club_index: HashMap<String, ClubId> = HashMap::new();
        let mut intern = |name: &str| -> ClubId {
            if let Some(&id) = club_index.get(name) {
                return id;
            }
            let id = ClubId(clubs.len() as u32);
            clubs.push(name.to_string());
            club_index.insert(name.to_string(), id);
            id
        };

        let mut player_tenures: Vec<Vec<TenureEdge>> = vec![Vec::new(); node_count];
        for row in tenures {
            let Some(&idx) = player_index.get(&row.player_id) else {
                debug!("Skipping tenure for unknown player '{}'", row.player_id);
                report.skipped_tenures += 1;
                continue;
            };
            if row.end_year < row.start_year {
                debug!(
                    "Skipping tenure {}@{} with end {} before start {}",
                    row.player_id, row.club, row.end_year, row.start_year
                );
                report.skipped_tenures += 1;
                continue;
            }
            player_tenures[idx.index()].push(TenureEdge {
                club: intern(&row.club),
                start_year: row.start_year,
                end_year: row.end_year,
                appearances: row.appearances,
            });
            report.tenures += 1;
        }

        for row in teammates {
            let (Some(&a), Some(&b)) = (
                player_index.get(&row.player_a),
                player_index.get(&row.player_b),
            ) else {
                debug!(
                    "Skipping teammate edge {} - {}: unknown player",
                    row.player_a, row.player_b
                );
                report.skipped_teammates += 1;
                continue;
            };
            if a == b {
                report.skipped_teammates += 1;
                continue;
            }
            let club = intern(&row.club);
            let at_club =
                |p: NodeIndex| player_tenures[p.index()].iter().any(|t| t.club == club);
            if !at_club(a) && !at_club(b) {
                report.teammates_without_tenure += 1;
            }
            graph.add_edge(
                a,
                b,
                TeammateEdge {
                    club,
                    weight: row.weight,
                },
            );
            report.teammates += 1;
        }

        let mut adjacency: Vec<Vec<Neighbor>> = vec![Vec::new(); node_count];
        let mut teammate_pairs = HashSet::with_capacity(graph.edge_count());
        // edge_references() walks edges in insertion order
        for edge in graph.edge_references() {
            let (a, b) = (edge.source(), edge.target());
            let payload = *edge.weight();
            adjacency[a.index()].push(Neighbor {
                player: b,
                club: payload.club,
                weight: payload.weight,
            });
            adjacency[b.index()].push(Neighbor {
                player: a,
                club: payload.club,
                weight: payload.weight,
            });
            teammate_pairs.insert(pair_key(a, b));
        }

        let mut club_tenures: Vec<Vec<(PlayerIdx, usize)>> = vec![Vec::new(); clubs.len()];
        for (p, list) in player_tenures.iter().enumerate() {
            for (pos, tenure) in list.iter().enumerate() {
                club_tenures[tenure.club.index()].push((NodeIndex::new(p), pos));
            }
        }

        let total_appearances = player_tenures
            .iter()
            .map(|list| list.iter().map(|t| u64::from(t.appearances)).sum())
            .collect();
        let lowercase_names = graph
            .node_indices()
            .map(|idx| graph[idx].name.to_lowercase())
            .collect();

        if report.skipped_tenures > 0 || report.skipped_teammates > 0 {
            warn!(
                "Snapshot skipped {} tenure rows and {} teammate rows",
                report.skipped_tenures, report.skipped_teammates
            );
        }
        if report.teammates_without_tenure > 0 {
            warn!(
                "{} teammate edges name a club neither player has a tenure at",
                report.teammates_without_tenure
            );
        }
        info!(
            "GraphStore built: {} players, {} clubs, {} tenures, {} teammate edges",
            report.players,
            clubs.len(),
            report.tenures,
            report.teammates
        );

        Ok(Self {
            graph,
            player_index,
            clubs,
            club_index,
            adjacency,
            teammate_pairs,
            tenures: player_tenures,
            club_tenures,
            total_appearances,
            lowercase_names,
            report,
        })
    }

    /// Load a JSON-encoded [`GraphSnapshot`] from disk and build it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let snapshot: GraphSnapshot = serde_json::from_str(&data)?;
        Self::build(snapshot)
    }

    /// Load a snapshot file, picking the loader from the file extension.
    ///
    /// `.db`, `.sqlite` and `.sqlite3` go through [`crate::SqliteSource`];
    /// everything else is read as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("db") | Some("sqlite") | Some("sqlite3") => {
                let snapshot = crate::SqliteSource::open(path)?.load()?;
                Self::build(snapshot)
            }
            _ => Self::from_json_file(path),
        }
    }

    // ---------------------------------------------------------------
    // Players
    // ---------------------------------------------------------------

    pub fn player_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Look up a player by id.
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.index_of(id).map(|idx| &self.graph[idx])
    }

    pub fn index_of(&self, id: &str) -> Option<PlayerIdx> {
        self.player_index.get(id).copied()
    }

    /// Player stored at an index issued by this snapshot.
    pub fn player_at(&self, idx: PlayerIdx) -> &Player {
        &self.graph[idx]
    }

    /// All players in load order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerIdx, &Player)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Sum of appearances across every tenure of the player.
    pub fn total_appearances(&self, idx: PlayerIdx) -> u64 {
        self.total_appearances[idx.index()]
    }

    /// Lowercased display name, precomputed for substring search.
    pub fn lowercase_name(&self, idx: PlayerIdx) -> &str {
        &self.lowercase_names[idx.index()]
    }

    // ---------------------------------------------------------------
    // Teammate edges
    // ---------------------------------------------------------------

    /// Teammate edges of a player, one entry per (neighbor, club) edge.
    pub fn teammate_neighbors(&self, idx: PlayerIdx) -> &[Neighbor] {
        &self.adjacency[idx.index()]
    }

    /// Whether any teammate edge joins the two players.
    pub fn are_teammates(&self, a: PlayerIdx, b: PlayerIdx) -> bool {
        self.teammate_pairs.contains(&pair_key(a, b))
    }

    // ---------------------------------------------------------------
    // Clubs and tenures
    // ---------------------------------------------------------------

    pub fn club_name(&self, club: ClubId) -> &str {
        &self.clubs[club.index()]
    }

    pub fn club_id(&self, name: &str) -> Option<ClubId> {
        self.club_index.get(name).copied()
    }

    /// Tenure edges of a player in load order.
    pub fn tenures(&self, idx: PlayerIdx) -> &[TenureEdge] {
        &self.tenures[idx.index()]
    }

    /// Every tenure edge at the named club, grouped by player load order.
    pub fn tenures_by_club(&self, club_name: &str) -> Vec<(PlayerIdx, &TenureEdge)> {
        let Some(club) = self.club_id(club_name) else {
            return Vec::new();
        };
        self.club_tenures[club.index()]
            .iter()
            .map(|&(p, pos)| (p, &self.tenures[p.index()][pos]))
            .collect()
    }

    // ---------------------------------------------------------------
    // Stats
    // ---------------------------------------------------------------

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            players: self.graph.node_count(),
            clubs: self.clubs.len(),
            tenures: self.report.tenures,
            teammate_edges: self.graph.edge_count(),
        }
    }

    /// Rows accepted and skipped when this snapshot was built.
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }
}

fn pair_key(a: PlayerIdx, b: PlayerIdx) -> (u32, u32) {
    let (a, b) = (a.index() as u32, b.index() as u32);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
