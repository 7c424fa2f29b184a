//! Unweighted shortest teammate path.

use rostergraph_store::{ClubId, GraphStore, PlayerIdx};
use tracing::debug;

use crate::types::TeammatePath;

/// Breadth-first search over teammate edges with a hop cap.
///
/// Among several minimal paths the one returned is the first discovered:
/// the frontier is expanded in discovery order and each player's neighbors
/// in snapshot order, and a player keeps the first edge that reached it.
/// The choice is deterministic for a fixed snapshot but not canonical.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder {
    max_hops: usize,
}

impl PathFinder {
    pub fn new(max_hops: usize) -> Self {
        Self { max_hops }
    }

    /// Shortest path from `from` to `to`, or `None` if none exists within
    /// the hop cap. A player is joined to themselves by a zero-length path.
    pub fn shortest_path(
        &self,
        graph: &GraphStore,
        from: PlayerIdx,
        to: PlayerIdx,
    ) -> Option<TeammatePath> {
        if from == to {
            return Some(TeammatePath {
                players: vec![graph.player_at(from).clone()],
                clubs: Vec::new(),
                length: 0,
            });
        }

        let mut parent: Vec<Option<(PlayerIdx, ClubId)>> = vec![None; graph.player_count()];
        let mut visited = vec![false; graph.player_count()];
        visited[from.index()] = true;

        let mut frontier = vec![from];
        for depth in 1..=self.max_hops {
            let mut next = Vec::new();
            for &current in &frontier {
                for neighbor in graph.teammate_neighbors(current) {
                    let n = neighbor.player.index();
                    if visited[n] {
                        continue;
                    }
                    visited[n] = true;
                    parent[n] = Some((current, neighbor.club));
                    if neighbor.player == to {
                        debug!("Shortest path found at depth {}", depth);
                        return Some(Self::reconstruct(graph, &parent, to));
                    }
                    next.push(neighbor.player);
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        debug!(
            "No path from '{}' to '{}' within {} hops",
            graph.player_at(from).id,
            graph.player_at(to).id,
            self.max_hops
        );
        None
    }

    fn reconstruct(
        graph: &GraphStore,
        parent: &[Option<(PlayerIdx, ClubId)>],
        to: PlayerIdx,
    ) -> TeammatePath {
        let mut players = vec![graph.player_at(to).clone()];
        let mut clubs = Vec::new();
        let mut cursor = to;
        while let Some((prev, club)) = parent[cursor.index()] {
            clubs.push(graph.club_name(club).to_string());
            players.push(graph.player_at(prev).clone());
            cursor = prev;
        }
        players.reverse();
        clubs.reverse();
        TeammatePath {
            length: clubs.len(),
            players,
            clubs,
        }
    }
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new(10)
    }
}
