//! Fixed-length teammate chain enumeration and weighted sampling.
//!
//! A chain of `steps` edges `(n0 .. n_steps)` is emitted when:
//! - consecutive edges were at different clubs,
//! - no teammate edge joins two non-consecutive players (induced path),
//! - `n0.id < n_steps.id`, so each undirected chain appears once.
//!
//! Paths are grown breadth-first from every player and dropped the moment
//! they break a constraint, so no full simple-path set is materialised.
//! Start players are shuffled so a search cut short by its budget is not
//! biased toward the front of the snapshot.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use rostergraph_core::ChainBudget;
use rostergraph_store::{ClubId, GraphStore, PlayerIdx};
use tracing::{debug, info, warn};

use crate::types::Chain;

/// A chain found by the search, still in arena indices.
#[derive(Debug, Clone, PartialEq)]
pub struct RawChain {
    pub players: Vec<PlayerIdx>,
    pub clubs: Vec<ClubId>,
    pub total_weight: f64,
}

/// Outcome of one enumeration pass.
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    /// Distinct canonical chains, in discovery order.
    pub chains: Vec<RawChain>,
    /// Edges examined while growing paths.
    pub expansions: usize,
    /// Whether the expansion budget ran out before the search finished.
    pub exhausted: bool,
}

#[derive(Clone)]
struct Partial {
    players: Vec<PlayerIdx>,
    clubs: Vec<ClubId>,
    weight: f64,
}

/// Enumerates and samples constrained chains within a search budget.
#[derive(Debug, Clone, Copy)]
pub struct ChainEnumerator {
    budget: ChainBudget,
}

impl ChainEnumerator {
    pub fn new(budget: ChainBudget) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> ChainBudget {
        self.budget
    }

    /// Every distinct chain of exactly `steps` edges, in discovery order.
    ///
    /// Start players are visited in an order shuffled with `rng` and
    /// neighbors in adjacency order. Once `max_expansions` neighbor edges
    /// have been examined the search stops, keeping every chain completed
    /// so far, so a truncated search still draws starts from the whole
    /// snapshot.
    pub fn enumerate<R: Rng + ?Sized>(
        &self,
        graph: &GraphStore,
        steps: usize,
        rng: &mut R,
    ) -> Enumeration {
        let mut out = Enumeration::default();
        if steps == 0 {
            return out;
        }
        let mut seen: HashSet<(Vec<PlayerIdx>, Vec<ClubId>)> = HashSet::new();

        let mut starts: Vec<PlayerIdx> = graph.players().map(|(idx, _)| idx).collect();
        starts.shuffle(rng);

        for start in starts {
            let mut layer = vec![Partial {
                players: vec![start],
                clubs: Vec::new(),
                weight: 0.0,
            }];

            for depth in 0..steps {
                let closing = depth + 1 == steps;
                let mut next = Vec::new();

                'expand: for partial in &layer {
                    let (&tail, interior) = match partial.players.split_last() {
                        Some(split) => split,
                        None => continue,
                    };
                    for neighbor in graph.teammate_neighbors(tail) {
                        out.expansions += 1;
                        if out.expansions > self.budget.max_expansions {
                            out.exhausted = true;
                            break 'expand;
                        }
                        let candidate = neighbor.player;
                        if candidate == tail || interior.contains(&candidate) {
                            continue;
                        }
                        if partial.clubs.last() == Some(&neighbor.club) {
                            continue;
                        }
                        if interior.iter().any(|&p| graph.are_teammates(p, candidate)) {
                            continue;
                        }
                        if closing && graph.player_at(start).id >= graph.player_at(candidate).id
                        {
                            continue;
                        }

                        let mut grown = partial.clone();
                        grown.players.push(candidate);
                        grown.clubs.push(neighbor.club);
                        grown.weight += neighbor.weight;
                        next.push(grown);
                    }
                }

                layer = next;
                if out.exhausted || layer.is_empty() {
                    break;
                }
            }

            // partials cut short by the budget never reach `steps` clubs
            for partial in layer {
                if partial.clubs.len() != steps {
                    continue;
                }
                if !seen.insert((partial.players.clone(), partial.clubs.clone())) {
                    continue;
                }
                out.chains.push(RawChain {
                    players: partial.players,
                    clubs: partial.clubs,
                    total_weight: partial.weight,
                });
            }

            if out.exhausted {
                break;
            }
        }

        if out.exhausted {
            warn!(
                "Chain search for steps={} stopped after {} expansions; sampling from {} chains",
                steps,
                self.budget.max_expansions,
                out.chains.len()
            );
        } else {
            debug!(
                "Chain search for steps={} found {} chains in {} expansions",
                steps,
                out.chains.len(),
                out.expansions
            );
        }
        out
    }

    /// Sample up to `limit` chains of `steps` edges, biased toward heavy ones.
    ///
    /// Each candidate gets the key `total_weight * u` with `u` uniform in
    /// `[0, 1)`; the `limit` largest keys win.
    pub fn chains<R: Rng + ?Sized>(
        &self,
        graph: &GraphStore,
        steps: usize,
        limit: usize,
        rng: &mut R,
    ) -> Vec<Chain> {
        let found = self.enumerate(graph, steps, rng);
        let sampled = sample_weighted(found.chains, limit, rng);

        let chains: Vec<Chain> = sampled
            .into_iter()
            .map(|raw| to_chain(graph, raw))
            .filter(|chain| chain.has_shape(steps))
            .collect();
        info!(
            "Sampled {} of requested {} chains (steps={})",
            chains.len(),
            limit,
            steps
        );
        chains
    }
}

/// Order candidates by `total_weight * random` descending and keep `limit`.
pub fn sample_weighted<R: Rng + ?Sized>(
    candidates: Vec<RawChain>,
    limit: usize,
    rng: &mut R,
) -> Vec<RawChain> {
    let mut keyed: Vec<(f64, RawChain)> = candidates
        .into_iter()
        .map(|chain| (chain.total_weight * rng.gen::<f64>(), chain))
        .collect();
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    keyed.truncate(limit);
    keyed.into_iter().map(|(_, chain)| chain).collect()
}

fn to_chain(graph: &GraphStore, raw: RawChain) -> Chain {
    Chain {
        players: raw
            .players
            .iter()
            .map(|&p| graph.player_at(p).clone())
            .collect(),
        clubs: raw
            .clubs
            .iter()
            .map(|&c| graph.club_name(c).to_string())
            .collect(),
        total_weight: raw.total_weight,
    }
}
