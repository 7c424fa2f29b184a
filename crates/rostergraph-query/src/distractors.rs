//! Near-miss answer options for a hidden chain player.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use rostergraph_store::{GraphStore, Player, PlayerIdx};

/// Picks decoys that are teammates of exactly one of the hidden player's
/// chain neighbors.
pub struct DistractorSampler;

impl DistractorSampler {
    /// Players other than `prev`, `correct` and `next` who share a teammate
    /// edge, at any club, with exactly one of `prev` and `next`.
    ///
    /// Returned in snapshot order.
    pub fn candidates(
        graph: &GraphStore,
        prev: PlayerIdx,
        correct: PlayerIdx,
        next: PlayerIdx,
    ) -> Vec<PlayerIdx> {
        let teammates_of = |p: PlayerIdx| -> HashSet<PlayerIdx> {
            graph.teammate_neighbors(p).iter().map(|n| n.player).collect()
        };
        let near_prev = teammates_of(prev);
        let near_next = teammates_of(next);

        let mut candidates: Vec<PlayerIdx> = near_prev
            .symmetric_difference(&near_next)
            .copied()
            .filter(|&x| x != prev && x != correct && x != next)
            .collect();
        candidates.sort_unstable();
        candidates
    }

    /// `correct` plus up to `limit` random distractors, shuffled.
    ///
    /// Fewer than `limit` qualifying players yields a shorter list.
    pub fn options<R: Rng + ?Sized>(
        graph: &GraphStore,
        prev: PlayerIdx,
        correct: PlayerIdx,
        next: PlayerIdx,
        limit: usize,
        rng: &mut R,
    ) -> Vec<Player> {
        let candidates = Self::candidates(graph, prev, correct, next);

        let mut options: Vec<Player> = Vec::with_capacity(limit.min(candidates.len()) + 1);
        options.push(graph.player_at(correct).clone());
        options.extend(
            candidates
                .choose_multiple(rng, limit)
                .map(|&idx| graph.player_at(idx).clone()),
        );
        options.shuffle(rng);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::SnapshotBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// prev=p, correct=c, next=n along p-c-n.
    /// x1 knows p only, x2 knows n only, both knows p and n, none knows c only.
    fn store() -> GraphStore {
        SnapshotBuilder::new()
            .player("p", "Prev")
            .player("c", "Correct")
            .player("n", "Next")
            .player("x1", "Near Prev")
            .player("x2", "Near Next")
            .player("both", "Both Sides")
            .player("none", "Only Correct")
            .teammates("p", "c", "X", 1.0)
            .teammates("c", "n", "Y", 1.0)
            .teammates("x1", "p", "Z", 1.0)
            .teammates("n", "x2", "W", 1.0)
            .teammates("both", "p", "X", 1.0)
            .teammates("both", "n", "Y", 1.0)
            .teammates("none", "c", "X", 1.0)
            .build()
    }

    fn idx(store: &GraphStore, id: &str) -> PlayerIdx {
        store.index_of(id).unwrap()
    }

    #[test]
    fn test_xor_candidates() {
        let store = store();
        let found = DistractorSampler::candidates(
            &store,
            idx(&store, "p"),
            idx(&store, "c"),
            idx(&store, "n"),
        );
        let ids: Vec<&str> = found.iter().map(|&i| store.player_at(i).id.as_str()).collect();
        assert_eq!(ids, vec!["x1", "x2"]);
    }

    #[test]
    fn test_options_contain_correct_and_distractors() {
        let store = store();
        let mut rng = StdRng::seed_from_u64(1);
        let (p, c, n) = (idx(&store, "p"), idx(&store, "c"), idx(&store, "n"));

        let options = DistractorSampler::options(&store, p, c, n, 4, &mut rng);
        // only two qualify, so the list is shorter than requested
        assert_eq!(options.len(), 3);
        assert!(options.iter().any(|o| o.id == "c"));

        for option in options.iter().filter(|o| o.id != "c") {
            let x = idx(&store, &option.id);
            assert!(store.are_teammates(x, p) != store.are_teammates(x, n));
        }
    }

    #[test]
    fn test_limit_caps_distractors() {
        let store = store();
        let mut rng = StdRng::seed_from_u64(9);
        let (p, c, n) = (idx(&store, "p"), idx(&store, "c"), idx(&store, "n"));

        let options = DistractorSampler::options(&store, p, c, n, 1, &mut rng);
        assert_eq!(options.len(), 2);
        assert!(options.iter().any(|o| o.id == "c"));

        let options = DistractorSampler::options(&store, p, c, n, 0, &mut rng);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].id, "c");
    }

    #[test]
    fn test_adjacency_ignores_chain_club() {
        // x3 met p at a club unrelated to the chain's edge
        let store = SnapshotBuilder::new()
            .player("p", "Prev")
            .player("c", "Correct")
            .player("n", "Next")
            .player("x3", "Elsewhere")
            .teammates("p", "c", "X", 1.0)
            .teammates("c", "n", "Y", 1.0)
            .teammates("p", "x3", "Q", 1.0)
            .build();
        let found = DistractorSampler::candidates(
            &store,
            idx(&store, "p"),
            idx(&store, "c"),
            idx(&store, "n"),
        );
        assert_eq!(found, vec![idx(&store, "x3")]);
    }

    #[test]
    fn test_seeded_options_repeat() {
        let store = store();
        let (p, c, n) = (idx(&store, "p"), idx(&store, "c"), idx(&store, "n"));
        let first = DistractorSampler::options(&store, p, c, n, 1, &mut StdRng::seed_from_u64(5));
        let second = DistractorSampler::options(&store, p, c, n, 1, &mut StdRng::seed_from_u64(5));
        assert_eq!(first, second);
    }
}
