//! Id- and name-based query surface over one snapshot.

use std::sync::Arc;

use rand::Rng;
use rostergraph_core::{ChainBudget, Error, Result, RosterGraphConfig};
use rostergraph_store::{GraphStore, Player, PlayerIdx};
use tracing::{debug, info};

use crate::chains::ChainEnumerator;
use crate::path::PathFinder;
use crate::quiz::QuizBuilder;
use crate::roster::RosterFilter;
use crate::search::NameSearch;
use crate::types::*;

/// Query API bound to a single read-only snapshot.
///
/// Cheap to share: the snapshot sits behind an `Arc` and nothing here is
/// mutated after construction. Sampling calls take their own random source.
pub struct RosterService {
    graph: Arc<GraphStore>,
    path_finder: PathFinder,
    enumerator: ChainEnumerator,
}

impl RosterService {
    pub fn new(graph: Arc<GraphStore>, max_path_hops: usize, budget: ChainBudget) -> Self {
        Self {
            graph,
            path_finder: PathFinder::new(max_path_hops),
            enumerator: ChainEnumerator::new(budget),
        }
    }

    pub fn from_config(graph: Arc<GraphStore>, config: &RosterGraphConfig) -> Self {
        Self::new(graph, config.max_path_hops, config.chain_budget)
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn chain_budget(&self) -> ChainBudget {
        self.enumerator.budget()
    }

    // ---------------------------------------------------------------
    // Players
    // ---------------------------------------------------------------

    /// Fetch a player by id.
    pub fn get_player(&self, player_id: &str) -> Result<Player> {
        self.graph
            .player(player_id)
            .cloned()
            .ok_or_else(|| Error::PlayerNotFound(player_id.to_string()))
    }

    /// Ranked name search, capped at `limit`.
    pub fn search_players(&self, text: &str, limit: usize) -> Vec<PlayerMatch> {
        NameSearch::search(&self.graph, text, limit)
    }

    /// Club history of an existing player.
    pub fn club_history(&self, player_id: &str) -> Result<Vec<TenureSummary>> {
        let idx = self.require(player_id)?;
        Ok(RosterFilter::club_history(&self.graph, idx))
    }

    /// Club history of the best-ranked player matching `text`.
    pub fn club_history_by_name(&self, text: &str) -> Result<Vec<TenureSummary>> {
        let idx = self.resolve_name(text)?;
        Ok(RosterFilter::club_history(&self.graph, idx))
    }

    // ---------------------------------------------------------------
    // Clubs
    // ---------------------------------------------------------------

    /// Club roster with permissive sort parameters.
    ///
    /// Unknown `order_by` values sort by appearances and unknown
    /// `order_dir` values sort descending.
    pub fn club_roster(
        &self,
        club_name: &str,
        filters: &RosterFilters,
        order_by: &str,
        order_dir: &str,
    ) -> Vec<RosterEntry> {
        RosterFilter::club_roster(
            &self.graph,
            club_name,
            filters,
            RosterOrder::from_param(order_by),
            SortDir::from_param(order_dir),
        )
    }

    // ---------------------------------------------------------------
    // Teammates
    // ---------------------------------------------------------------

    /// Build up to `num_questions` questions from `steps`-edge chains.
    pub fn n_step_chains<R: Rng + ?Sized>(
        &self,
        steps: usize,
        num_questions: usize,
        num_options: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        let chains = self.enumerator.chains(&self.graph, steps, num_questions, rng);
        let questions = QuizBuilder::build(&self.graph, &chains, steps, num_options, rng);
        info!(
            "Built {} questions (steps={}, options={})",
            questions.len(),
            steps,
            num_options
        );
        questions
    }

    /// Shortest teammate path between two players given by id.
    pub fn shortest_path(&self, player_a: &str, player_b: &str) -> Result<TeammatePath> {
        let a = self.require(player_a)?;
        let b = self.require(player_b)?;
        self.path_between(a, b)
    }

    /// Shortest teammate path between the best matches for two names.
    pub fn shortest_path_by_name(&self, name_a: &str, name_b: &str) -> Result<TeammatePath> {
        let a = self.resolve_name(name_a)?;
        let b = self.resolve_name(name_b)?;
        self.path_between(a, b)
    }

    fn path_between(&self, a: PlayerIdx, b: PlayerIdx) -> Result<TeammatePath> {
        self.path_finder
            .shortest_path(&self.graph, a, b)
            .ok_or_else(|| Error::NoPath {
                from: self.graph.player_at(a).id.clone(),
                to: self.graph.player_at(b).id.clone(),
            })
    }

    fn require(&self, player_id: &str) -> Result<PlayerIdx> {
        self.graph
            .index_of(player_id)
            .ok_or_else(|| Error::PlayerNotFound(player_id.to_string()))
    }

    fn resolve_name(&self, text: &str) -> Result<PlayerIdx> {
        let best = NameSearch::search(&self.graph, text, 1)
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoPlayerMatching(text.to_string()))?;
        debug!("Resolved '{}' to player '{}'", text, best.id);
        self.require(&best.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::line_abcd;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn service() -> RosterService {
        let store = line_abcd().player("e", "Eve Island").build();
        RosterService::from_config(Arc::new(store), &RosterGraphConfig::default())
    }

    #[test]
    fn test_get_player() {
        let svc = service();
        assert_eq!(svc.get_player("a").unwrap().name, "Amy Archer");
        let err = svc.get_player("zz").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("zz"));
    }

    #[test]
    fn test_club_history_requires_player() {
        let svc = service();
        let history = svc.club_history("b").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].club, "X");
        assert!(matches!(
            svc.club_history("missing"),
            Err(Error::PlayerNotFound(_))
        ));
    }

    #[test]
    fn test_club_history_by_name() {
        let svc = service();
        let history = svc.club_history_by_name("cara").unwrap();
        assert_eq!(history.len(), 2);
        assert!(matches!(
            svc.club_history_by_name("nobody"),
            Err(Error::NoPlayerMatching(_))
        ));
    }

    #[test]
    fn test_club_roster_bad_params_fall_back() {
        let svc = service();
        let fallback = svc.club_roster("X", &RosterFilters::default(), "bogus", "sideways");
        let explicit = svc.club_roster("X", &RosterFilters::default(), "appearances", "desc");
        assert_eq!(fallback, explicit);
        assert_eq!(fallback[0].id, "d");
    }

    #[test]
    fn test_shortest_path_errors() {
        let svc = service();
        assert_eq!(svc.shortest_path("a", "d").unwrap().length, 3);
        assert_eq!(svc.shortest_path("a", "a").unwrap().length, 0);
        assert!(matches!(
            svc.shortest_path("a", "ghost"),
            Err(Error::PlayerNotFound(id)) if id == "ghost"
        ));
        assert!(matches!(
            svc.shortest_path("a", "e"),
            Err(Error::NoPath { .. })
        ));
    }

    #[test]
    fn test_shortest_path_by_name() {
        let svc = service();
        let path = svc.shortest_path_by_name("amy", "dan").unwrap();
        assert_eq!(path.players[0].id, "a");
        assert_eq!(path.players[3].id, "d");
        assert!(matches!(
            svc.shortest_path_by_name("amy", "nobody"),
            Err(Error::NoPlayerMatching(_))
        ));
    }

    #[test]
    fn test_n_step_chains() {
        let svc = service();
        let mut rng = StdRng::seed_from_u64(17);
        let questions = svc.n_step_chains(3, 10, 4, &mut rng);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].slots.len(), 2);

        assert!(svc.n_step_chains(5, 10, 4, &mut rng).is_empty());
    }
}
