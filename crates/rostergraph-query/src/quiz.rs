//! Multiple-choice question assembly from sampled chains.

use rand::Rng;
use rostergraph_store::{GraphStore, PlayerIdx};
use tracing::debug;

use crate::distractors::DistractorSampler;
use crate::types::{Chain, Question, QuestionSlot};

/// Turns chains into questions that hide every interior player.
pub struct QuizBuilder;

impl QuizBuilder {
    /// One question per chain whose shape matches `steps`.
    ///
    /// Chains with the wrong player/club count, or naming players that are
    /// not in the snapshot, are skipped.
    pub fn build<R: Rng + ?Sized>(
        graph: &GraphStore,
        chains: &[Chain],
        steps: usize,
        num_options: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        chains
            .iter()
            .filter_map(|chain| Self::question(graph, chain, steps, num_options, rng))
            .collect()
    }

    fn question<R: Rng + ?Sized>(
        graph: &GraphStore,
        chain: &Chain,
        steps: usize,
        num_options: usize,
        rng: &mut R,
    ) -> Option<Question> {
        if steps == 0 || !chain.has_shape(steps) {
            debug!(
                "Skipping malformed chain: {} players, {} clubs for steps={}",
                chain.players.len(),
                chain.clubs.len(),
                steps
            );
            return None;
        }

        let indices: Option<Vec<PlayerIdx>> = chain
            .players
            .iter()
            .map(|p| graph.index_of(&p.id))
            .collect();
        let Some(indices) = indices else {
            debug!("Skipping chain with a player missing from the snapshot");
            return None;
        };

        let slots = (1..steps)
            .map(|i| QuestionSlot {
                position: i,
                correct: chain.players[i].clone(),
                choices: DistractorSampler::options(
                    graph,
                    indices[i - 1],
                    indices[i],
                    indices[i + 1],
                    num_options,
                    rng,
                ),
            })
            .collect();

        Some(Question {
            start: chain.players[0].clone(),
            end: chain.players[steps].clone(),
            clubs: chain.clubs.clone(),
            slots,
        })
    }
}
