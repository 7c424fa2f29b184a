//! Player name search ranked by total appearances.

use rostergraph_store::GraphStore;

use crate::types::PlayerMatch;

/// Result cap used when the caller does not supply one.
pub const DEFAULT_SEARCH_LIMIT: usize = 25;

/// Substring search over lowercased player names.
pub struct NameSearch;

impl NameSearch {
    /// Lowercase the query and collapse each whitespace run into one hyphen.
    pub fn normalize_query(text: &str) -> String {
        text.split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase()
    }

    /// Players whose lowercased name contains the normalized query.
    ///
    /// Ranked by appearances descending, then raw name ascending, then id
    /// ascending so the order is total. An empty result is not an error.
    pub fn search(graph: &GraphStore, text: &str, limit: usize) -> Vec<PlayerMatch> {
        let needle = Self::normalize_query(text);

        let mut hits: Vec<PlayerMatch> = graph
            .players()
            .filter(|(idx, _)| graph.lowercase_name(*idx).contains(&needle))
            .map(|(idx, player)| PlayerMatch {
                id: player.id.clone(),
                name: player.name.clone(),
                appearances: graph.total_appearances(idx),
            })
            .collect();

        hits.sort_by(|a, b| {
            b.appearances
                .cmp(&a.appearances)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        hits.truncate(limit);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::SnapshotBuilder;

    fn store() -> GraphStore {
        SnapshotBuilder::new()
            .player("js", "John Smith")
            .player("jr", "Joe Reed")
            .player("mj", "Mary-Jo Kent")
            .player("zz", "Zed Zulu")
            .tenure("js", "X", 2000, 2002, 30)
            .tenure("js", "Y", 2003, 2005, 20)
            .tenure("jr", "X", 2000, 2004, 80)
            .tenure("mj", "Y", 2001, 2003, 50)
            .build()
    }

    #[test]
    fn test_ranked_by_appearances() {
        let hits = NameSearch::search(&store(), "jo", DEFAULT_SEARCH_LIMIT);
        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Joe Reed", "John Smith", "Mary-Jo Kent"]);
        assert_eq!(hits[0].appearances, 80);
        assert_eq!(hits[1].appearances, 50);
    }

    #[test]
    fn test_ties_break_on_name() {
        let hits = NameSearch::search(&store(), "j", DEFAULT_SEARCH_LIMIT);
        // John Smith and Mary-Jo Kent both have 50 appearances
        let names: Vec<&str> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Joe Reed", "John Smith", "Mary-Jo Kent"]);
    }

    #[test]
    fn test_query_normalization() {
        assert_eq!(NameSearch::normalize_query("  Mary   Jo "), "mary-jo");
        assert_eq!(NameSearch::normalize_query("SMITH"), "smith");

        let hits = NameSearch::search(&store(), "MARY jo", DEFAULT_SEARCH_LIMIT);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "mj");

        // the candidate name is not hyphenated, so a spaced query misses it
        assert!(NameSearch::search(&store(), "john smith", DEFAULT_SEARCH_LIMIT).is_empty());
    }

    #[test]
    fn test_limit_and_empty_results() {
        let hits = NameSearch::search(&store(), "", 2);
        assert_eq!(hits.len(), 2);
        assert!(NameSearch::search(&store(), "nobody", DEFAULT_SEARCH_LIMIT).is_empty());
    }

    #[test]
    fn test_player_without_tenures_has_zero_appearances() {
        let hits = NameSearch::search(&store(), "zulu", DEFAULT_SEARCH_LIMIT);
        assert_eq!(hits[0].appearances, 0);
    }

    #[test]
    fn test_repeated_searches_are_stable() {
        let store = store();
        let first = NameSearch::search(&store, "", DEFAULT_SEARCH_LIMIT);
        for _ in 0..5 {
            assert_eq!(NameSearch::search(&store, "", DEFAULT_SEARCH_LIMIT), first);
        }
    }
}
