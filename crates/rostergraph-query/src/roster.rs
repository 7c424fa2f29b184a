//! Club rosters and player club histories.

use std::cmp::Ordering;
use std::collections::HashMap;

use rostergraph_store::{GraphStore, PlayerIdx};

use crate::types::*;

/// Per-club aggregation of tenure edges.
pub struct RosterFilter;

impl RosterFilter {
    /// Players who played for `club_name`, aggregated per player.
    ///
    /// Season bounds filter individual tenure edges before aggregation;
    /// appearance bounds apply to the aggregated total. Rows that compare
    /// equal on the sort field fall back to name, then id, ascending.
    pub fn club_roster(
        graph: &GraphStore,
        club_name: &str,
        filters: &RosterFilters,
        order: RosterOrder,
        dir: SortDir,
    ) -> Vec<RosterEntry> {
        let mut slots: HashMap<PlayerIdx, usize> = HashMap::new();
        let mut entries: Vec<RosterEntry> = Vec::new();

        for (idx, tenure) in graph.tenures_by_club(club_name) {
            if filters.season_from.is_some_and(|from| tenure.start_year < from) {
                continue;
            }
            if filters.season_to.is_some_and(|to| tenure.end_year > to) {
                continue;
            }
            let slot = *slots.entry(idx).or_insert_with(|| {
                let player = graph.player_at(idx);
                entries.push(RosterEntry {
                    id: player.id.clone(),
                    name: player.name.clone(),
                    appearances: 0,
                    first_season: tenure.start_year,
                    last_season: tenure.end_year,
                });
                entries.len() - 1
            });
            let entry = &mut entries[slot];
            entry.appearances += u64::from(tenure.appearances);
            entry.first_season = entry.first_season.min(tenure.start_year);
            entry.last_season = entry.last_season.max(tenure.end_year);
        }

        entries.retain(|e| {
            let total = i64::try_from(e.appearances).unwrap_or(i64::MAX);
            filters.min_apps.map_or(true, |min| total >= min)
                && filters.max_apps.map_or(true, |max| total <= max)
        });

        let compare = comparator(order);
        entries.sort_by(|a, b| {
            let primary = match dir {
                SortDir::Asc => compare(a, b),
                SortDir::Desc => compare(b, a),
            };
            primary
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        entries
    }

    /// Every tenure of a player, ordered by start year. Ties keep load order.
    pub fn club_history(graph: &GraphStore, idx: PlayerIdx) -> Vec<TenureSummary> {
        let mut history: Vec<TenureSummary> = graph
            .tenures(idx)
            .iter()
            .map(|t| TenureSummary {
                club: graph.club_name(t.club).to_string(),
                start: t.start_year,
                end: t.end_year,
                apps: t.appearances,
            })
            .collect();
        history.sort_by_key(|t| t.start);
        history
    }
}

type Comparator = fn(&RosterEntry, &RosterEntry) -> Ordering;

fn comparator(order: RosterOrder) -> Comparator {
    match order {
        RosterOrder::Name => |a, b| a.name.cmp(&b.name),
        RosterOrder::Appearances => |a, b| a.appearances.cmp(&b.appearances),
        RosterOrder::FirstSeason => |a, b| a.first_season.cmp(&b.first_season),
        RosterOrder::LastSeason => |a, b| a.last_season.cmp(&b.last_season),
    }
}
