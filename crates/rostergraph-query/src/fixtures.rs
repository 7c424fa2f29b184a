//! Hand-built snapshots shared by the unit tests.

use rostergraph_store::{GraphSnapshot, GraphStore, Player, TeammateRecord, TenureRecord};

pub struct SnapshotBuilder {
    snapshot: GraphSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: GraphSnapshot::default(),
        }
    }

    pub fn player(mut self, id: &str, name: &str) -> Self {
        self.snapshot.players.push(Player {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub fn tenure(mut self, id: &str, club: &str, start: i32, end: i32, apps: u32) -> Self {
        self.snapshot.tenures.push(TenureRecord {
            player_id: id.into(),
            club: club.into(),
            start_year: start,
            end_year: end,
            appearances: apps,
        });
        self
    }

    pub fn teammates(mut self, a: &str, b: &str, club: &str, weight: f64) -> Self {
        self.snapshot.teammates.push(TeammateRecord {
            player_a: a.into(),
            player_b: b.into(),
            club: club.into(),
            weight,
        });
        self
    }

    pub fn build(self) -> GraphStore {
        GraphStore::build(self.snapshot).unwrap()
    }
}

/// A–B at X (3), B–C at Y (2), C–D at X (1).
pub fn line_abcd() -> SnapshotBuilder {
    SnapshotBuilder::new()
        .player("a", "Amy Archer")
        .player("b", "Ben Baxter")
        .player("c", "Cara Cole")
        .player("d", "Dan Doyle")
        .tenure("a", "X", 2000, 2004, 30)
        .tenure("b", "X", 2002, 2005, 40)
        .tenure("b", "Y", 2006, 2009, 50)
        .tenure("c", "Y", 2007, 2010, 20)
        .tenure("c", "X", 2011, 2012, 10)
        .tenure("d", "X", 2011, 2014, 60)
        .teammates("a", "b", "X", 3.0)
        .teammates("b", "c", "Y", 2.0)
        .teammates("c", "d", "X", 1.0)
}
