//! Query result types.

use rostergraph_store::Player;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A name search hit with the player's total appearances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerMatch {
    pub id: String,
    pub name: String,
    pub appearances: u64,
}

/// One spell in a player's club history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenureSummary {
    pub club: String,
    pub start: i32,
    pub end: i32,
    pub apps: u32,
}

/// A player's aggregated record at one club.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub appearances: u64,
    pub first_season: i32,
    pub last_season: i32,
}

/// Optional bounds applied by a club roster query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RosterFilters {
    /// Minimum aggregated appearances. Negative bounds are accepted as given.
    pub min_apps: Option<i64>,
    /// Maximum aggregated appearances.
    pub max_apps: Option<i64>,
    /// Earliest allowed tenure start year.
    pub season_from: Option<i32>,
    /// Latest allowed tenure end year.
    pub season_to: Option<i32>,
}

/// Sort field of a club roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RosterOrder {
    Name,
    #[default]
    Appearances,
    FirstSeason,
    LastSeason,
}

impl RosterOrder {
    /// Parse a request parameter; anything unrecognised means `Appearances`.
    pub fn from_param(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            "appearances" => Self::Appearances,
            "first_season" => Self::FirstSeason,
            "last_season" => Self::LastSeason,
            _ => Self::default(),
        }
    }
}

/// Sort direction of a club roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    /// Parse a request parameter; anything unrecognised means `Desc`.
    pub fn from_param(value: &str) -> Self {
        match value {
            "asc" => Self::Asc,
            "desc" => Self::Desc,
            _ => Self::default(),
        }
    }
}

/// Shortest teammate route between two players.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeammatePath {
    pub players: Vec<Player>,
    pub clubs: Vec<String>,
    pub length: usize,
}

/// A chordless, club-alternating chain of teammate edges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chain {
    pub players: Vec<Player>,
    pub clubs: Vec<String>,
    #[serde(rename = "totalWeight")]
    pub total_weight: f64,
}

impl Chain {
    /// Whether the chain has exactly `steps` edges and `steps + 1` players.
    pub fn has_shape(&self, steps: usize) -> bool {
        self.players.len() == steps + 1 && self.clubs.len() == steps
    }
}

/// A hidden interior player of a quiz question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSlot {
    /// Position of the hidden player in the chain, `1..steps`.
    pub position: usize,
    pub correct: Player,
    /// Correct player plus distractors, shuffled.
    pub choices: Vec<Player>,
}

/// A multiple-choice question built from one chain.
///
/// Serializes to the flat wire object `Player_0`, `Club_0_1`, `Choices_1`,
/// `Correct_1`, ..., `Club_{n-1}_{n}`, `Player_{n}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub start: Player,
    pub end: Player,
    /// Club of each edge, in chain order.
    pub clubs: Vec<String>,
    pub slots: Vec<QuestionSlot>,
}

impl Question {
    pub fn steps(&self) -> usize {
        self.clubs.len()
    }

    /// Number of keys in the flat wire object: both end players, three
    /// per hidden slot and the closing club.
    fn wire_len(&self) -> usize {
        2 + 3 * self.slots.len() + usize::from(!self.clubs.is_empty())
    }
}

impl Serialize for Question {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let steps = self.steps();
        let mut map = serializer.serialize_map(Some(self.wire_len()))?;
        map.serialize_entry("Player_0", &self.start)?;
        for slot in &self.slots {
            let i = slot.position;
            let club = self.clubs.get(i - 1).map(String::as_str).unwrap_or_default();
            map.serialize_entry(&format!("Club_{}_{}", i - 1, i), club)?;
            map.serialize_entry(&format!("Choices_{}", i), &slot.choices)?;
            map.serialize_entry(&format!("Correct_{}", i), &slot.correct)?;
        }
        if let Some(last) = self.clubs.last() {
            map.serialize_entry(&format!("Club_{}_{}", steps - 1, steps), last)?;
        }
        map.serialize_entry(&format!("Player_{}", steps), &self.end)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: &str) -> Player {
        Player {
            id: id.into(),
            name: id.to_uppercase(),
        }
    }

    #[test]
    fn test_order_params_fall_back() {
        assert_eq!(RosterOrder::from_param("name"), RosterOrder::Name);
        assert_eq!(RosterOrder::from_param("last_season"), RosterOrder::LastSeason);
        assert_eq!(RosterOrder::from_param("apps; DROP"), RosterOrder::Appearances);
        assert_eq!(SortDir::from_param("asc"), SortDir::Asc);
        assert_eq!(SortDir::from_param("ASC"), SortDir::Desc);
        assert_eq!(SortDir::from_param(""), SortDir::Desc);
    }

    #[test]
    fn test_question_wire_shape() {
        let question = Question {
            start: p("a"),
            end: p("d"),
            clubs: vec!["X".into(), "Y".into(), "X".into()],
            slots: vec![
                QuestionSlot {
                    position: 1,
                    correct: p("b"),
                    choices: vec![p("b"), p("e")],
                },
                QuestionSlot {
                    position: 2,
                    correct: p("c"),
                    choices: vec![p("f"), p("c")],
                },
            ],
        };

        let value = serde_json::to_value(&question).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 9);
        assert_eq!(question.wire_len(), obj.len());
        assert_eq!(value["Player_0"]["id"], "a");
        assert_eq!(value["Club_0_1"], "X");
        assert_eq!(value["Correct_1"]["id"], "b");
        assert_eq!(value["Choices_1"].as_array().unwrap().len(), 2);
        assert_eq!(value["Club_1_2"], "Y");
        assert_eq!(value["Correct_2"]["id"], "c");
        assert_eq!(value["Club_2_3"], "X");
        assert_eq!(value["Player_3"]["id"], "d");
    }

    #[test]
    fn test_single_step_question_has_no_choices() {
        let question = Question {
            start: p("a"),
            end: p("b"),
            clubs: vec!["X".into()],
            slots: vec![],
        };
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 3);
        assert_eq!(question.wire_len(), 3);
        assert_eq!(value["Club_0_1"], "X");
        assert_eq!(value["Player_1"]["id"], "b");
    }

    #[test]
    fn test_chain_serializes_total_weight() {
        let chain = Chain {
            players: vec![p("a"), p("b")],
            clubs: vec!["X".into()],
            total_weight: 3.0,
        };
        assert!(chain.has_shape(1));
        assert!(!chain.has_shape(2));
        let value = serde_json::to_value(&chain).unwrap();
        assert_eq!(value["totalWeight"], 3.0);
    }
}
