//! SQLite snapshot schema.

/// Tables a SQLite snapshot file must provide.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS players (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS played_for (
    player_id TEXT NOT NULL REFERENCES players(id),
    club TEXT NOT NULL,
    start_year INTEGER NOT NULL,
    end_year INTEGER NOT NULL,
    appearances INTEGER
);

CREATE TABLE IF NOT EXISTS played_with (
    player_a TEXT NOT NULL REFERENCES players(id),
    player_b TEXT NOT NULL REFERENCES players(id),
    club TEXT NOT NULL,
    weight REAL
);

CREATE INDEX IF NOT EXISTS idx_played_for_player ON played_for(player_id);
CREATE INDEX IF NOT EXISTS idx_played_for_club ON played_for(club);
"#;
