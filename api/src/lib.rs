pub mod client;
pub mod query;
pub mod wire;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the StatsAPI wire format
// ---------------------------------------------------------------------------

/// A single scheduled or played game. Replaced wholesale on every refresh,
/// never patched field-by-field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Game {
    pub game_pk: i64,
    /// Scheduled first pitch, ISO-8601 UTC exactly as sent on the wire. Kept
    /// as text so a malformed timestamp surfaces through `format_game_time`
    /// instead of failing normalization.
    pub game_date: Option<String>,
    pub status: GameState,
    pub home: TeamSide,
    pub away: TeamSide,
    pub linescore: Option<LineScore>,
}

impl Game {
    pub fn is_live(&self) -> bool {
        self.status.abstract_state == "Live"
    }

    pub fn is_final(&self) -> bool {
        self.status.abstract_state == "Final"
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    /// Fine-grained label ("In Progress", "Warmup", "Postponed: Rain", ...).
    pub detailed_state: String,
    /// Coarse bucket ("Preview", "Live", "Final").
    pub abstract_state: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSide {
    pub team: Team,
    /// Absent until the source records a first plate appearance.
    pub score: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub abbreviation: Option<String>,
}

/// Live inning situation. Every field is independently optional — a partial
/// linescore is normal for games that have not started.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineScore {
    pub current_inning: Option<u32>,
    /// "1st", "7th", ...
    pub current_inning_ordinal: Option<String>,
    /// "Top" / "Middle" / "Bottom" / "End".
    pub inning_state: Option<String>,
    pub home: Option<LineTotals>,
    pub away: Option<LineTotals>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineTotals {
    pub runs: Option<u32>,
    pub hits: Option<u32>,
    pub errors: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Player {
    pub id: i64,
    pub full_name: String,
    pub current_team: Option<Team>,
    pub primary_position: Option<Position>,
    /// Stat groups hydrated into a detail lookup. Empty for search results.
    pub stats: Vec<StatGroup>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Position {
    pub code: String,
    pub name: String,
    pub kind: String,
    pub abbreviation: String,
}

/// One stat category × scope pairing ("Hitting" × "Season"), holding its
/// splits in wire order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatGroup {
    pub group: String,
    pub scope: String,
    pub splits: Vec<StatSplit>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatSplit {
    pub season: Option<String>,
    pub team: Option<Team>,
    pub position: Option<Position>,
    pub stat: StatLine,
}

/// Flat bag of stat fields shared by hitting, pitching and fielding. The
/// StatsAPI sends one unified shape; only the fields for the requested
/// category are populated, the rest stay `None` and are simply ignored.
/// Wire-identical, so it deserializes directly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    // Common
    pub games_played: Option<u32>,

    // Hitting
    pub at_bats: Option<u32>,
    pub runs: Option<u32>,
    pub hits: Option<u32>,
    pub doubles: Option<u32>,
    pub triples: Option<u32>,
    pub home_runs: Option<u32>,
    pub rbi: Option<u32>,
    pub base_on_balls: Option<u32>,
    pub strike_outs: Option<u32>,
    pub stolen_bases: Option<u32>,
    pub caught_stealing: Option<u32>,
    pub avg: Option<String>,
    pub obp: Option<String>,
    pub slg: Option<String>,
    pub ops: Option<String>,

    // Pitching
    pub games_pitched: Option<u32>,
    pub games_started: Option<u32>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub era: Option<String>,
    pub saves: Option<u32>,
    pub innings_pitched: Option<String>,
    pub earned_runs: Option<u32>,
    pub whip: Option<String>,

    // Fielding
    pub innings: Option<String>,
    pub chances: Option<u32>,
    pub assists: Option<u32>,
    pub put_outs: Option<u32>,
    pub errors: Option<u32>,
    pub double_plays: Option<u32>,
    pub fielding: Option<String>,
}
