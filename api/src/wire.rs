/// MLB StatsAPI raw wire types — serde shapes for deserializing responses.
/// These map to our clean domain types via the mapping section in client.rs.
use crate::StatLine;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Schedule  (/schedule?sportId=1&date=...&hydrate=team,linescore)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleResponse {
    pub dates: Option<Vec<DateGames>>,
}

/// One calendar date's bucket of games. A schedule query for a single date
/// carries at most one of these.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct DateGames {
    pub date: Option<String>,
    pub games: Option<Vec<RawGame>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawGame {
    #[serde(rename = "gamePk")]
    pub game_pk: Option<i64>,
    #[serde(rename = "gameDate")]
    pub game_date: Option<String>, // ISO 8601, UTC
    pub status: Option<RawGameStatus>,
    pub teams: Option<RawGameTeams>,
    pub linescore: Option<RawLinescore>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawGameStatus {
    #[serde(rename = "detailedState")]
    pub detailed_state: Option<String>,
    #[serde(rename = "abstractGameState")]
    pub abstract_state: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawGameTeams {
    pub away: Option<RawTeamSide>,
    pub home: Option<RawTeamSide>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawTeamSide {
    pub team: Option<RawTeam>,
    pub score: Option<i64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawTeam {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawLinescore {
    #[serde(rename = "currentInning")]
    pub current_inning: Option<u32>,
    #[serde(rename = "currentInningOrdinal")]
    pub current_inning_ordinal: Option<String>,
    #[serde(rename = "inningState")]
    pub inning_state: Option<String>,
    pub teams: Option<RawLinescoreTeams>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawLinescoreTeams {
    pub home: Option<RawLinescoreTotals>,
    pub away: Option<RawLinescoreTotals>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawLinescoreTotals {
    pub runs: Option<u32>,
    pub hits: Option<u32>,
    pub errors: Option<u32>,
}

// ---------------------------------------------------------------------------
// People  (/people/search, /people/{id}?hydrate=stats(...))
// ---------------------------------------------------------------------------

/// Shared by player search and player detail; detail responses carry a
/// single-element `people` list.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PeopleResponse {
    pub people: Option<Vec<RawPlayer>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawPlayer {
    pub id: Option<i64>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(rename = "currentTeam")]
    pub current_team: Option<RawTeam>,
    #[serde(rename = "primaryPosition")]
    pub primary_position: Option<RawPosition>,
    pub stats: Option<Vec<RawStatGroup>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawPosition {
    pub code: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawStatGroup {
    /// Stat scope ("Season", "Career", ...). The wire calls this "type".
    #[serde(rename = "type")]
    pub scope: Option<RawDisplayName>,
    /// Stat category ("Hitting", "Pitching", "Fielding").
    pub group: Option<RawDisplayName>,
    pub splits: Option<Vec<RawStatSplit>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawDisplayName {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawStatSplit {
    pub season: Option<String>,
    pub team: Option<RawTeam>,
    pub position: Option<RawPosition>,
    pub stat: Option<StatLine>,
}
