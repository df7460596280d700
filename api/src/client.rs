use crate::query::{PlayerSearchQuery, ScheduleQuery, StatCategory, StatScope, build_stats_hydrate};
use crate::wire::{
    PeopleResponse, RawGame, RawLinescore, RawLinescoreTotals, RawPlayer, RawPosition,
    RawStatGroup, RawStatSplit, RawTeam, RawTeamSide, ScheduleResponse,
};
use crate::{
    Game, GameState, LineScore, LineTotals, Player, Position, StatGroup, StatSplit, Team, TeamSide,
};
use chrono::{DateTime, Local, NaiveDate};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const MLB_STATS_API: &str = "https://statsapi.mlb.com/api/v1";

/// Server error bodies are kept, but bounded — they end up in UI error text.
const ERROR_BODY_LIMIT: usize = 200;

/// MLB StatsAPI client. One HTTP attempt per operation, no retries.
#[derive(Debug, Clone)]
pub struct MlbApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for MlbApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("mlbscope/0.1 (mlb stats viewer)")
                .build()
                .unwrap_or_default(),
            base_url: MLB_STATS_API.to_owned(),
            timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// Server reachable but the request was rejected or failed; carries the
    /// numeric status and the (truncated) response body.
    Http { status: u16, message: String, url: String },
    Network(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message, url } => {
                write!(f, "API error {status} for {url}: {message}")
            }
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http { .. } => None,
            ApiError::Network(e, _) | ApiError::Parsing(e, _) => Some(e),
        }
    }
}

impl MlbApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different base path (tests, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Fetch the schedule for one calendar date (`YYYY-MM-DD`).
    ///
    /// A response with no date buckets means no games that day and maps to an
    /// empty list, not an error.
    pub async fn games_by_date(&self, date: &str) -> ApiResult<Vec<Game>> {
        let url = format!("{}/schedule", self.base_url);
        let raw: ScheduleResponse = self.get(&url, &ScheduleQuery::for_date(date)).await?;
        Ok(map_schedule(raw))
    }

    /// Search active players by name, preserving API order (relevance-ranked).
    pub async fn search_players(&self, name: &str) -> ApiResult<Vec<Player>> {
        let url = format!("{}/people/search", self.base_url);
        let raw: PeopleResponse = self.get(&url, &PlayerSearchQuery::by_name(name)).await?;
        Ok(map_people(raw))
    }

    /// Fetch one player with the requested stat group hydrated in. Returns
    /// `None` when the API knows no such player.
    pub async fn player_stats(
        &self,
        player_id: i64,
        category: StatCategory,
        scope: StatScope,
        season: Option<&str>,
    ) -> ApiResult<Option<Player>> {
        let url = format!("{}/people/{player_id}", self.base_url);
        let hydrate = build_stats_hydrate(category, scope, season);
        let raw: PeopleResponse = self.get(&url, &[("hydrate", hydrate.as_str())]).await?;
        Ok(map_people(raw).into_iter().next())
    }

    async fn get<T, Q>(&self, url: &str, query: &Q) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: clip_error_body(&message),
                url: url.to_owned(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

fn clip_error_body(body: &str) -> String {
    body.trim().chars().take(ERROR_BODY_LIMIT).collect()
}

// ---------------------------------------------------------------------------
// Mapping: StatsAPI wire types → clean domain types
// ---------------------------------------------------------------------------

/// First date bucket's games, in wire order. Absence of any bucket is a
/// quiet day, not a malformed response.
fn map_schedule(raw: ScheduleResponse) -> Vec<Game> {
    raw.dates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|bucket| bucket.games)
        .unwrap_or_default()
        .iter()
        .map(map_game)
        .collect()
}

fn map_people(raw: PeopleResponse) -> Vec<Player> {
    raw.people
        .unwrap_or_default()
        .iter()
        .map(map_player)
        .collect()
}

fn map_game(g: &RawGame) -> Game {
    let sides = g.teams.as_ref();
    Game {
        game_pk: g.game_pk.unwrap_or_default(),
        game_date: g.game_date.clone(),
        status: GameState {
            detailed_state: g
                .status
                .as_ref()
                .and_then(|s| s.detailed_state.clone())
                .unwrap_or_default(),
            abstract_state: g
                .status
                .as_ref()
                .and_then(|s| s.abstract_state.clone())
                .unwrap_or_default(),
        },
        home: sides
            .and_then(|t| t.home.as_ref())
            .map(map_team_side)
            .unwrap_or_default(),
        away: sides
            .and_then(|t| t.away.as_ref())
            .map(map_team_side)
            .unwrap_or_default(),
        linescore: g.linescore.as_ref().map(map_linescore),
    }
}

fn map_team_side(side: &RawTeamSide) -> TeamSide {
    TeamSide {
        team: side.team.as_ref().map(map_team).unwrap_or_default(),
        score: side.score,
    }
}

fn map_team(t: &RawTeam) -> Team {
    Team {
        id: t.id.unwrap_or_default(),
        name: t.name.clone().unwrap_or_default(),
        abbreviation: t.abbreviation.clone(),
    }
}

fn map_linescore(ls: &RawLinescore) -> LineScore {
    let totals = ls.teams.as_ref();
    LineScore {
        current_inning: ls.current_inning,
        current_inning_ordinal: ls.current_inning_ordinal.clone(),
        inning_state: ls.inning_state.clone(),
        home: totals.and_then(|t| t.home.as_ref()).map(map_line_totals),
        away: totals.and_then(|t| t.away.as_ref()).map(map_line_totals),
    }
}

fn map_line_totals(t: &RawLinescoreTotals) -> LineTotals {
    LineTotals {
        runs: t.runs,
        hits: t.hits,
        errors: t.errors,
    }
}

fn map_player(p: &RawPlayer) -> Player {
    Player {
        id: p.id.unwrap_or_default(),
        full_name: p.full_name.clone().unwrap_or_default(),
        current_team: p.current_team.as_ref().map(map_team),
        primary_position: p.primary_position.as_ref().map(map_position),
        stats: p.stats.iter().flatten().map(map_stat_group).collect(),
    }
}

fn map_position(pos: &RawPosition) -> Position {
    Position {
        code: pos.code.clone().unwrap_or_default(),
        name: pos.name.clone().unwrap_or_default(),
        kind: pos.kind.clone().unwrap_or_default(),
        abbreviation: pos.abbreviation.clone().unwrap_or_default(),
    }
}

fn map_stat_group(g: &RawStatGroup) -> StatGroup {
    StatGroup {
        group: g
            .group
            .as_ref()
            .and_then(|d| d.display_name.clone())
            .unwrap_or_default(),
        scope: g
            .scope
            .as_ref()
            .and_then(|d| d.display_name.clone())
            .unwrap_or_default(),
        splits: g.splits.iter().flatten().map(map_split).collect(),
    }
}

fn map_split(s: &RawStatSplit) -> StatSplit {
    StatSplit {
        season: s.season.clone(),
        team: s.team.as_ref().map(map_team),
        position: s.position.as_ref().map(map_position),
        stat: s.stat.clone().unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Display helpers — pure functions over the domain model
// ---------------------------------------------------------------------------

/// Today's date in the local timezone, `YYYY-MM-DD` (the schedule format).
pub fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Convert a wire UTC timestamp to local wall-clock `HH:mm`. Absent or empty
/// input reads "Time Unknown"; a timestamp that fails to parse reads
/// "Time Error" rather than propagating.
pub fn format_game_time(game_date: Option<&str>) -> String {
    let Some(ts) = game_date.filter(|s| !s.is_empty()) else {
        return "Time Unknown".to_owned();
    };

    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.with_timezone(&Local).format("%H:%M").to_string(),
        Err(_) => "Time Error".to_owned(),
    }
}

/// One-line status label for a game.
///
/// Finished games show the inning count only when it went past nine. Live
/// games show half-inning and ordinal with blank-safe fallbacks. Upcoming
/// games show the local start time. Everything else falls through the
/// substring checks (in this order) to the raw detailed state.
pub fn format_game_status(game: &Game) -> String {
    let linescore = game.linescore.as_ref();
    match game.status.detailed_state.as_str() {
        "Final" | "Game Over" => match linescore.and_then(|ls| ls.current_inning) {
            Some(inning) if inning != 9 => format!("Final ({inning})"),
            _ => "Final".to_owned(),
        },
        "In Progress" => {
            let state = linescore
                .and_then(|ls| ls.inning_state.as_deref())
                .unwrap_or("");
            let ordinal = linescore
                .and_then(|ls| ls.current_inning_ordinal.as_deref())
                .unwrap_or("?");
            format!("{state} {ordinal}")
        }
        "Scheduled" | "Pre-Game" | "Warmup" => {
            format!("Scheduled {}", format_game_time(game.game_date.as_deref()))
        }
        other if other.contains("Postponed") => "Postponed".to_owned(),
        other if other.contains("Suspended") => "Suspended".to_owned(),
        other if other.contains("Cancel") => "Cancelled".to_owned(),
        other => other.to_owned(),
    }
}

/// `2024-07-04` → `Jul 04, 2024` for date headers. Input that does not parse
/// is echoed back unchanged.
pub fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%b %d, %Y").to_string(),
        Err(_) => date.to_owned(),
    }
}
