//! Request-parameter construction for the StatsAPI endpoints, including the
//! composite `stats(...)` hydrate descriptor.

use serde::Serialize;
use std::fmt;

/// StatsAPI sport id for MLB.
pub const SPORT_ID_MLB: u32 = 1;

/// Schedule hydration: pull team records and the live linescore into the
/// schedule response instead of fetching them per game.
pub const SCHEDULE_HYDRATE: &str = "team,linescore";

/// Parameters for a one-day schedule lookup. `date` must be `YYYY-MM-DD`;
/// calendar validity is not checked here — a bad date goes out as-is and
/// comes back as an API error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleQuery {
    #[serde(rename = "sportId")]
    pub sport_id: u32,
    pub date: String,
    pub hydrate: &'static str,
}

impl ScheduleQuery {
    pub fn for_date(date: impl Into<String>) -> Self {
        Self {
            sport_id: SPORT_ID_MLB,
            date: date.into(),
            hydrate: SCHEDULE_HYDRATE,
        }
    }
}

/// Parameters for a name search over active players. Blank names are the
/// caller's responsibility; they pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSearchQuery {
    pub names: String,
    pub active: bool,
}

impl PlayerSearchQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            names: name.into(),
            active: true,
        }
    }
}

/// Stat category requested from the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatCategory {
    #[default]
    Hitting,
    Pitching,
    Fielding,
}

impl StatCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            StatCategory::Hitting => "hitting",
            StatCategory::Pitching => "pitching",
            StatCategory::Fielding => "fielding",
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stat scope requested from the API. Only `Season` combines with a season
/// filter; the other scopes cover a fixed range by definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatScope {
    #[default]
    Season,
    Career,
    YearByYear,
}

impl StatScope {
    pub fn as_str(self) -> &'static str {
        match self {
            StatScope::Season => "season",
            StatScope::Career => "career",
            StatScope::YearByYear => "yearByYear",
        }
    }
}

impl fmt::Display for StatScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the composite hydrate descriptor for a player-detail lookup:
/// `stats(group=[hitting],type=[season],season=2024)`.
///
/// The season segment is appended only for the `season` scope with a season
/// value supplied. A season passed with any other scope is dropped — the
/// upstream API ignores it there, and this builder keeps that behavior
/// rather than emitting a dead parameter.
pub fn build_stats_hydrate(
    category: StatCategory,
    scope: StatScope,
    season: Option<&str>,
) -> String {
    let mut parts = vec![
        format!("group=[{}]", category.as_str()),
        format!("type=[{}]", scope.as_str()),
    ];

    if scope == StatScope::Season {
        if let Some(season) = season {
            parts.push(format!("season={season}"));
        }
    }

    format!("stats({})", parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrate_season_scope_appends_season_last() {
        let hydrate = build_stats_hydrate(StatCategory::Hitting, StatScope::Season, Some("2024"));
        assert_eq!(hydrate, "stats(group=[hitting],type=[season],season=2024)");
        assert!(hydrate.ends_with("season=2024)"));
    }

    #[test]
    fn hydrate_season_scope_without_value_has_no_season_segment() {
        let hydrate = build_stats_hydrate(StatCategory::Hitting, StatScope::Season, None);
        assert_eq!(hydrate, "stats(group=[hitting],type=[season])");
    }

    #[test]
    fn hydrate_non_season_scopes_drop_a_supplied_season() {
        for scope in [StatScope::Career, StatScope::YearByYear] {
            let hydrate = build_stats_hydrate(StatCategory::Pitching, scope, Some("2024"));
            assert!(
                !hydrate.contains("season="),
                "{scope} must not carry a season filter: {hydrate}"
            );
        }
    }

    #[test]
    fn hydrate_contains_exactly_one_season_segment() {
        let hydrate = build_stats_hydrate(StatCategory::Fielding, StatScope::Season, Some("2023"));
        assert_eq!(hydrate.matches("season=").count(), 1);
    }

    #[test]
    fn scope_and_category_wire_values() {
        assert_eq!(StatCategory::Hitting.as_str(), "hitting");
        assert_eq!(StatCategory::Pitching.as_str(), "pitching");
        assert_eq!(StatCategory::Fielding.as_str(), "fielding");
        assert_eq!(StatScope::Season.as_str(), "season");
        assert_eq!(StatScope::Career.as_str(), "career");
        assert_eq!(StatScope::YearByYear.as_str(), "yearByYear");
    }

    #[test]
    fn schedule_query_serializes_wire_keys() {
        let value = serde_json::to_value(ScheduleQuery::for_date("2024-07-04")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "sportId": 1,
                "date": "2024-07-04",
                "hydrate": "team,linescore",
            })
        );
    }

    #[test]
    fn search_query_targets_active_players() {
        let query = PlayerSearchQuery::by_name("Ohtani");
        assert_eq!(query.names, "Ohtani");
        assert!(query.active);
    }
}
