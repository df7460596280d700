use chrono::{Datelike, Local};
use log::{debug, error};
use mlb_api::client::MlbApi;
use mlb_api::query::{StatCategory, StatScope};
use mlb_api::{Player, StatSplit};
use tokio::sync::watch;

/// Complete observable state of the player search-and-stats view.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerViewState {
    pub is_searching: bool,
    pub search_results: Vec<Player>,
    pub selected_player: Option<Player>,
    pub is_loading_stats: bool,
    pub player_stats: Vec<StatSplit>,
    pub stat_category: StatCategory,
    pub stat_scope: StatScope,
    /// Season filter, applied only while `stat_scope` is `Season`.
    pub season: String,
    pub error: Option<String>,
    pub search_query: String,
}

impl Default for PlayerViewState {
    fn default() -> Self {
        Self {
            is_searching: false,
            search_results: Vec::new(),
            selected_player: None,
            is_loading_stats: false,
            player_stats: Vec::new(),
            stat_category: StatCategory::default(),
            stat_scope: StatScope::default(),
            season: current_season(),
            error: None,
            search_query: String::new(),
        }
    }
}

fn current_season() -> String {
    Local::now().year().to_string()
}

/// Drives the search → select → stats view. The three stages share one
/// snapshot; like [`GamesController`](crate::GamesController), overlapping
/// requests are not sequenced — last to complete wins.
#[derive(Debug, Clone)]
pub struct PlayerController {
    api: MlbApi,
    state: watch::Sender<PlayerViewState>,
}

impl PlayerController {
    pub fn new(api: MlbApi) -> Self {
        let (state, _) = watch::channel(PlayerViewState::default());
        Self { api, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<PlayerViewState> {
        self.state.subscribe()
    }

    /// One-shot read of the latest published snapshot.
    pub fn snapshot(&self) -> PlayerViewState {
        self.state.borrow().clone()
    }

    /// Search active players by name. A blank query is not a search and not
    /// an error: it clears the result list without touching the network.
    pub async fn search_players(&self, query: &str) {
        if query.trim().is_empty() {
            let cur = self.snapshot();
            self.state.send_replace(PlayerViewState {
                search_results: Vec::new(),
                search_query: query.to_owned(),
                ..cur
            });
            return;
        }

        debug!("searching players for {query:?}");
        let cur = self.snapshot();
        self.state.send_replace(PlayerViewState {
            is_searching: true,
            error: None,
            search_query: query.to_owned(),
            ..cur
        });

        match self.api.search_players(query).await {
            Ok(players) => {
                let cur = self.snapshot();
                self.state.send_replace(PlayerViewState {
                    is_searching: false,
                    search_results: players,
                    error: None,
                    ..cur
                });
            }
            Err(err) => {
                error!("player search for {query:?} failed: {err}");
                let cur = self.snapshot();
                self.state.send_replace(PlayerViewState {
                    is_searching: false,
                    search_results: Vec::new(),
                    error: Some(err.to_string()),
                    ..cur
                });
            }
        }
    }

    /// Select a player and load their stats. The search-result list is
    /// dropped and stays empty until `clear_selected_player`.
    pub async fn select_player(&self, player: Player) {
        let cur = self.snapshot();
        self.state.send_replace(PlayerViewState {
            selected_player: Some(player),
            search_results: Vec::new(),
            ..cur
        });
        self.load_player_stats().await;
    }

    /// Change category / scope / season, then reload stats for the current
    /// selection. A missing season keeps the one already in the snapshot.
    pub async fn update_stat_parameters(
        &self,
        category: StatCategory,
        scope: StatScope,
        season: Option<String>,
    ) {
        let cur = self.snapshot();
        let season = season.unwrap_or_else(|| cur.season.clone());
        self.state.send_replace(PlayerViewState {
            stat_category: category,
            stat_scope: scope,
            season,
            ..cur
        });
        self.load_player_stats().await;
    }

    async fn load_player_stats(&self) {
        let cur = self.snapshot();
        let Some(player) = cur.selected_player.clone() else {
            return;
        };
        let category = cur.stat_category;
        let scope = cur.stat_scope;
        let season = (scope == StatScope::Season).then(|| cur.season.clone());

        debug!(
            "loading {category}/{scope} stats for {} ({})",
            player.full_name, player.id
        );
        self.state.send_replace(PlayerViewState {
            is_loading_stats: true,
            error: None,
            ..cur
        });

        match self
            .api
            .player_stats(player.id, category, scope, season.as_deref())
            .await
        {
            Ok(detail) => {
                let splits = detail
                    .and_then(|p| p.stats.into_iter().next())
                    .map(|group| group.splits)
                    .unwrap_or_default();
                let cur = self.snapshot();
                self.state.send_replace(PlayerViewState {
                    is_loading_stats: false,
                    player_stats: splits,
                    error: None,
                    ..cur
                });
            }
            Err(err) => {
                error!("stats load for {} failed: {err}", player.id);
                let cur = self.snapshot();
                self.state.send_replace(PlayerViewState {
                    is_loading_stats: false,
                    player_stats: Vec::new(),
                    error: Some(err.to_string()),
                    ..cur
                });
            }
        }
    }

    /// Drop the selection, its stats and the query text. Whatever search
    /// results were showing stay as they are.
    pub fn clear_selected_player(&self) {
        let cur = self.snapshot();
        self.state.send_replace(PlayerViewState {
            selected_player: None,
            player_stats: Vec::new(),
            search_query: String::new(),
            ..cur
        });
    }

    /// Clear the error field only, independent of every other field.
    pub fn clear_error(&self) {
        let cur = self.snapshot();
        self.state.send_replace(PlayerViewState { error: None, ..cur });
    }
}
