use log::{debug, error};
use mlb_api::Game;
use mlb_api::client::{MlbApi, current_date};
use tokio::sync::watch;

/// Complete observable state of the games-by-date view at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamesViewState {
    pub is_loading: bool,
    pub games: Vec<Game>,
    pub error: Option<String>,
    /// The date the view is showing, `YYYY-MM-DD`. Empty until the first load
    /// is issued.
    pub selected_date: String,
}

/// Drives the games-by-date view. Construction immediately kicks off a load
/// of today's schedule, so `new` must run inside a Tokio runtime.
///
/// Overlapping loads are not sequenced or cancelled: whichever completes last
/// determines the published snapshot, regardless of issue order.
#[derive(Debug, Clone)]
pub struct GamesController {
    api: MlbApi,
    state: watch::Sender<GamesViewState>,
}

impl GamesController {
    pub fn new(api: MlbApi) -> Self {
        let (state, _) = watch::channel(GamesViewState::default());
        let controller = Self { api, state };

        let startup = controller.clone();
        tokio::spawn(async move { startup.load_todays_games().await });

        controller
    }

    /// Watch the snapshot stream. Receivers only ever observe fully-formed
    /// values; intermediate snapshots may be skipped under load.
    pub fn subscribe(&self) -> watch::Receiver<GamesViewState> {
        self.state.subscribe()
    }

    /// One-shot read of the latest published snapshot.
    pub fn snapshot(&self) -> GamesViewState {
        self.state.borrow().clone()
    }

    pub async fn load_todays_games(&self) {
        self.load_games_by_date(&current_date()).await;
    }

    /// Load the schedule for `date` (`YYYY-MM-DD`). On failure the previous
    /// games are discarded so an error message and stale data are never shown
    /// together.
    pub async fn load_games_by_date(&self, date: &str) {
        debug!("loading games for {date}");
        let cur = self.snapshot();
        self.state.send_replace(GamesViewState {
            is_loading: true,
            error: None,
            selected_date: date.to_owned(),
            games: cur.games,
        });

        match self.api.games_by_date(date).await {
            Ok(games) => {
                debug!("loaded {} games for {date}", games.len());
                let cur = self.snapshot();
                self.state.send_replace(GamesViewState {
                    is_loading: false,
                    games,
                    error: None,
                    ..cur
                });
            }
            Err(err) => {
                error!("schedule load for {date} failed: {err}");
                let cur = self.snapshot();
                self.state.send_replace(GamesViewState {
                    is_loading: false,
                    games: Vec::new(),
                    error: Some(err.to_string()),
                    ..cur
                });
            }
        }
    }

    /// Clear the error field only; games and date are untouched.
    pub fn clear_error(&self) {
        let cur = self.snapshot();
        self.state.send_replace(GamesViewState { error: None, ..cur });
    }
}
