//! Client-side data layer for MLB StatsAPI front ends.
//!
//! Each controller owns one immutable view-state snapshot published through a
//! `tokio::sync::watch` channel. Every transition replaces the snapshot
//! wholesale, so observers on any thread always read a fully-formed value —
//! there is no field-level mutation to tear.

pub mod state;

pub use mlb_api;
pub use state::games::{GamesController, GamesViewState};
pub use state::player::{PlayerController, PlayerViewState};
