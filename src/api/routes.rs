use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{games, matches, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/games", get(games::list_games).post(games::create_game))
        .route(
            "/games/:key",
            get(games::show_game).put(games::update_game).delete(games::destroy_game),
        )
        .route("/matches", get(matches::list_matches).post(matches::create_match))
        .route("/matches/landing", get(matches::landing))
        .route(
            "/matches/:key",
            get(matches::show_match).put(matches::update_match).delete(matches::destroy_match),
        )
        .with_state(state)
}
