use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{path_id, with_connection, AppState};
use crate::api::models::{
    wrapped_document, GameListResponse, GameResponse, GameUpdate, View, ViewParams,
};
use crate::errors::{QuizResult, ValidationError};
use crate::services::games;

pub async fn list_games(State(state): State<Arc<AppState>>) -> QuizResult<Response> {
    let games = with_connection(&state, |conn| games::list_games(conn)).await?;
    Ok(Json(GameListResponse { games }).into_response())
}

pub async fn show_game(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Query(params): Query<ViewParams>,
) -> QuizResult<Response> {
    let view = params.view();
    let found = with_connection(&state, move |conn| games::find_game(conn, &key)).await;

    match view {
        View::Ranking => {
            let game = found.map_err(|e| e.or_unknown(ValidationError::UnknownGame))?;
            Ok(Json(game.data.ranking).into_response())
        }
        _ => Ok(Json(GameResponse { game: found? }).into_response()),
    }
}

pub async fn create_game(State(state): State<Arc<AppState>>, body: Bytes) -> QuizResult<Response> {
    let payload = wrapped_document(&body, "game");
    let game = with_connection(&state, move |conn| games::create_game(conn, &payload)).await?;
    Ok((StatusCode::CREATED, Json(GameResponse { game })).into_response())
}

pub async fn update_game(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> QuizResult<Response> {
    let request = GameUpdate::parse(&body)?;

    let result = with_connection(&state, move |conn| {
        let id = path_id(&raw_id)?;
        match request {
            GameUpdate::Document(patch) => {
                games::update_game(conn, id, &patch).map(|game| Json(GameResponse { game }).into_response())
            }
            GameUpdate::Score(submission) => {
                games::submit_score(conn, id, &submission).map(|board| Json(board).into_response())
            }
        }
    })
    .await;

    result.map_err(|e| e.or_unknown(ValidationError::UnknownGame))
}

pub async fn destroy_game(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> QuizResult<Response> {
    with_connection(&state, move |conn| games::delete_game(conn, path_id(&raw_id)?)).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
