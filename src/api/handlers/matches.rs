use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{path_id, with_connection, AppState};
use crate::api::models::{
    wrapped_document, LandingResponse, MatchListResponse, MatchResponse, MatchUpdate,
    RealTimeResponse, View, ViewParams,
};
use crate::errors::{QuizResult, ValidationError};
use crate::services::matches;

pub async fn list_matches(State(state): State<Arc<AppState>>) -> QuizResult<Response> {
    let matches = with_connection(&state, |conn| matches::list_matches(conn)).await?;
    Ok(Json(MatchListResponse { matches }).into_response())
}

pub async fn landing(State(state): State<Arc<AppState>>) -> QuizResult<Response> {
    let matches = with_connection(&state, |conn| matches::landing(conn)).await?;
    Ok(Json(LandingResponse { matches }).into_response())
}

pub async fn show_match(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Query(params): Query<ViewParams>,
) -> QuizResult<Response> {
    let view = params.view();
    let found = with_connection(&state, move |conn| matches::find_match(conn, &key)).await;

    match view {
        View::Ranking => {
            let found = found.map_err(|e| e.or_unknown(ValidationError::UnknownMatch))?;
            Ok(Json(found.data.result).into_response())
        }
        View::RealTime => Ok(Json(RealTimeResponse { is_real_time: found?.data.is_real_time }).into_response()),
        View::Document => Ok(Json(MatchResponse { match_: found? }).into_response()),
    }
}

pub async fn create_match(State(state): State<Arc<AppState>>, body: Bytes) -> QuizResult<Response> {
    let payload = wrapped_document(&body, "match");
    let created = with_connection(&state, move |conn| matches::create_match(conn, &payload)).await?;
    Ok((StatusCode::CREATED, Json(MatchResponse { match_: created })).into_response())
}

/// One route, three intents: a document patch, a score, or the state flag.
pub async fn update_match(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> QuizResult<Response> {
    let request = MatchUpdate::parse(&body)?;

    let result = with_connection(&state, move |conn| {
        let id = path_id(&raw_id)?;
        match request {
            MatchUpdate::Document(patch) => matches::update_match(conn, id, &patch)
                .map(|updated| Json(MatchResponse { match_: updated }).into_response()),
            MatchUpdate::Score(submission) => {
                matches::submit_score(conn, id, &submission).map(|board| Json(board).into_response())
            }
            MatchUpdate::Started(started) => matches::set_started(conn, id, &started)
                .map(|updated| Json(MatchResponse { match_: updated }).into_response()),
        }
    })
    .await;

    result.map_err(|e| e.or_unknown(ValidationError::UnknownMatch))
}

pub async fn destroy_match(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> QuizResult<Response> {
    with_connection(&state, move |conn| matches::delete_match(conn, path_id(&raw_id)?)).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
