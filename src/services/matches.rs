use log::{debug, info};
use rusqlite::Connection;
use serde_json::Value;

use super::{merged_document, parse_id};
use crate::database::{self, matches};
use crate::domain::models::{Match, MatchId, MatchSummary, RankingEntry};
use crate::domain::validation::{validate_match, Payload};
use crate::errors::{QuizError, QuizResult, ValidationError};
use crate::ranking;

pub fn list_matches(conn: &Connection) -> QuizResult<Vec<Match>> {
    Ok(matches::list_all(conn)?)
}

pub fn landing(conn: &Connection) -> QuizResult<Vec<MatchSummary>> {
    let open = matches::list_landing(conn)?;
    Ok(open.iter().map(MatchSummary::from).collect())
}

/// Looks a match up by id, or by url when the key is not a known id.
pub fn find_match(conn: &Connection, key: &str) -> QuizResult<Match> {
    if let Some(id) = parse_id(key) {
        if let Some(found) = matches::find_by_id(conn, id)? {
            return Ok(found);
        }
    }
    matches::find_by_url(conn, key)?.ok_or(QuizError::NotFound)
}

pub fn create_match(conn: &mut Connection, payload: &Payload) -> QuizResult<Match> {
    let tx = database::begin_write(conn)?;
    let data = validate_match(payload, &*tx, None).inspect_err(|e| debug!("Rejected match: {e}"))?;
    let created = matches::insert_match(&tx, &data)?;
    tx.commit()?;

    info!("Created match {} at '{}'", created.id, created.data.url);
    Ok(created)
}

pub fn update_match(conn: &mut Connection, id: MatchId, patch: &Payload) -> QuizResult<Match> {
    let tx = database::begin_write(conn)?;
    let current = matches::find_by_id(&tx, id)?.ok_or(QuizError::NotFound)?;
    let document = merged_document(&current.data, patch)?;
    let data = validate_match(&document, &*tx, Some(id))
        .inspect_err(|e| debug!("Rejected update of match {id}: {e}"))?;
    matches::update_match(&tx, id, &data)?;
    tx.commit()?;

    info!("Updated match {id}");
    Ok(Match { id, data })
}

/// Flips the session state without re-running the creation rules.
pub fn set_started(conn: &mut Connection, id: MatchId, started: &Value) -> QuizResult<Match> {
    let started = started.as_bool().ok_or(ValidationError::MissingState)?;

    let tx = database::begin_write(conn)?;
    let mut current = matches::find_by_id(&tx, id)?.ok_or(QuizError::NotFound)?;
    current.data.started = started;
    matches::update_match(&tx, id, &current.data)?;
    tx.commit()?;

    info!("Match {id} started = {started}");
    Ok(current)
}

pub fn submit_score(conn: &mut Connection, id: MatchId, submission: &Payload) -> QuizResult<Vec<RankingEntry>> {
    ranking::submit::<Match>(conn, id, submission)
}

pub fn delete_match(conn: &mut Connection, id: MatchId) -> QuizResult<()> {
    let tx = database::begin_write(conn)?;
    if !matches::delete_by_id(&tx, id)? {
        return Err(QuizError::NotFound);
    }
    tx.commit()?;

    info!("Deleted match {id}");
    Ok(())
}
