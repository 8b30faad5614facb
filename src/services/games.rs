use log::{debug, info};
use rusqlite::Connection;

use super::{merged_document, parse_id};
use crate::database::{self, games, matches};
use crate::domain::models::{Game, GameId, RankingEntry};
use crate::domain::validation::{validate_game, Payload};
use crate::errors::{QuizError, QuizResult};
use crate::ranking;

pub fn list_games(conn: &Connection) -> QuizResult<Vec<Game>> {
    Ok(games::list_all(conn)?)
}

/// Looks a game up by id, or by name when the key is not a known id.
pub fn find_game(conn: &Connection, key: &str) -> QuizResult<Game> {
    if let Some(id) = parse_id(key) {
        if let Some(game) = games::find_by_id(conn, id)? {
            return Ok(game);
        }
    }
    games::find_by_name(conn, key)?.ok_or(QuizError::NotFound)
}

pub fn create_game(conn: &mut Connection, payload: &Payload) -> QuizResult<Game> {
    let tx = database::begin_write(conn)?;
    let data = validate_game(payload, &*tx, None).inspect_err(|e| debug!("Rejected game: {e}"))?;
    let game = games::insert_game(&tx, &data)?;
    tx.commit()?;

    info!("Created game {} '{}'", game.id, game.data.name);
    Ok(game)
}

pub fn update_game(conn: &mut Connection, id: GameId, patch: &Payload) -> QuizResult<Game> {
    let tx = database::begin_write(conn)?;
    let current = games::find_by_id(&tx, id)?.ok_or(QuizError::NotFound)?;
    let document = merged_document(&current.data, patch)?;
    let data = validate_game(&document, &*tx, Some(id))
        .inspect_err(|e| debug!("Rejected update of game {id}: {e}"))?;
    games::update_game(&tx, id, &data)?;
    if data.name != current.data.name {
        let refreshed = matches::rename_game(&tx, id, &data.name)?;
        debug!("Renamed game {id} in {refreshed} matches");
    }
    tx.commit()?;

    info!("Updated game {id}");
    Ok(Game { id, data })
}

pub fn submit_score(conn: &mut Connection, id: GameId, submission: &Payload) -> QuizResult<Vec<RankingEntry>> {
    ranking::submit::<Game>(conn, id, submission)
}

pub fn delete_game(conn: &mut Connection, id: GameId) -> QuizResult<()> {
    let tx = database::begin_write(conn)?;
    if !games::delete_by_id(&tx, id)? {
        return Err(QuizError::NotFound);
    }
    tx.commit()?;

    info!("Deleted game {id}");
    Ok(())
}
