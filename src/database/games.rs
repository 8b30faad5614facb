use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::document::{decode, encode};
use crate::domain::models::{Game, GameData, GameId, GameSummary};

const SELECT_GAME: &str = "SELECT id, document FROM games";

/// Unique-index key for a name. Folds Unicode case, not just ASCII.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<Game> {
    Ok(Game {
        id: row.get(0)?,
        data: decode(row, 1)?,
    })
}

pub fn insert_game(conn: &Connection, data: &GameData) -> Result<Game> {
    let sql = "INSERT INTO games (name, name_key, document) VALUES (?1, ?2, ?3) RETURNING id";

    let id: GameId = conn
        .query_row(sql, params![data.name, name_key(&data.name), encode(data)?], |row| row.get(0))
        .context("Failed to insert game")?;

    Ok(Game { id, data: data.clone() })
}

pub fn find_by_id(conn: &Connection, id: GameId) -> Result<Option<Game>> {
    let sql = format!("{SELECT_GAME} WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_game_row)
        .optional()
        .context("Failed to query game by id")
}

/// Case-insensitive, like the unique index.
pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Game>> {
    let sql = format!("{SELECT_GAME} WHERE name_key = ?1");

    conn.query_row(&sql, params![name_key(name)], parse_game_row)
        .optional()
        .context("Failed to query game by name")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Game>> {
    let sql = format!("{SELECT_GAME} ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Replaces the stored document. Returns false when no such game exists.
pub fn update_game(conn: &Connection, id: GameId, data: &GameData) -> Result<bool> {
    let sql = "UPDATE games SET name = ?1, name_key = ?2, document = ?3, updated_at = CURRENT_TIMESTAMP WHERE id = ?4";

    let changed = conn
        .execute(sql, params![data.name, name_key(&data.name), encode(data)?, id])
        .context("Failed to update game")?;
    Ok(changed > 0)
}

pub fn delete_by_id(conn: &Connection, id: GameId) -> Result<bool> {
    let changed = conn
        .execute("DELETE FROM games WHERE id = ?1", params![id])
        .context("Failed to delete game")?;
    Ok(changed > 0)
}

pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))
        .context("Failed to count games")
}

pub fn name_taken(conn: &Connection, name: &str, exclude: Option<GameId>) -> Result<bool> {
    let sql = "SELECT EXISTS(SELECT 1 FROM games WHERE name_key = ?1 AND (?2 IS NULL OR id != ?2))";

    conn.query_row(sql, params![name_key(name), exclude], |row| row.get(0))
        .context("Failed to check game name")
}

pub fn summary(conn: &Connection, id: GameId) -> Result<Option<GameSummary>> {
    Ok(find_by_id(conn, id)?.map(|game| GameSummary {
        id: game.id,
        name: game.data.name,
    }))
}
