use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::document::{decode, encode};
use crate::domain::models::{GameId, Match, MatchData, MatchId};

const SELECT_MATCH: &str = "SELECT id, document FROM matches";

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        data: decode(row, 1)?,
    })
}

pub fn insert_match(conn: &Connection, data: &MatchData) -> Result<Match> {
    let sql = "INSERT INTO matches (url, is_real_time, document) VALUES (?1, ?2, ?3) RETURNING id";

    let id: MatchId = conn
        .query_row(
            sql,
            params![data.url, data.is_real_time, encode(data)?],
            |row| row.get(0),
        )
        .context("Failed to insert match")?;

    Ok(Match { id, data: data.clone() })
}

pub fn find_by_id(conn: &Connection, id: MatchId) -> Result<Option<Match>> {
    let sql = format!("{SELECT_MATCH} WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_match_row)
        .optional()
        .context("Failed to query match by id")
}

pub fn find_by_url(conn: &Connection, url: &str) -> Result<Option<Match>> {
    let sql = format!("{SELECT_MATCH} WHERE url = ?1");

    conn.query_row(&sql, params![url.to_lowercase()], parse_match_row)
        .optional()
        .context("Failed to query match by url")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Match>> {
    let sql = format!("{SELECT_MATCH} ORDER BY id");
    query_matches(conn, &sql)
}

/// Matches open to everyone, i.e. not played in real time.
pub fn list_landing(conn: &Connection) -> Result<Vec<Match>> {
    let sql = format!("{SELECT_MATCH} WHERE is_real_time = 0 ORDER BY id");
    query_matches(conn, &sql)
}

fn query_matches(conn: &Connection, sql: &str) -> Result<Vec<Match>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Replaces the stored document. Returns false when no such match exists.
pub fn update_match(conn: &Connection, id: MatchId, data: &MatchData) -> Result<bool> {
    let sql = "UPDATE matches SET url = ?1, is_real_time = ?2, document = ?3, updated_at = CURRENT_TIMESTAMP WHERE id = ?4";

    let changed = conn
        .execute(sql, params![data.url, data.is_real_time, encode(data)?, id])
        .context("Failed to update match")?;
    Ok(changed > 0)
}

/// Rewrites the embedded game name of every match played on `game_id`.
pub fn rename_game(conn: &Connection, game_id: GameId, name: &str) -> Result<usize> {
    let sql = "UPDATE matches SET document = json_set(document, '$.game.name', ?1), updated_at = CURRENT_TIMESTAMP
               WHERE json_extract(document, '$.game.id') = ?2";

    conn.execute(sql, params![name, game_id])
        .context("Failed to refresh game name in matches")
}

pub fn delete_by_id(conn: &Connection, id: MatchId) -> Result<bool> {
    let changed = conn
        .execute("DELETE FROM matches WHERE id = ?1", params![id])
        .context("Failed to delete match")?;
    Ok(changed > 0)
}

pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))
        .context("Failed to count matches")
}

pub fn url_taken(conn: &Connection, url: &str, exclude: Option<MatchId>) -> Result<bool> {
    let sql = "SELECT EXISTS(SELECT 1 FROM matches WHERE url = ?1 AND (?2 IS NULL OR id != ?2))";

    conn.query_row(sql, params![url.to_lowercase(), exclude], |row| row.get(0))
        .context("Failed to check match url")
}
