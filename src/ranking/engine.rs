use log::info;
use rusqlite::Connection;
use serde_json::Value;

use super::board::insert_or_update;
use crate::database::{self, games, matches};
use crate::domain::models::{Game, Match, RankingEntry};
use crate::domain::validation::{ranking_entry, Leaderboard, Payload};
use crate::errors::{QuizError, QuizResult};

/// A stored document that carries a leaderboard.
pub trait Ranked: Sized {
    const BOARD: Leaderboard;

    fn load(conn: &Connection, id: i64) -> anyhow::Result<Option<Self>>;
    fn save(&self, conn: &Connection) -> anyhow::Result<()>;
    fn leaderboard(&self) -> &[RankingEntry];
    fn leaderboard_mut(&mut self) -> &mut Vec<RankingEntry>;
}

impl Ranked for Game {
    const BOARD: Leaderboard = Leaderboard::GameRanking;

    fn load(conn: &Connection, id: i64) -> anyhow::Result<Option<Self>> {
        games::find_by_id(conn, id)
    }

    fn save(&self, conn: &Connection) -> anyhow::Result<()> {
        games::update_game(conn, self.id, &self.data).map(|_| ())
    }

    fn leaderboard(&self) -> &[RankingEntry] {
        &self.data.ranking
    }

    fn leaderboard_mut(&mut self) -> &mut Vec<RankingEntry> {
        &mut self.data.ranking
    }
}

impl Ranked for Match {
    const BOARD: Leaderboard = Leaderboard::MatchResult;

    fn load(conn: &Connection, id: i64) -> anyhow::Result<Option<Self>> {
        matches::find_by_id(conn, id)
    }

    fn save(&self, conn: &Connection) -> anyhow::Result<()> {
        matches::update_match(conn, self.id, &self.data).map(|_| ())
    }

    fn leaderboard(&self) -> &[RankingEntry] {
        &self.data.result
    }

    fn leaderboard_mut(&mut self) -> &mut Vec<RankingEntry> {
        &mut self.data.result
    }
}

/// Records `{user, points}` on the document's leaderboard and returns the
/// whole board, highest first.
pub fn submit<D: Ranked>(conn: &mut Connection, id: i64, submission: &Payload) -> QuizResult<Vec<RankingEntry>> {
    if submission.is_empty() {
        return Err(QuizError::MalformedRequest);
    }

    let tx = database::begin_write(conn)?;
    let mut document = D::load(&tx, id)?.ok_or(QuizError::NotFound)?;
    let entry = ranking_entry(&Value::Object(submission.clone()), D::BOARD)?;

    info!("Recording {} points for '{}' on {:?} {}", entry.points, entry.user, D::BOARD, id);
    insert_or_update(document.leaderboard_mut(), entry);
    document.save(&tx)?;
    tx.commit()?;

    Ok(document.leaderboard().to_vec())
}
