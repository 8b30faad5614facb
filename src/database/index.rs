use rusqlite::Connection;

use super::{games, matches};
use crate::domain::models::{GameId, GameSummary};
use crate::domain::validation::DocumentIndex;

impl DocumentIndex for Connection {
    fn game_name_taken(&self, name: &str, exclude: Option<i64>) -> anyhow::Result<bool> {
        games::name_taken(self, name, exclude)
    }

    fn game_summary(&self, id: GameId) -> anyhow::Result<Option<GameSummary>> {
        games::summary(self, id)
    }

    fn match_url_taken(&self, url: &str, exclude: Option<i64>) -> anyhow::Result<bool> {
        matches::url_taken(self, url, exclude)
    }
}
