use std::sync::Arc;

use anyhow::anyhow;
use rusqlite::Connection;

use crate::database::{self, DbPool};
use crate::errors::{QuizError, QuizResult};

pub mod games;
pub mod matches;

pub struct AppState {
    pub pool: DbPool,
}

/// Runs storage work on the blocking pool with a pooled connection.
pub async fn with_connection<T, F>(state: &Arc<AppState>, work: F) -> QuizResult<T>
where
    F: FnOnce(&mut Connection) -> QuizResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = state.pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = database::get_connection(&pool)?;
        work(&mut conn)
    })
    .await
    .map_err(|e| QuizError::Storage(anyhow!("Storage task failed: {e}")))?
}

/// Ids that are not numbers cannot name a document.
fn path_id(raw: &str) -> QuizResult<i64> {
    raw.trim().parse().map_err(|_| QuizError::NotFound)
}
