use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::database::{self, DbPool};

/// Opens the pool and makes sure the schema exists.
fn open_database(db_path: &str) -> Result<DbPool> {
    let pool = database::create_pool(db_path)?;
    let conn = database::get_connection(&pool)?;
    database::setup::init_schema(&conn)?;
    drop(conn);
    Ok(pool)
}

pub struct ServerService {
    config: AppConfig,
}

impl ServerService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> Result<()> {
        let db_path = self.config.database.path();
        let pool = open_database(&db_path)?;
        info!("Using database {} ({} environment)", db_path, self.config.environment);

        let port = self.config.server.port;
        let host = self.config.server.host;
        let state = Arc::new(AppState { pool });

        let app = create_router(state)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        info!("Server listening on {} (advertised as {}:{})", addr, host, port);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn test_open_database_creates_schema() {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let path = std::env::temp_dir().join(format!("quizzy-open-{}-{nanos}.db", std::process::id()));
        let path = path.to_string_lossy().into_owned();

        let pool = open_database(&path).unwrap();
        let conn = database::get_connection(&pool).unwrap();
        assert_eq!(database::games::count(&conn).unwrap(), 0);
        assert_eq!(database::matches::count(&conn).unwrap(), 0);

        drop(conn);
        drop(pool);
        let _ = std::fs::remove_file(&path);
    }
}
