pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod ranking;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: Option<u16>) -> Result<()> {
    let config = AppConfig::from_env()?.with_port(port);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(config);
        service.run().await
    })
}

pub fn handle_setup() -> Result<()> {
    let config = AppConfig::from_env()?;
    let pool = database::create_pool(&config.database.path())?;
    let conn = database::get_connection(&pool)?;
    database::setup::reset_database(&conn)
}
