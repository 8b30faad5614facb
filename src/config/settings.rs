use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};

pub const ENVIRONMENT_VAR: &str = "QUIZZY_ENV";
pub const DATABASE_PATH_VAR: &str = "DATABASE_PATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => bail!("Unknown environment '{}'", other),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub host: &'static str,
    pub port: u16,
    pub db: &'static str,
}

impl DatabaseSettings {
    /// SQLite file backing this database, `DATABASE_PATH` wins when set.
    pub fn path(&self) -> String {
        std::env::var(DATABASE_PATH_VAR).unwrap_or_else(|_| format!("{}.db", self.db))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: &'static str,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Development)
    }
}

impl AppConfig {
    pub fn for_environment(environment: Environment) -> Self {
        let (database, server) = match environment {
            Environment::Development => (
                DatabaseSettings { host: "127.0.0.1", port: 27017, db: "quizzy-backend" },
                ServerSettings { host: "localhost", port: 3000 },
            ),
            Environment::Test => (
                DatabaseSettings { host: "127.0.0.1", port: 27017, db: "quizzy-backend-test" },
                ServerSettings { host: "localhost", port: 3000 },
            ),
            Environment::Production => (
                DatabaseSettings { host: "172.31.58.67", port: 27017, db: "quizzy-backend" },
                ServerSettings { host: "172.31.25.108", port: 3000 },
            ),
        };

        Self { environment, database, server }
    }

    /// Reads `QUIZZY_ENV` once; development when unset.
    pub fn from_env() -> Result<Self> {
        let environment = match std::env::var(ENVIRONMENT_VAR) {
            Ok(name) => name.parse()?,
            Err(_) => Environment::Development,
        };
        Ok(Self::for_environment(environment))
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}
