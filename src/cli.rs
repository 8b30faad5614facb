use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "quizzy backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (defaults to the environment's configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Drop and recreate the database schema
    Setup,
}
