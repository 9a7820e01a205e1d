use clap::Parser;
use error_stack::{Result, ResultExt};
use thiserror::Error;

mod server;

/// Command line options for Communion.
#[derive(Debug, Parser)]
#[command(about = "Community events service", version, author, long_about)]
pub struct Cli {
  #[clap(subcommand)]
  pub subcommand: Subcommand,
}

#[derive(Debug, Error)]
#[error("Command failed")]
pub struct CommandError;

impl Cli {
  pub fn run(self) -> Result<(), CommandError> {
    match self.subcommand {
      Subcommand::Server(args) => self::server::run(args).change_context(CommandError),
    }
  }
}

#[derive(Debug, Parser)]
pub enum Subcommand {
  Server(self::server::ServerCommand),
}
