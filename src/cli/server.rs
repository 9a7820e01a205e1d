use clap::Parser;
use communion::{config::Server as Config, App};
use error_stack::{Result, ResultExt};
use std::net::IpAddr;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Expose the Communion HTTP API server
#[derive(Debug, Parser)]
pub struct ServerCommand {
  #[clap(long)]
  pub address: Option<IpAddr>,
  #[clap(long)]
  pub port: Option<u16>,
  #[clap(long)]
  pub workers: Option<NonZeroUsize>,
}

#[derive(Debug, Error)]
#[error("Failed to start the server")]
pub struct StartServerError;

pub fn run(args: ServerCommand) -> Result<(), StartServerError> {
  let mut config = Config::load().change_context(StartServerError)?;
  args.override_config(&mut config);

  communion::logging::init(&config.logging).change_context(StartServerError)?;
  if config.session.secret.is_generated() {
    tracing::warn!(
      "session.secret is not set, a random one is generated and sessions will not survive a restart"
    );
  }

  let app = App::new(config);
  actix_web::rt::System::new()
    .block_on(communion::http::serve(app))
    .change_context(StartServerError)
}

impl ServerCommand {
  fn override_config(&self, config: &mut Config) {
    // override server configurations if set by the cli
    if let Some(address) = self.address {
      config.ip = address;
    }

    if let Some(port) = self.port {
      config.port = port;
    }

    if let Some(workers) = self.workers {
      config.workers = workers.get();
    }
  }
}
