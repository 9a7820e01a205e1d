use std::sync::Arc;

use crate::auth::SessionRegistry;
use crate::config;
use crate::store::EventStore;

/// State shared by every HTTP worker.
#[derive(Debug, Clone)]
pub struct App {
  pub config: Arc<config::Server>,
  pub store: Arc<EventStore>,
  pub sessions: Arc<SessionRegistry>,
}

impl App {
  #[tracing::instrument(skip_all)]
  pub fn new(cfg: config::Server) -> Self {
    let store = if cfg.seed {
      EventStore::with_demo_events()
    } else {
      EventStore::new()
    };

    Self {
      config: Arc::new(cfg),
      store: Arc::new(store),
      sessions: Arc::new(SessionRegistry::new()),
    }
  }

  /// An app with an empty store, built from [`config::Server::for_tests`].
  #[must_use]
  pub fn for_tests() -> Self {
    Self::new(config::Server::for_tests())
  }
}
