use error_stack::{Report, Result, ResultExt};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use validator::Validate;

use super::{Auth, Logging, ParseError, Session};
use crate::util::{figment::FigmentErrorAttachable, validator::IntoValidatorReport};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Server {
  /// **Environment variables**:
  /// - `COMMUNION_IP`
  #[serde(default = "Server::default_ip")]
  pub ip: IpAddr,
  /// **Environment variables**:
  /// - `COMMUNION_PORT` or `PORT`
  #[serde(default = "Server::default_port")]
  pub port: u16,
  /// Amount of HTTP workers to spawn. It defaults to the number of
  /// available CPU cores.
  ///
  /// **Environment variables**:
  /// - `COMMUNION_WORKERS`
  #[serde(default = "Server::default_workers")]
  #[validate(range(min = 1))]
  pub workers: usize,
  /// Whether to fill the store with demonstration events at startup.
  ///
  /// **Environment variables**:
  /// - `COMMUNION_SEED`
  #[serde(default = "Server::default_seed")]
  pub seed: bool,
  #[serde(default)]
  #[validate(nested)]
  pub session: Session,
  #[serde(default)]
  pub auth: Auth,
  #[serde(default)]
  pub logging: Logging,
}

impl Server {
  pub fn load() -> Result<Self, ParseError> {
    dotenvy::dotenv().ok();

    let config = Self::figment()
      .extract::<Self>()
      .map_err(|e| Report::new(ParseError).attach_figment_error(e))?;

    config
      .validate()
      .into_validator_report()
      .change_context(ParseError)?;

    Ok(config)
  }

  /// Configuration with a fixed session secret and no login padding.
  #[must_use]
  pub fn for_tests() -> Self {
    use crate::util::{MaybeGenerated, Sensitive};

    Self {
      ip: Self::default_ip(),
      port: Self::default_port(),
      workers: 1,
      seed: false,
      session: Session {
        secret: MaybeGenerated::new(Sensitive::new("communion-test-secret".into())),
        ..Session::default()
      },
      auth: Auth {
        login_padding_ms: 0,
      },
      logging: Logging::default(),
    }
  }
}

impl Server {
  const DEFAULT_CONFIG_FILE: &'static str = "communion.toml";
  const DEFAULT_PORT: u16 = 5000;

  const fn default_ip() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
  }

  const fn default_port() -> u16 {
    Self::DEFAULT_PORT
  }

  fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
  }

  const fn default_seed() -> bool {
    true
  }

  /// Creates the [`Figment`](figment::Figment) object the server
  /// configuration is extracted from.
  pub(crate) fn figment() -> figment::Figment {
    use figment::{
      providers::{Env, Format, Toml},
      Figment,
    };

    Figment::new()
      .merge(Toml::file(Self::DEFAULT_CONFIG_FILE))
      // Underscores in these keys are part of the field name, not
      // a nesting separator.
      .merge(Env::prefixed("COMMUNION_").map(|v| {
        let key = v.as_str().to_ascii_uppercase();
        match key.as_str() {
          "SESSION_TTL_SECS" => "session.ttl_secs".into(),
          "AUTH_LOGIN_PADDING_MS" => "auth.login_padding_ms".into(),
          _ => key.replacen('_', ".", 1).into(),
        }
      }))
      // Environment variable aliases
      .merge(
        Env::raw()
          .only(&["SESSION_SECRET", "PORT", "RUST_LOG"])
          .map(|v| match v.as_str().to_ascii_uppercase().as_str() {
            "SESSION_SECRET" => "session.secret".into(),
            "RUST_LOG" => "logging.targets".into(),
            _ => "port".into(),
          }),
      )
  }
}
