use error_stack::{Result, ResultExt};
use thiserror::Error;
use tracing::{Event, Subscriber};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format::{Compact, Format, Full, Pretty, Writer};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::config::{Logging, LoggingStyle};

#[derive(Debug, Error)]
#[error("Failed to initialize logging")]
pub struct LoggingInitError;

pub fn init(config: &Logging) -> Result<(), LoggingInitError> {
  let ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());
  let layer = fmt::layer()
    .with_writer(std::io::stderr)
    .event_format(Formatter::from_style(config.style, ansi));

  let registry = tracing_subscriber::Registry::default()
    .with(make_env_filter(&config.targets))
    .with(layer)
    .with(ErrorLayer::default());

  tracing::subscriber::set_global_default(registry)
    .change_context(LoggingInitError)
    .attach_printable("already initialized logging")
}

fn make_env_filter(targets: &str) -> EnvFilter {
  EnvFilter::builder()
    .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
    .parse_lossy(targets)
}

pub enum Formatter {
  Full(Format<Full, ChronoUtc>),
  Pretty(Format<Pretty, ChronoUtc>),
  Compact(Format<Compact, ChronoUtc>),
}

impl Formatter {
  #[must_use]
  pub fn from_style(style: LoggingStyle, ansi: bool) -> Self {
    let default = fmt::format().with_timer(ChronoUtc::new("%Y-%m-%dT%H:%M:%S%.3fZ".to_string()));
    match style {
      LoggingStyle::Compact => Self::Compact(default.compact().with_ansi(ansi)),
      LoggingStyle::Full => Self::Full(default.with_ansi(ansi)),
      LoggingStyle::Pretty => Self::Pretty(default.pretty().with_ansi(ansi)),
    }
  }
}

impl<S, N> FormatEvent<S, N> for Formatter
where
  S: Subscriber + for<'a> LookupSpan<'a>,
  N: for<'a> FormatFields<'a> + 'static,
{
  fn format_event(
    &self,
    ctx: &FmtContext<'_, S, N>,
    writer: Writer<'_>,
    event: &Event<'_>,
  ) -> std::fmt::Result {
    match self {
      Formatter::Full(fmt) => fmt.format_event(ctx, writer, event),
      Formatter::Pretty(fmt) => fmt.format_event(ctx, writer, event),
      Formatter::Compact(fmt) => fmt.format_event(ctx, writer, event),
    }
  }
}
