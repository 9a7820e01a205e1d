use crate::types;
use error_stack::{Context, Report};
use std::fmt::Display;
use tracing_error::SpanTrace;

mod impls;

/// Context every request failure report ends up with.
#[derive(Debug, thiserror::Error)]
#[error("Failed to perform request")]
pub struct RequestFailed;

/// A failed request: the public [`types::Error`] kind sent to the client,
/// the report of what went wrong and the span trace of where it happened.
pub struct Error {
  error_type: types::Error,
  report: Report<RequestFailed>,
  trace: SpanTrace,
}

impl Error {
  #[must_use]
  pub fn new(error_type: types::Error) -> Self {
    Self {
      error_type,
      report: Report::new(RequestFailed),
      trace: SpanTrace::capture(),
    }
  }

  #[must_use]
  pub fn from_context(error_type: types::Error, context: impl Context) -> Self {
    Self::from_report(error_type, Report::new(context))
  }

  #[must_use]
  pub fn from_report(error_type: types::Error, report: Report<impl Context>) -> Self {
    Self {
      error_type,
      report: report.change_context(RequestFailed),
      trace: SpanTrace::capture(),
    }
  }

  /// Failure that is not the client's fault.
  #[must_use]
  pub fn internal(context: impl Context) -> Self {
    Self::from_context(types::Error::Internal, context)
  }

  #[must_use]
  pub fn from_internal_report(report: Report<impl Context>) -> Self {
    Self::from_report(types::Error::Internal, report)
  }
}

impl Error {
  #[must_use]
  pub fn as_type(&self) -> &types::Error {
    &self.error_type
  }

  #[must_use]
  pub fn attach_printable<A>(mut self, attachment: A) -> Self
  where
    A: Display + std::fmt::Debug + Send + Sync + 'static,
  {
    self.report = self.report.attach_printable(attachment);
    self
  }
}

impl std::fmt::Debug for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Error")
      .field("type", &self.error_type)
      .field("report", &self.report)
      .field("trace", &self.trace)
      .finish()
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{:?}", self.report)?;
    Display::fmt(&self.trace, f)
  }
}
