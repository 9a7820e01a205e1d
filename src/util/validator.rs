use error_stack::Report;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Error)]
#[error("Invalid given data occurred")]
pub struct Wrapper;

/// Turns field-level validation errors into a report with one printable
/// attachment per failed rule, keyed by the dotted field path.
pub trait IntoValidatorReport<T> {
  fn into_validator_report(self) -> error_stack::Result<T, Wrapper>;
}

impl<T> IntoValidatorReport<T> for Result<T, ValidationErrors> {
  fn into_validator_report(self) -> error_stack::Result<T, Wrapper> {
    self.map_err(|errors| {
      fn read_errors(
        errors: &ValidationErrors,
        path: &mut Vec<String>,
        mut report: Report<Wrapper>,
      ) -> Report<Wrapper> {
        for (field, kind) in errors.errors() {
          path.push(field.to_string());
          match kind {
            ValidationErrorsKind::Field(messages) => {
              let field_str = path.join(".");
              for message in messages {
                report = report.attach_printable(format!("{field_str}: {message}"));
              }
            }
            ValidationErrorsKind::Struct(inner) => {
              report = read_errors(inner, path, report);
            }
            ValidationErrorsKind::List(elements) => {
              for (index, inner) in elements {
                path.push(index.to_string());
                report = read_errors(inner, path, report);
                path.pop();
              }
            }
          }
          path.pop();
        }
        report
      }

      let mut path = Vec::new();
      read_errors(&errors, &mut path, Report::new(Wrapper))
    })
  }
}
