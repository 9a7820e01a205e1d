use error_stack::{Context, Report};

// Figment errors carry the offending key and its source separately from
// the message, so they are spelled out as attachments.
pub trait FigmentErrorAttachable<T: Context> {
  fn attach_figment_error(self, err: figment::Error) -> Report<T>;
}

impl<T: Context> FigmentErrorAttachable<T> for Report<T> {
  fn attach_figment_error(self, e: figment::Error) -> Report<T> {
    let mut this = self;
    for error in e {
      this = this.attach_printable(format!("{}", error.kind));

      if let (Some(profile), Some(md)) = (&error.profile, &error.metadata) {
        if !error.path.is_empty() {
          let key = md.interpolate(profile, &error.path);
          this = this.attach_printable(format!("for key {key:?}"));
        }
      }

      if let Some(md) = &error.metadata {
        if let Some(source) = &md.source {
          this = this.attach_printable(format!("in {source} {}", md.name));
        } else {
          this = this.attach_printable(format!("in {}", md.name));
        }
      }
    }
    this
  }
}
