use super::*;

const TTL: Duration = Duration::from_secs(3);

#[derive(Clone)]
pub(crate) struct TransientMessage {
  previous: String,
  shown_at: Instant,
  text: String,
}

impl TransientMessage {
  pub(crate) fn is_expired(&self) -> bool {
    self.shown_at.elapsed() >= TTL
  }

  pub(crate) fn new(text: String, previous: String) -> Self {
    Self {
      previous,
      shown_at: Instant::now(),
      text,
    }
  }

  pub(crate) fn previous(&self) -> &str {
    &self.previous
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}
