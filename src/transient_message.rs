use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Tone {
  Error,
  #[default]
  Info,
  Success,
}

impl Tone {
  pub(crate) fn color(self) -> Color {
    match self {
      Self::Error => Color::Red,
      Self::Info => Color::DarkGray,
      Self::Success => Color::Green,
    }
  }
}

/// A toast shown in the status line until it expires or is replaced,
/// after which the status it covered comes back.
#[derive(Clone)]
pub(crate) struct TransientMessage {
  expires_at: Instant,
  restore: String,
  text: String,
  tone: Tone,
}

impl TransientMessage {
  const LIFETIME: Duration = Duration::from_secs(5);

  pub(crate) fn is_expired(&self) -> bool {
    Instant::now() >= self.expires_at
  }

  pub(crate) fn new(tone: Tone, text: String, restore: String) -> Self {
    Self {
      expires_at: Instant::now() + Self::LIFETIME,
      restore,
      text,
      tone,
    }
  }

  pub(crate) fn restore(&self) -> &str {
    &self.restore
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }

  pub(crate) fn tone(&self) -> Tone {
    self.tone
  }
}
