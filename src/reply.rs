#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum ReplyTarget {
  #[default]
  Idle,
  Replying {
    author: String,
    id: u64,
  },
}

impl ReplyTarget {
  pub(crate) fn author(&self) -> Option<&str> {
    match self {
      Self::Idle => None,
      Self::Replying { author, .. } => Some(author),
    }
  }

  pub(crate) fn cancel(&mut self) {
    *self = Self::Idle;
  }

  pub(crate) fn is_replying(&self) -> bool {
    matches!(self, Self::Replying { .. })
  }

  pub(crate) fn parent_id(&self) -> Option<u64> {
    match self {
      Self::Idle => None,
      Self::Replying { id, .. } => Some(*id),
    }
  }

  pub(crate) fn reply(&mut self, id: u64, author: impl Into<String>) {
    *self = Self::Replying {
      author: author.into(),
      id,
    };
  }

  pub(crate) fn submitted(&mut self) {
    self.cancel();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cancel_returns_to_idle() {
    let mut target = ReplyTarget::default();

    target.reply(7, "Alice");
    assert_eq!(target.parent_id(), Some(7));
    assert_eq!(target.author(), Some("Alice"));

    target.cancel();
    assert_eq!(target, ReplyTarget::Idle);
    assert_eq!(target.parent_id(), None);
  }

  #[test]
  fn choosing_another_target_replaces_the_first() {
    let mut target = ReplyTarget::default();

    target.reply(7, "Alice");
    target.reply(9, "Bob");

    assert_eq!(
      target,
      ReplyTarget::Replying {
        author: "Bob".into(),
        id: 9,
      }
    );
  }

  #[test]
  fn submission_clears_the_target() {
    let mut target = ReplyTarget::default();

    target.reply(3, "Carol");
    target.submitted();

    assert!(!target.is_replying());
  }
}
