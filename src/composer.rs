use super::*;

pub(crate) const MAX_AUTHOR_CHARS: usize = 50;
pub(crate) const MAX_COMMENT_CHARS: usize = 1000;
pub(crate) const MAX_POST_CHARS: usize = 10_000;
pub(crate) const MAX_TITLE_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Field {
  Author,
  Content,
  Title,
}

impl Field {
  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Author => "author",
      Self::Content => "content",
      Self::Title => "title",
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ComposerKind {
  Comment,
  Post,
}

impl ComposerKind {
  pub(crate) fn fields(self) -> &'static [Field] {
    match self {
      Self::Comment => &[Field::Author, Field::Content],
      Self::Post => &[Field::Title, Field::Author, Field::Content],
    }
  }

  pub(crate) fn limit(self, field: Field) -> usize {
    match (self, field) {
      (_, Field::Author) => MAX_AUTHOR_CHARS,
      (Self::Comment, _) => MAX_COMMENT_CHARS,
      (Self::Post, Field::Content) => MAX_POST_CHARS,
      (Self::Post, Field::Title) => MAX_TITLE_CHARS,
    }
  }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Submission {
  Comment(NewComment),
  Post(NewPost),
}

pub(crate) struct Composer {
  author: String,
  content: String,
  focus: usize,
  kind: ComposerKind,
  submitting: bool,
  title: String,
}

impl Composer {
  pub(crate) fn buffer(&self, field: Field) -> &str {
    match field {
      Field::Author => &self.author,
      Field::Content => &self.content,
      Field::Title => &self.title,
    }
  }

  fn buffer_mut(&mut self, field: Field) -> &mut String {
    match field {
      Field::Author => &mut self.author,
      Field::Content => &mut self.content,
      Field::Title => &mut self.title,
    }
  }

  fn checked(&self, field: Field) -> Result<String, Error> {
    let value = self.buffer(field).trim();

    if value.is_empty() {
      return Err(Error::Required {
        field: field.label(),
      });
    }

    let max = self.kind.limit(field);

    if value.chars().count() > max {
      return Err(Error::TooLong {
        field: field.label(),
        max,
      });
    }

    Ok(value.to_string())
  }

  pub(crate) fn focus(&self) -> Field {
    let fields = self.kind.fields();
    fields[self.focus.min(fields.len() - 1)]
  }

  fn focus_next(&mut self) {
    self.focus = (self.focus + 1) % self.kind.fields().len();
  }

  fn focus_previous(&mut self) {
    let count = self.kind.fields().len();
    self.focus = (self.focus + count - 1) % count;
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    if key.code == KeyCode::Esc {
      return Command::CancelInput;
    }

    if self.submitting {
      return Command::None;
    }

    match key.code {
      KeyCode::Tab | KeyCode::Down => self.focus_next(),
      KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
      KeyCode::Enter => {
        if self.focus + 1 >= self.kind.fields().len() {
          return Command::SubmitInput;
        }

        self.focus_next();
      }
      KeyCode::Backspace => {
        let field = self.focus();
        self.buffer_mut(field).pop();
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        let field = self.focus();
        self.buffer_mut(field).push(ch);
      }
      _ => {}
    }

    Command::None
  }

  pub(crate) fn is_submitting(&self) -> bool {
    self.submitting
  }

  pub(crate) fn kind(&self) -> ComposerKind {
    self.kind
  }

  pub(crate) fn new(kind: ComposerKind) -> Self {
    Self {
      author: String::new(),
      content: String::new(),
      focus: 0,
      kind,
      submitting: false,
      title: String::new(),
    }
  }

  pub(crate) fn set_submitting(&mut self, submitting: bool) {
    self.submitting = submitting;
  }

  /// Validates the form and builds the request body; nothing is sent when
  /// this fails.
  pub(crate) fn submission(
    &self,
    reply: &ReplyTarget,
    post: Option<u64>,
  ) -> Result<Submission, Error> {
    match self.kind {
      ComposerKind::Comment => Ok(Submission::Comment(NewComment {
        author: self.checked(Field::Author)?,
        content: self.checked(Field::Content)?,
        parent_id: reply.parent_id(),
        post_id: post,
      })),
      ComposerKind::Post => Ok(Submission::Post(NewPost {
        title: self.checked(Field::Title)?,
        author: self.checked(Field::Author)?,
        content: self.checked(Field::Content)?,
      })),
    }
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use {super::*, crate::error::ErrorKind};

  pub(crate) fn type_text(composer: &mut Composer, text: &str) {
    for ch in text.chars() {
      composer.handle_key(KeyEvent::from(KeyCode::Char(ch)));
    }
  }

  pub(crate) fn filled(author: &str, content: &str) -> Composer {
    let mut composer = Composer::new(ComposerKind::Comment);

    type_text(&mut composer, author);
    composer.handle_key(KeyEvent::from(KeyCode::Tab));
    type_text(&mut composer, content);

    composer
  }

  #[test]
  fn empty_author_is_rejected() {
    let error = filled("", "hello")
      .submission(&ReplyTarget::Idle, None)
      .unwrap_err();

    assert!(matches!(error, Error::Required { field: "author" }));
    assert_eq!(error.kind(), ErrorKind::Validation);
  }

  #[test]
  fn empty_content_is_rejected() {
    let error = filled("alice", "   ")
      .submission(&ReplyTarget::Idle, None)
      .unwrap_err();

    assert!(matches!(error, Error::Required { field: "content" }));
  }

  #[test]
  fn author_over_fifty_characters_is_rejected() {
    let error = filled(&"a".repeat(51), "hello")
      .submission(&ReplyTarget::Idle, None)
      .unwrap_err();

    assert!(matches!(
      error,
      Error::TooLong {
        field: "author",
        max: 50
      }
    ));

    assert!(
      filled(&"a".repeat(50), "hello")
        .submission(&ReplyTarget::Idle, None)
        .is_ok()
    );
  }

  #[test]
  fn limits_count_characters_not_bytes() {
    assert!(
      filled(&"é".repeat(50), "hello")
        .submission(&ReplyTarget::Idle, None)
        .is_ok()
    );
  }

  #[test]
  fn content_over_limit_is_rejected() {
    let error = filled("alice", &"x".repeat(1001))
      .submission(&ReplyTarget::Idle, None)
      .unwrap_err();

    assert!(matches!(
      error,
      Error::TooLong {
        field: "content",
        max: 1000
      }
    ));
  }

  #[test]
  fn reply_target_becomes_parent() {
    let mut reply = ReplyTarget::Idle;
    reply.reply(7, "Alice");

    let submission = filled(" bob ", "thanks").submission(&reply, Some(2)).unwrap();

    assert_eq!(
      submission,
      Submission::Comment(NewComment {
        author: "bob".into(),
        content: "thanks".into(),
        parent_id: Some(7),
        post_id: Some(2),
      })
    );
  }

  #[test]
  fn enter_advances_then_submits() {
    let mut composer = Composer::new(ComposerKind::Post);

    assert_eq!(composer.focus(), Field::Title);
    assert_eq!(composer.handle_key(KeyEvent::from(KeyCode::Enter)), Command::None);
    assert_eq!(composer.focus(), Field::Author);
    assert_eq!(composer.handle_key(KeyEvent::from(KeyCode::Enter)), Command::None);
    assert_eq!(composer.focus(), Field::Content);

    assert_eq!(
      composer.handle_key(KeyEvent::from(KeyCode::Enter)),
      Command::SubmitInput
    );
  }

  #[test]
  fn post_title_is_required() {
    let mut composer = Composer::new(ComposerKind::Post);

    composer.handle_key(KeyEvent::from(KeyCode::Tab));
    type_text(&mut composer, "alice");
    composer.handle_key(KeyEvent::from(KeyCode::Tab));
    type_text(&mut composer, "body");

    assert!(matches!(
      composer.submission(&ReplyTarget::Idle, None),
      Err(Error::Required { field: "title" })
    ));
  }

  #[test]
  fn editing_is_disabled_while_submitting() {
    let mut composer = filled("alice", "hi");

    composer.set_submitting(true);
    type_text(&mut composer, "!!");

    assert_eq!(composer.buffer(Field::Content), "hi");
    assert_eq!(composer.handle_key(KeyEvent::from(KeyCode::Enter)), Command::None);

    assert_eq!(
      composer.handle_key(KeyEvent::from(KeyCode::Esc)),
      Command::CancelInput
    );
  }
}
