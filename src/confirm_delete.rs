use super::*;

pub(crate) struct ConfirmDelete {
  pub(crate) author: String,
  pub(crate) id: u64,
  pub(crate) replies: usize,
}

impl ConfirmDelete {
  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('y' | 'Y') | KeyCode::Enter => Command::SubmitInput,
      KeyCode::Char('n' | 'N') | KeyCode::Esc => Command::CancelInput,
      _ => Command::None,
    }
  }

  pub(crate) fn question(&self) -> String {
    match self.replies {
      0 => format!("Delete the comment by {}?", self.author),
      1 => format!("Delete the comment by {} and its reply?", self.author),
      count => format!(
        "Delete the comment by {} and all {count} replies?",
        self.author
      ),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn question_warns_about_replies() {
    let mut confirm = ConfirmDelete {
      author: "alice".into(),
      id: 1,
      replies: 0,
    };

    assert_eq!(confirm.question(), "Delete the comment by alice?");

    confirm.replies = 3;

    assert_eq!(
      confirm.question(),
      "Delete the comment by alice and all 3 replies?"
    );
  }

  #[test]
  fn only_explicit_answers_resolve_the_prompt() {
    assert_eq!(
      ConfirmDelete::handle_key(KeyEvent::from(KeyCode::Char('y'))),
      Command::SubmitInput
    );

    assert_eq!(
      ConfirmDelete::handle_key(KeyEvent::from(KeyCode::Esc)),
      Command::CancelInput
    );

    assert_eq!(
      ConfirmDelete::handle_key(KeyEvent::from(KeyCode::Char('d'))),
      Command::None
    );
  }
}
