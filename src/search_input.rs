use super::*;

pub(crate) struct SearchInput {
  pub(crate) buffer: String,
}

impl SearchInput {
  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => Command::CancelInput,
      KeyCode::Enter => Command::SubmitInput,
      KeyCode::Backspace => {
        self.buffer.pop();
        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if !(modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER))
        {
          self.buffer.push(ch);
        }

        Command::None
      }
      _ => Command::None,
    }
  }

  /// Starts from the active search so it can be refined.
  pub(crate) fn new(current: &str) -> Self {
    Self {
      buffer: current.to_string(),
    }
  }

  pub(crate) fn prompt(&self) -> String {
    format!("Search: {}", self.buffer)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prompt_reflects_current_buffer() {
    let mut input = SearchInput::new("");
    assert_eq!(input.prompt(), "Search: ");

    input.handle_key(KeyEvent::from(KeyCode::Char('r')));
    input.handle_key(KeyEvent::from(KeyCode::Char('s')));
    input.handle_key(KeyEvent::from(KeyCode::Backspace));
    input.handle_key(KeyEvent::from(KeyCode::Char('u')));

    assert_eq!(input.prompt(), "Search: ru");
  }

  #[test]
  fn starts_from_active_search() {
    assert_eq!(SearchInput::new("foo").buffer, "foo");
  }

  #[test]
  fn enter_and_escape_finish_input() {
    let mut input = SearchInput::new("foo");

    assert_eq!(
      input.handle_key(KeyEvent::from(KeyCode::Enter)),
      Command::SubmitInput
    );

    assert_eq!(
      input.handle_key(KeyEvent::from(KeyCode::Esc)),
      Command::CancelInput
    );
  }
}
