use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
  Comments,
  Posts,
}

impl Mode {
  pub(crate) fn comments_key(
    view: &mut CommentView,
    key: KeyEvent,
    page: usize,
  ) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') => Command::Quit,
      KeyCode::Esc => Command::Back,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Char('/') => Command::StartSearch,
      KeyCode::Char('x') => Command::ClearSearch,
      KeyCode::Char('c') => Command::ComposeComment,
      KeyCode::Char('r') => Command::ReplyToSelected,
      KeyCode::Char('d') | KeyCode::Delete
        if !modifiers.contains(KeyModifiers::CONTROL) =>
      {
        Command::DeleteSelected
      }
      KeyCode::Char('t') => Command::FocusThread,
      KeyCode::Char('s') => Command::CycleSortField,
      KeyCode::Char('S') => Command::ToggleSortOrder,
      KeyCode::Char(']' | 'n') => Command::NextPage,
      KeyCode::Char('[' | 'p') => Command::PreviousPage,
      KeyCode::Char('R') => Command::Reload,
      KeyCode::Char('P') => Command::ShowPosts,
      KeyCode::Char('o' | 'O') => Command::OpenInBrowser,
      KeyCode::Down | KeyCode::Char('j') => {
        view.move_by(1);
        Command::None
      }
      KeyCode::Up | KeyCode::Char('k') => {
        view.move_by(-1);
        Command::None
      }
      KeyCode::PageDown => {
        view.page_down(page);
        Command::None
      }
      KeyCode::PageUp => {
        view.page_up(page);
        Command::None
      }
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        view.page_down(page);
        Command::None
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        view.page_up(page);
        Command::None
      }
      KeyCode::Left | KeyCode::Char('h') => {
        view.collapse_selected();
        Command::None
      }
      KeyCode::Right | KeyCode::Char('l') => {
        view.expand_selected();
        Command::None
      }
      KeyCode::Enter | KeyCode::Char(' ') => {
        view.toggle_selected();
        Command::None
      }
      KeyCode::Home => {
        view.select_index_at(0);
        Command::None
      }
      KeyCode::End => {
        view.select_last();
        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn posts_key(
    view: &mut ListView<Post>,
    key: KeyEvent,
    page: usize,
  ) -> Command {
    let jump = isize::try_from(page.saturating_sub(1).max(1)).unwrap_or(isize::MAX);

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Char('c') => Command::ComposePost,
      KeyCode::Char(']' | 'n') => Command::NextPage,
      KeyCode::Char('[' | 'p') => Command::PreviousPage,
      KeyCode::Char('R') => Command::Reload,
      KeyCode::Char('o' | 'O') => Command::OpenInBrowser,
      KeyCode::Enter => Command::OpenSelectedPost,
      KeyCode::Down | KeyCode::Char('j') => {
        view.move_by(1);
        Command::None
      }
      KeyCode::Up | KeyCode::Char('k') => {
        view.move_by(-1);
        Command::None
      }
      KeyCode::PageDown => {
        view.move_by(jump);
        Command::None
      }
      KeyCode::PageUp => {
        view.move_by(-jump);
        Command::None
      }
      KeyCode::Home => {
        view.set_selected(0);
        Command::None
      }
      KeyCode::End => {
        view.set_selected(view.len().saturating_sub(1));
        Command::None
      }
      _ => Command::None,
    }
  }
}
