use {
  anyhow::Context,
  app::App,
  chrono::{DateTime, Local, Utc},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::{Comment, NewComment},
  comment_page::CommentPage,
  comment_view::CommentView,
  composer::{Composer, ComposerKind, Submission},
  config::Config,
  confirm_delete::ConfirmDelete,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  error::Error,
  event::Event,
  help_view::HelpView,
  list_view::ListView,
  listing::{Listing, apply_page_result},
  mode::Mode,
  pagination::Pagination,
  post::{NewPost, Post, PostPage},
  query::{QueryState, SortField, SortOrder},
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  render::{MAX_TREE_DEPTH, MAX_VISUAL_LEVEL, render},
  rendered_row::RenderedRow,
  reply::ReplyTarget,
  search_input::SearchInput,
  serde::{Deserialize, Deserializer, Serialize},
  state::{Input, ListStatus, State},
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  transient_message::{Tone, TransientMessage},
  utils::{
    deserialize_null_default, format_timestamp, popup_area, truncate, wrap_text,
  },
};

mod app;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_page;
mod comment_view;
mod composer;
mod config;
mod confirm_delete;
mod effect;
mod error;
mod event;
mod help_view;
mod list_view;
mod listing;
mod logging;
mod mode;
mod pagination;
mod post;
mod query;
mod render;
mod rendered_row;
mod reply;
mod search_input;
mod state;
mod transient_message;
mod utils;

const COMMENTS_STATUS: &str = "↑/k ↓/j move • c comment • r reply • d delete • / search • s sort • [ ] page • ? help • q quit";

const POSTS_STATUS: &str =
  "↑/k ↓/j move • enter comments • c new post • [ ] page • ? help • q quit";

const COMPOSE_STATUS: &str =
  "tab next field • enter on last field submits • esc cancel";

const CONFIRM_STATUS: &str = "y/enter delete • n/esc keep";

const DELETING_STATUS: &str = "Deleting comment...";
const LOADING_STATUS: &str = "Loading...";
const SUBMITTING_STATUS: &str = "Submitting...";

const COMPOSER_FIELD_LINES: usize = 6;

const BASE_INDENT: &str = " ";

const HELP_TITLE: &str = "Help";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first comment
  end     jump to last comment
  ← / h   collapse or go to parent
  → / l   expand or go to first reply
  enter   toggle collapse or expand

Comments:
  c       write a comment (in a thread view it replies to the root)
  r       reply to the selected comment
  d       delete the selected comment
  t       show the replies under the selected thread's root
  /       search (type to edit, enter to submit)
  x       clear the search
  s       cycle sort field
  S       toggle sort order
  ] / n   next page
  [ / p   previous page
  R       reload or retry
  P       show posts (when enabled)
  o       open the site in your browser
  esc     cancel reply, leave thread or search
  q       quit
  ?       toggle this help

Forms:
  tab     next field
  enter   next field, submits on the last one
  esc     close the form
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::load()?;

  logging::init(&config)?;

  let client = Client::new(&config).context("could not build http client")?;

  let state = State::new(&config, client.web_url());

  let mut app = App::new(client, state);

  let mut terminal = initialize_terminal()?;

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  if let Err(error) = &result {
    tracing::error!(%error, "exiting after error");
  }

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
