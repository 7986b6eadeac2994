use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn banner(status: &ListStatus, has_rows: bool) -> Option<Line<'static>> {
    match status {
      ListStatus::Failed(message) => Some(Line::from(Span::styled(
        format!("{BASE_INDENT}{message}. Press R to retry."),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
      ))),
      ListStatus::Loading if has_rows => Some(Line::from(Span::styled(
        format!("{BASE_INDENT}{LOADING_STATUS}"),
        Style::default().fg(Color::DarkGray),
      ))),
      _ => None,
    }
  }

  fn comment_list_item(
    row: &RenderedRow,
    expanded: bool,
    deleting: bool,
    available_width: u16,
  ) -> ListItem<'static> {
    let indent = format!("{BASE_INDENT}{}", "  ".repeat(row.level()));

    let mut header = vec![Span::raw(indent.clone())];

    if row.has_children() {
      header.push(Span::raw(if expanded { "[-] " } else { "[+] " }));
    }

    header.push(Span::styled(row.header(), Style::default().fg(Color::White)));

    if deleting {
      header.push(Span::styled(
        " (deleting...)",
        Style::default().fg(Color::Red),
      ));
    }

    let mut lines = vec![Line::from(header)];

    let wrap_width = usize::from(available_width)
      .saturating_sub(indent.chars().count())
      .max(1);

    for line in wrap_text(row.body(), wrap_width) {
      lines.push(Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(line, Style::default().fg(Color::Gray)),
      ]));
    }

    lines.push(Line::from(Span::raw(indent)));

    ListItem::new(lines)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
      ])
      .split(frame.area());

    frame.render_widget(Paragraph::new(self.header_lines()), layout[0]);

    let (status, has_rows) = match self.state.mode() {
      Mode::Comments => (
        self.state.comment_status().clone(),
        !self.state.comments().is_empty(),
      ),
      Mode::Posts => (
        self.state.post_status().clone(),
        !self.state.posts().is_empty(),
      ),
    };

    let banner = Self::banner(&status, has_rows);

    let sections = Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Length(u16::from(banner.is_some())),
        Constraint::Min(0),
      ])
      .split(layout[1]);

    if let Some(banner) = banner {
      frame.render_widget(Paragraph::new(banner), sections[0]);
    }

    let list_area = sections[1];

    self.state.set_list_height(usize::from(list_area.height));

    let placeholder = match &status {
      ListStatus::Empty(message) => Some(message.as_str()),
      ListStatus::Failed(_) if !has_rows => Some(""),
      ListStatus::Loading if !has_rows => Some(LOADING_STATUS),
      _ => None,
    };

    if let Some(text) = placeholder {
      frame.render_widget(
        Paragraph::new(format!("{BASE_INDENT}{text}"))
          .style(Style::default().fg(Color::DarkGray)),
        list_area,
      );
    } else {
      match self.state.mode() {
        Mode::Comments => self.draw_comments(frame, list_area),
        Mode::Posts => self.draw_posts(frame, list_area),
      }
    }

    let pagination = match self.state.mode() {
      Mode::Comments => Self::footer(self.state.pagination(), "comment"),
      Mode::Posts => Self::footer(self.state.post_pagination(), "post"),
    };

    frame.render_widget(
      Paragraph::new(pagination).style(Style::default().fg(Color::DarkGray)),
      layout[2],
    );

    frame.render_widget(
      Paragraph::new(self.state.message().to_string())
        .style(Style::default().fg(self.state.tone().color())),
      layout[3],
    );

    match self.state.input() {
      Some(Input::Compose(composer)) => {
        Self::draw_composer(frame, composer, self.state.query());
      }
      Some(Input::ConfirmDelete(confirm)) => {
        Self::draw_confirm_delete(frame, confirm);
      }
      Some(Input::Search(_)) | None => {}
    }

    self.state.help().draw(frame);
  }

  fn draw_comments(&mut self, frame: &mut Frame, area: Rect) {
    let view = self.state.comments();

    let (visible, selected_pos) = view.visible_with_selection();

    let items = visible
      .iter()
      .filter_map(|&index| {
        view.row(index).map(|row| {
          Self::comment_list_item(
            row,
            view.is_expanded(index),
            self.state.is_deleting(row.id()),
            area.width,
          )
        })
      })
      .collect::<Vec<ListItem>>();

    let mut list_state = ListState::default()
      .with_selected(selected_pos)
      .with_offset(view.offset.min(selected_pos.unwrap_or(0)));

    frame.render_stateful_widget(Self::list(items), area, &mut list_state);

    self.state.comments_mut().offset = list_state.offset();
  }

  fn draw_composer(frame: &mut Frame, composer: &Composer, query: &QueryState) {
    let kind = composer.kind();

    let title = match (kind, query.reply.author(), query.parent) {
      (ComposerKind::Comment, Some(author), _) => format!(" Reply to {author} "),
      (ComposerKind::Comment, None, Some(parent)) => {
        format!(" Reply in thread #{parent} ")
      }
      (ComposerKind::Comment, None, None) => " New comment ".to_string(),
      (ComposerKind::Post, ..) => " New post ".to_string(),
    };

    let area = popup_area(frame.area(), 72, 20);

    let wrap_width = usize::from(area.width).saturating_sub(8).max(1);

    let mut lines = Vec::new();

    for &field in kind.fields() {
      let value = composer.buffer(field);
      let count = value.chars().count();
      let limit = kind.limit(field);
      let focused = field == composer.focus();

      let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::DarkGray)
      };

      let count_style = Style::default().fg(if count > limit {
        Color::Red
      } else {
        Color::DarkGray
      });

      lines.push(Line::from(vec![
        Span::styled(
          format!("{}{}", if focused { "> " } else { "  " }, field.label()),
          label_style,
        ),
        Span::styled(format!(" {count}/{limit}"), count_style),
      ]));

      let wrapped = wrap_text(value, wrap_width);
      let skip = wrapped.len().saturating_sub(COMPOSER_FIELD_LINES);

      if wrapped.is_empty() {
        lines.push(Line::from("    "));
      }

      for line in wrapped.into_iter().skip(skip) {
        lines.push(Line::from(format!("    {line}")));
      }

      lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
      if composer.is_submitting() {
        SUBMITTING_STATUS
      } else {
        COMPOSE_STATUS
      },
      Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Clear, area);

    frame.render_widget(
      Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL)),
      area,
    );
  }

  fn draw_confirm_delete(frame: &mut Frame, confirm: &ConfirmDelete) {
    let question = confirm.question();

    let area = popup_area(
      frame.area(),
      question
        .chars()
        .count()
        .max(CONFIRM_STATUS.chars().count())
        .saturating_add(4),
      5,
    );

    frame.render_widget(Clear, area);

    frame.render_widget(
      Paragraph::new(vec![
        Line::from(format!(" {question}")),
        Line::default(),
        Line::from(Span::styled(
          format!(" {CONFIRM_STATUS}"),
          Style::default().fg(Color::DarkGray),
        )),
      ])
      .block(Block::default().title(" Delete ").borders(Borders::ALL))
      .wrap(Wrap { trim: false }),
      area,
    );
  }

  fn draw_posts(&mut self, frame: &mut Frame, area: Rect) {
    let view = self.state.posts();

    let preview_width = usize::from(area.width)
      .saturating_sub(BASE_INDENT.len())
      .max(1);

    let items = view
      .items()
      .iter()
      .map(|post| {
        let preview = post.content.lines().next().unwrap_or_default();

        ListItem::new(vec![
          Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(post.title.clone(), Style::default().fg(Color::White)),
          ]),
          Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(post.detail(), Style::default().fg(Color::DarkGray)),
          ]),
          Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(
              truncate(preview, preview_width),
              Style::default().fg(Color::Gray),
            ),
          ]),
          Line::from(Span::raw(BASE_INDENT)),
        ])
      })
      .collect::<Vec<ListItem>>();

    let mut list_state = ListState::default()
      .with_selected(view.selected_index())
      .with_offset(view.offset());

    frame.render_stateful_widget(Self::list(items), area, &mut list_state);

    self.state.posts_mut().set_offset(list_state.offset());
  }

  fn execute_effect(&mut self, effect: Effect) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    match effect {
      Effect::CreateComment {
        comment,
        request_id,
      } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::CommentCreated {
            request_id,
            result: client.create_comment(&comment).await,
          });
        });
      }
      Effect::CreatePost { post, request_id } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::PostCreated {
            request_id,
            result: client.create_post(&post).await,
          });
        });
      }
      Effect::DeleteComment { id, request_id } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::CommentDeleted {
            id,
            request_id,
            result: client.delete_comment(id).await,
          });
        });
      }
      Effect::FetchComments { query, request_id } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Comments {
            request_id,
            result: client.fetch_comments(&query).await,
          });
        });
      }
      Effect::FetchPosts {
        page,
        page_size,
        request_id,
      } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Posts {
            request_id,
            result: client.fetch_posts(page, page_size).await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(
            Tone::Info,
            format!("Opened in browser: {}", truncate(&url, 80)),
          );
        }
        Err(error) => {
          tracing::warn!(%url, %error, "failed to open browser");

          self
            .state
            .set_transient_message(Tone::Error, format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn footer(pagination: &Pagination, noun: &str) -> String {
    let mut parts = vec![
      pagination.describe(),
      match pagination.total {
        1 => format!("1 {noun}"),
        total => format!("{total} {noun}s"),
      },
    ];

    if pagination.has_prev {
      parts.push("[ previous".into());
    }

    if pagination.has_next {
      parts.push("] next".into());
    }

    format!("{BASE_INDENT}{}", parts.join(" · "))
  }

  fn header_lines(&self) -> Vec<Line<'static>> {
    let query = self.state.query();

    let title = match self.state.mode() {
      Mode::Comments => match self.state.scope_title() {
        Some(post) => format!("COMMENTS · {}", truncate(&post, 60)),
        None => "COMMENTS".to_string(),
      },
      Mode::Posts => "POSTS".to_string(),
    };

    let mut details = Vec::new();

    if self.state.mode() == Mode::Comments {
      details.push(format!(
        "sort: {} {}",
        query.sort_by.as_str(),
        query.sort_order.as_str()
      ));

      if !query.search.is_empty() {
        details.push(format!("search: \"{}\"", truncate(&query.search, 40)));
      }

      if let Some(parent) = query.parent {
        details.push(format!("replies to #{parent}"));
      }

      if let Some(author) = query.reply.author() {
        details.push(format!("replying to {author}"));
      }
    }

    vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          title,
          Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
      ]),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(details.join(" · "), Style::default().fg(Color::DarkGray)),
      ]),
    ]
  }

  fn list(items: Vec<ListItem>) -> List {
    List::new(items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("")
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      for effect in self.state.handle_event(event) {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    for effect in self.state.start() {
      self.execute_effect(effect);
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = self.state.handle_key(key);

      let dispatch = self.state.dispatch_command(command);

      for effect in dispatch.effects {
        self.execute_effect(effect);
      }

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }
}
