use super::*;

pub(crate) enum Input {
  Compose(Composer),
  ConfirmDelete(ConfirmDelete),
  Search(SearchInput),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListStatus {
  Empty(String),
  Failed(String),
  Loading,
  Ready,
}

struct PendingDelete {
  id: u64,
  request_id: u64,
}

struct PendingLoad {
  focus: Option<u64>,
  query: QueryState,
  request_id: u64,
}

struct PendingSubmit {
  parent: Option<u64>,
  request_id: u64,
}

pub(crate) struct State {
  comment_status: ListStatus,
  comments: CommentView,
  failed_query: Option<QueryState>,
  help: HelpView,
  input: Option<Input>,
  list_height: usize,
  message: String,
  mode: Mode,
  next_request_id: u64,
  pagination: Pagination,
  pending_delete: Option<PendingDelete>,
  pending_effects: Vec<Effect>,
  pending_load: Option<PendingLoad>,
  pending_posts: Option<u64>,
  pending_submit: Option<PendingSubmit>,
  post_page: usize,
  post_pagination: Pagination,
  post_status: ListStatus,
  posts: ListView<Post>,
  posts_enabled: bool,
  query: QueryState,
  transient_message: Option<TransientMessage>,
  web_url: String,
}

impl State {
  fn back(&mut self) -> bool {
    if self.query.reply.is_replying() {
      self.query.reply.cancel();
      self.set_transient_message(Tone::Info, "Reply cancelled".into());
      return false;
    }

    let mut query = self.query.clone();

    if query.unfocus_thread() {
      self.load_comments(query, self.selected_comment_id());
      return false;
    }

    if !query.search.is_empty() {
      query.clear_search();
      self.load_comments(query, None);
      return false;
    }

    if self.posts_enabled {
      self.show_posts();
      return false;
    }

    true
  }

  fn cancel_input(&mut self) {
    self.message = self.mode_status().into();

    if let Some(Input::Compose(composer)) = self.input.take()
      && composer.is_submitting()
    {
      self.set_transient_message(
        Tone::Info,
        "Form closed; the submission is still in flight".into(),
      );
    }
  }

  fn close_composer(&mut self) {
    if matches!(
      &self.input,
      Some(Input::Compose(composer)) if composer.is_submitting()
    ) {
      self.input = None;
      self.message = self.mode_status().into();
    }
  }

  pub(crate) fn comment_status(&self) -> &ListStatus {
    &self.comment_status
  }

  pub(crate) fn comments(&self) -> &CommentView {
    &self.comments
  }

  pub(crate) fn comments_mut(&mut self) -> &mut CommentView {
    &mut self.comments
  }

  fn compose(&mut self, kind: ComposerKind) {
    self.input = Some(Input::Compose(Composer::new(kind)));
    self.message = COMPOSE_STATUS.into();
  }

  fn confirm_delete(&mut self) {
    let Some(Input::ConfirmDelete(confirm)) = self.input.take() else {
      return;
    };

    self.message = self.mode_status().into();

    if self.pending_delete.is_some() {
      self.set_transient_message(
        Tone::Error,
        "Another delete is still in progress".into(),
      );
      return;
    }

    let request_id = self.next_request_id();

    self.pending_delete = Some(PendingDelete {
      id: confirm.id,
      request_id,
    });

    self.message = DELETING_STATUS.into();

    self.pending_effects.push(Effect::DeleteComment {
      id: confirm.id,
      request_id,
    });
  }

  fn delete_selected(&mut self) {
    if self.pending_delete.is_some() {
      self.set_transient_message(
        Tone::Error,
        "Another delete is still in progress".into(),
      );
      return;
    }

    let Some(index) = self.comments.selected_index() else {
      return;
    };

    let Some(row) = self.comments.row(index) else {
      return;
    };

    let confirm = ConfirmDelete {
      author: row.comment.author.clone(),
      id: row.id(),
      replies: self.comments.subtree_size(index),
    };

    self.input = Some(Input::ConfirmDelete(confirm));
    self.message = CONFIRM_STATUS.into();
  }

  pub(crate) fn dispatch_command(&mut self, command: Command) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Back => should_exit = self.back(),
      Command::CancelInput => self.cancel_input(),
      Command::ClearSearch => {
        if !self.query.search.is_empty() {
          let mut query = self.query.clone();
          query.clear_search();
          self.load_comments(query, None);
        }
      }
      Command::ComposeComment => {
        self.query.reply.cancel();
        self.compose(ComposerKind::Comment);
      }
      Command::ComposePost => {
        if self.posts_enabled {
          self.compose(ComposerKind::Post);
        }
      }
      Command::CycleSortField => {
        let mut query = self.query.clone();
        query.cycle_sort_field();
        self.load_comments(query, None);
      }
      Command::DeleteSelected => self.delete_selected(),
      Command::FocusThread => self.focus_thread(),
      Command::HideHelp => self.help.hide(),
      Command::NextPage => self.next_page(),
      Command::None => {}
      Command::OpenInBrowser => self.pending_effects.push(Effect::OpenUrl {
        url: self.web_url.clone(),
      }),
      Command::OpenSelectedPost => self.open_selected_post(),
      Command::PreviousPage => self.previous_page(),
      Command::Quit => should_exit = true,
      Command::Reload => self.reload(),
      Command::ReplyToSelected => self.reply_to_selected(),
      Command::ShowHelp => self.help.show(),
      Command::ShowPosts => {
        if self.posts_enabled {
          self.show_posts();
        }
      }
      Command::StartSearch => {
        let input = SearchInput::new(&self.query.search);
        self.message = input.prompt();
        self.input = Some(Input::Search(input));
      }
      Command::SubmitInput => self.submit_input(),
      Command::ToggleSortOrder => {
        let mut query = self.query.clone();
        query.toggle_sort_order();
        self.load_comments(query, None);
      }
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  fn focus_thread(&mut self) {
    let Some(root) = self.comments.selected_root() else {
      return;
    };

    let root_id = root.id();

    if self.query.parent == Some(root_id) {
      return;
    }

    let mut query = self.query.clone();
    query.focus_thread(root_id);

    self.load_comments(query, self.selected_comment_id());
  }

  fn handle_comments(
    &mut self,
    request_id: u64,
    result: Result<CommentPage, Error>,
  ) {
    let Some(pending) = self
      .pending_load
      .take_if(|pending| pending.request_id == request_id)
    else {
      tracing::debug!(request_id, "ignoring superseded comment page");
      return;
    };

    match result.and_then(|page| apply_page_result(&pending.query, page)) {
      Ok((mut query, page)) => {
        if let Some(last) = page.overshoot {
          query.page = last;
          self.load_comments(query, pending.focus);
          return;
        }

        let focus = pending.focus.or_else(|| self.selected_comment_id());

        query.reply = std::mem::take(&mut self.query.reply);

        self.query = query;
        self.failed_query = None;
        self.pagination = page.pagination;

        match page.listing {
          Listing::Rows(rows) => {
            self.comments = CommentView::new(rows, focus);
            self.comment_status = ListStatus::Ready;
          }
          Listing::Empty(empty) => {
            self.comments = CommentView::default();
            self.comment_status = ListStatus::Empty(empty.message());
          }
        }
      }
      Err(error) => {
        tracing::warn!(%error, kind = ?error.kind(), "failed to load comments");

        self.comment_status =
          ListStatus::Failed(format!("Could not load comments: {error}"));

        self.failed_query = Some(pending.query);
      }
    }
  }

  /// Folds a network result back into the state, returning any follow-up
  /// requests it triggers.
  pub(crate) fn handle_event(&mut self, event: Event) -> Vec<Effect> {
    match event {
      Event::Comments { request_id, result } => {
        self.handle_comments(request_id, result);
      }
      Event::CommentCreated { request_id, result } => {
        let Some(submitted) = self
          .pending_submit
          .take_if(|pending| pending.request_id == request_id)
        else {
          return Vec::new();
        };

        match result {
          Ok(comment) => {
            self.close_composer();

            if self.query.reply.parent_id() == submitted.parent {
              self.query.reply.submitted();
            }

            self.set_transient_message(Tone::Success, "Comment added".into());
            self.load_comments(self.query.clone(), Some(comment.id));
          }
          Err(error) => self.submission_failed("comment", &error),
        }
      }
      Event::CommentDeleted {
        id,
        request_id,
        result,
      } => {
        if !self
          .pending_delete
          .as_ref()
          .is_some_and(|pending| pending.request_id == request_id)
        {
          return Vec::new();
        }

        self.pending_delete = None;
        self.message = self.mode_status().into();

        match result {
          Ok(()) => {
            if let Some(target) = self.query.reply.parent_id()
              && self.comments.subtree_contains(id, target)
            {
              self.query.reply.cancel();
            }

            self.set_transient_message(Tone::Success, "Comment deleted".into());
            self.load_comments(self.query.clone(), None);
          }
          Err(error) => {
            tracing::warn!(id, %error, "failed to delete comment");

            self.set_transient_message(
              Tone::Error,
              format!("Could not delete comment: {error}"),
            );
          }
        }
      }
      Event::PostCreated { request_id, result } => {
        if self
          .pending_submit
          .take_if(|pending| pending.request_id == request_id)
          .is_none()
        {
          return Vec::new();
        }

        match result {
          Ok(post) => {
            self.close_composer();

            self.set_transient_message(
              Tone::Success,
              format!("Post \"{}\" published", truncate(&post.title, 40)),
            );

            self.load_posts(1);
          }
          Err(error) => self.submission_failed("post", &error),
        }
      }
      Event::Posts { request_id, result } => {
        self.handle_posts(request_id, result);
      }
    }

    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    if self.help.is_visible() {
      return HelpView::handle_key(key);
    }

    if let Some(input) = self.input.as_mut() {
      return match input {
        Input::Compose(composer) => composer.handle_key(key),
        Input::ConfirmDelete(_) => ConfirmDelete::handle_key(key),
        Input::Search(search) => {
          let command = search.handle_key(key);
          self.message = search.prompt();
          command
        }
      };
    }

    let page = self.list_height.max(1);

    match self.mode {
      Mode::Comments => Mode::comments_key(&mut self.comments, key, page),
      Mode::Posts => Mode::posts_key(&mut self.posts, key, page),
    }
  }

  fn handle_posts(&mut self, request_id: u64, result: Result<PostPage, Error>) {
    if self.pending_posts != Some(request_id) {
      tracing::debug!(request_id, "ignoring superseded post page");
      return;
    }

    self.pending_posts = None;

    match result {
      Ok(page) => {
        let pagination =
          Pagination::new(page.page.max(1), page.page_size, page.total);

        if page.posts.is_empty() && page.total > 0 && pagination.page > pagination.total_pages {
          self.load_posts(pagination.total_pages);
          return;
        }

        self.post_page = pagination.page;
        self.post_pagination = pagination;
        self.posts.replace(page.posts);

        self.post_status = if page.total == 0 {
          ListStatus::Empty("No posts yet. Press c to write the first one.".into())
        } else {
          ListStatus::Ready
        };
      }
      Err(error) => {
        tracing::warn!(%error, "failed to load posts");
        self.post_status = ListStatus::Failed(format!("Could not load posts: {error}"));
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn input(&self) -> Option<&Input> {
    self.input.as_ref()
  }

  pub(crate) fn is_deleting(&self, id: u64) -> bool {
    self
      .pending_delete
      .as_ref()
      .is_some_and(|pending| pending.id == id)
  }

  fn load_comments(&mut self, query: QueryState, focus: Option<u64>) {
    let request_id = self.next_request_id();

    if let Some(previous) = self.pending_load.as_ref() {
      tracing::debug!(
        superseded = previous.request_id,
        request_id,
        "replacing in-flight comment request"
      );
    }

    self.pending_load = Some(PendingLoad {
      focus,
      query: query.clone(),
      request_id,
    });

    self.comment_status = ListStatus::Loading;

    self
      .pending_effects
      .push(Effect::FetchComments { query, request_id });
  }

  fn load_posts(&mut self, page: usize) {
    let request_id = self.next_request_id();

    self.pending_posts = Some(request_id);
    self.post_status = ListStatus::Loading;

    self
      .pending_effects
      .push(Effect::FetchPosts {
        page,
        page_size: self.query.page_size,
        request_id,
      });
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> Mode {
    self.mode
  }

  fn mode_status(&self) -> &'static str {
    match self.mode {
      Mode::Comments => COMMENTS_STATUS,
      Mode::Posts => POSTS_STATUS,
    }
  }

  pub(crate) fn new(config: &Config, web_url: String) -> Self {
    Self {
      comment_status: ListStatus::Loading,
      comments: CommentView::default(),
      failed_query: None,
      help: HelpView::new(),
      input: None,
      list_height: 0,
      message: COMMENTS_STATUS.into(),
      mode: Mode::Comments,
      next_request_id: 0,
      pagination: Pagination::default(),
      pending_delete: None,
      pending_effects: Vec::new(),
      pending_load: None,
      pending_posts: None,
      pending_submit: None,
      post_page: 1,
      post_pagination: Pagination::default(),
      post_status: ListStatus::Loading,
      posts: ListView::default(),
      posts_enabled: config.posts,
      query: QueryState::new(config),
      transient_message: None,
      web_url,
    }
  }

  fn next_page(&mut self) {
    match self.mode {
      Mode::Comments => {
        if !self.pagination.has_next {
          self.set_transient_message(Tone::Info, "Already on the last page".into());
          return;
        }

        let mut query = self.query.clone();
        query.next_page();
        self.load_comments(query, None);
      }
      Mode::Posts => {
        if self.post_pagination.has_next {
          self.load_posts(self.post_page.saturating_add(1));
        } else {
          self.set_transient_message(Tone::Info, "Already on the last page".into());
        }
      }
    }
  }

  fn next_request_id(&mut self) -> u64 {
    let request_id = self.next_request_id;
    self.next_request_id = self.next_request_id.wrapping_add(1);
    request_id
  }

  fn open_selected_post(&mut self) {
    let Some(post) = self.posts.selected_item() else {
      return;
    };

    let id = post.id;

    self.query.scope_to_post(Some(id));

    self.mode = Mode::Comments;
    self.message = COMMENTS_STATUS.into();
    self.comments = CommentView::default();
    self.pagination = Pagination::default();

    self.load_comments(self.query.clone(), None);
  }

  pub(crate) fn pagination(&self) -> &Pagination {
    &self.pagination
  }

  pub(crate) fn post_pagination(&self) -> &Pagination {
    &self.post_pagination
  }

  pub(crate) fn post_status(&self) -> &ListStatus {
    &self.post_status
  }

  pub(crate) fn posts(&self) -> &ListView<Post> {
    &self.posts
  }

  pub(crate) fn posts_mut(&mut self) -> &mut ListView<Post> {
    &mut self.posts
  }

  fn previous_page(&mut self) {
    match self.mode {
      Mode::Comments => {
        let mut query = self.query.clone();

        if query.previous_page() {
          self.load_comments(query, None);
        } else {
          self.set_transient_message(Tone::Info, "Already on the first page".into());
        }
      }
      Mode::Posts => {
        if self.post_page > 1 {
          self.load_posts(self.post_page - 1);
        } else {
          self.set_transient_message(Tone::Info, "Already on the first page".into());
        }
      }
    }
  }

  pub(crate) fn query(&self) -> &QueryState {
    &self.query
  }

  /// Retries the failed request when there is one, otherwise refreshes
  /// the current page.
  fn reload(&mut self) {
    match self.mode {
      Mode::Comments => {
        let query = self
          .failed_query
          .clone()
          .unwrap_or_else(|| self.query.clone());

        self.load_comments(query, self.selected_comment_id());
      }
      Mode::Posts => self.load_posts(self.post_page),
    }
  }

  fn reply_to_selected(&mut self) {
    let Some(row) = self.comments.selected_row() else {
      return;
    };

    let (id, author) = (row.id(), row.comment.author.clone());

    self.query.reply.reply(id, author);

    self.compose(ComposerKind::Comment);
  }

  /// Title of the post the comment list is scoped to, when known.
  pub(crate) fn scope_title(&self) -> Option<String> {
    let id = self.query.post?;

    Some(
      self
        .posts
        .items()
        .iter()
        .find(|post| post.id == id)
        .map_or_else(|| format!("post #{id}"), |post| post.title.clone()),
    )
  }

  fn selected_comment_id(&self) -> Option<u64> {
    self.comments.selected_row().map(RenderedRow::id)
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, tone: Tone, text: String) {
    let restore = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.restore().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(tone, text.clone(), restore));

    self.message = text;
  }

  fn show_posts(&mut self) {
    self.mode = Mode::Posts;
    self.message = POSTS_STATUS.into();

    if self.posts.is_empty() && self.pending_posts.is_none() {
      self.load_posts(self.post_page);
    }
  }

  /// Requests that populate the first screen.
  pub(crate) fn start(&mut self) -> Vec<Effect> {
    if self.posts_enabled && self.query.post.is_none() {
      self.show_posts();
    } else {
      self.load_comments(self.query.clone(), None);
    }

    std::mem::take(&mut self.pending_effects)
  }

  fn submission_failed(&mut self, what: &str, error: &Error) {
    tracing::warn!(%error, "failed to submit {what}");

    if let Some(Input::Compose(composer)) = self.input.as_mut()
      && composer.is_submitting()
    {
      composer.set_submitting(false);
    }

    self.set_transient_message(
      Tone::Error,
      format!("Could not submit {what}: {error}"),
    );
  }

  fn submit_composer(&mut self) {
    if self.pending_submit.is_some() {
      self.set_transient_message(Tone::Info, "Still submitting...".into());
      return;
    }

    let Some(Input::Compose(composer)) = self.input.as_ref() else {
      return;
    };

    let submission = match composer
      .submission(&self.query.reply, self.query.post)
    {
      Ok(Submission::Comment(mut comment)) => {
        comment.parent_id = comment.parent_id.or(self.query.parent);
        Submission::Comment(comment)
      }
      Ok(submission) => submission,
      Err(error) => {
        self.set_transient_message(Tone::Error, format!("error: {error}"));
        return;
      }
    };

    let request_id = self.next_request_id();

    self.pending_submit = Some(PendingSubmit {
      parent: match &submission {
        Submission::Comment(comment) => comment.parent_id,
        Submission::Post(_) => None,
      },
      request_id,
    });

    if let Some(Input::Compose(composer)) = self.input.as_mut() {
      composer.set_submitting(true);
    }

    self.pending_effects.push(match submission {
      Submission::Comment(comment) => Effect::CreateComment {
        comment,
        request_id,
      },
      Submission::Post(post) => Effect::CreatePost { post, request_id },
    });
  }

  fn submit_input(&mut self) {
    match self.input.as_ref() {
      Some(Input::Compose(_)) => self.submit_composer(),
      Some(Input::ConfirmDelete(_)) => self.confirm_delete(),
      Some(Input::Search(_)) => {
        let Some(Input::Search(search)) = self.input.take() else {
          return;
        };

        self.message = self.mode_status().into();

        let mut query = self.query.clone();
        query.set_search(&search.buffer);

        if query.search != self.query.search || self.failed_query.is_some() {
          self.load_comments(query, None);
        }
      }
      None => {}
    }
  }

  pub(crate) fn tone(&self) -> Tone {
    self
      .transient_message
      .as_ref()
      .map_or(Tone::Info, TransientMessage::tone)
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.text() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.restore().to_string();
        self.transient_message = None;
      }
    }
  }
}
