use super::*;

pub(crate) type QueryParameters = Vec<(&'static str, String)>;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SortField {
  #[default]
  CreatedAt,
  Id,
  UpdatedAt,
}

impl SortField {
  pub(crate) fn as_str(self) -> &'static str {
    match self {
      Self::CreatedAt => "created_at",
      Self::Id => "id",
      Self::UpdatedAt => "updated_at",
    }
  }

  pub(crate) fn next(self) -> Self {
    match self {
      Self::CreatedAt => Self::UpdatedAt,
      Self::UpdatedAt => Self::Id,
      Self::Id => Self::CreatedAt,
    }
  }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SortOrder {
  Asc,
  #[default]
  Desc,
}

impl SortOrder {
  pub(crate) fn as_str(self) -> &'static str {
    match self {
      Self::Asc => "asc",
      Self::Desc => "desc",
    }
  }

  pub(crate) fn toggled(self) -> Self {
    match self {
      Self::Asc => Self::Desc,
      Self::Desc => Self::Asc,
    }
  }
}

/// Client-side parameters for the comment list request. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct QueryState {
  pub(crate) page: usize,
  pub(crate) page_size: usize,
  pub(crate) parent: Option<u64>,
  pub(crate) post: Option<u64>,
  pub(crate) reply: ReplyTarget,
  pub(crate) search: String,
  pub(crate) sort_by: SortField,
  pub(crate) sort_order: SortOrder,
}

impl QueryState {
  pub(crate) fn build_query(&self) -> QueryParameters {
    let mut parameters = vec![
      ("page", self.page.to_string()),
      ("page_size", self.page_size.to_string()),
      ("sort_by", self.sort_by.as_str().to_string()),
      ("sort_order", self.sort_order.as_str().to_string()),
    ];

    if !self.search.is_empty() {
      parameters.push(("search", self.search.clone()));
    }

    if let Some(parent) = self.parent {
      parameters.push(("parent", parent.to_string()));
    }

    if let Some(post) = self.post {
      parameters.push(("post_id", post.to_string()));
    }

    parameters
  }

  pub(crate) fn clear_search(&mut self) {
    self.search.clear();
    self.page = 1;
  }

  pub(crate) fn cycle_sort_field(&mut self) {
    self.sort_by = self.sort_by.next();
    self.page = 1;
  }

  pub(crate) fn focus_thread(&mut self, id: u64) {
    self.parent = Some(id);
    self.page = 1;
  }

  pub(crate) fn new(config: &Config) -> Self {
    Self {
      page: 1,
      page_size: config.page_size,
      parent: None,
      post: config.post_id,
      reply: ReplyTarget::Idle,
      search: String::new(),
      sort_by: config.sort_by,
      sort_order: config.sort_order,
    }
  }

  pub(crate) fn next_page(&mut self) {
    self.page = self.page.saturating_add(1);
  }

  /// Returns false when already on the first page.
  pub(crate) fn previous_page(&mut self) -> bool {
    if self.page > 1 {
      self.page -= 1;
      true
    } else {
      false
    }
  }

  /// Scoping to another post starts a fresh query for that post.
  pub(crate) fn scope_to_post(&mut self, post: Option<u64>) {
    self.post = post;
    self.parent = None;
    self.search.clear();
    self.reply.cancel();
    self.page = 1;
  }

  pub(crate) fn set_search(&mut self, query: &str) {
    self.search = query.trim().to_string();
    self.page = 1;
  }

  pub(crate) fn toggle_sort_order(&mut self) {
    self.sort_order = self.sort_order.toggled();
    self.page = 1;
  }

  pub(crate) fn unfocus_thread(&mut self) -> bool {
    if self.parent.take().is_some() {
      self.page = 1;
      true
    } else {
      false
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn state() -> QueryState {
    QueryState::new(&Config::default())
  }

  fn value<'a>(parameters: &'a QueryParameters, key: &str) -> Option<&'a str> {
    parameters
      .iter()
      .find(|(name, _)| *name == key)
      .map(|(_, value)| value.as_str())
  }

  #[test]
  fn defaults_request_newest_first() {
    let parameters = state().build_query();

    assert_eq!(
      parameters,
      vec![
        ("page", "1".to_string()),
        ("page_size", "10".to_string()),
        ("sort_by", "created_at".to_string()),
        ("sort_order", "desc".to_string()),
      ]
    );
  }

  #[test]
  fn search_is_omitted_when_empty() {
    let mut state = state();

    state.set_search("   ");

    assert_eq!(value(&state.build_query(), "search"), None);
  }

  #[test]
  fn search_is_sent_verbatim() {
    let mut state = state();

    state.set_search("foo bar");

    assert_eq!(value(&state.build_query(), "search"), Some("foo bar"));
  }

  #[test]
  fn thread_focus_adds_parent_filter() {
    let mut state = state();

    state.next_page();
    state.focus_thread(12);

    let parameters = state.build_query();

    assert_eq!(value(&parameters, "parent"), Some("12"));
    assert_eq!(value(&parameters, "page"), Some("1"));

    assert!(state.unfocus_thread());
    assert!(!state.unfocus_thread());
    assert_eq!(value(&state.build_query(), "parent"), None);
  }

  #[test]
  fn post_scope_adds_post_filter() {
    let mut state = state();

    state.set_search("rust");
    state.scope_to_post(Some(3));

    let parameters = state.build_query();

    assert_eq!(value(&parameters, "post_id"), Some("3"));
    assert_eq!(value(&parameters, "search"), None);
  }

  #[test]
  fn filter_changes_reset_the_page() {
    let mut state = state();

    state.next_page();
    state.next_page();
    assert_eq!(state.page, 3);

    state.set_search("foo");
    assert_eq!(state.page, 1);

    state.next_page();
    state.cycle_sort_field();
    assert_eq!(state.page, 1);
    assert_eq!(state.sort_by, SortField::UpdatedAt);

    state.next_page();
    state.toggle_sort_order();
    assert_eq!(state.page, 1);
    assert_eq!(state.sort_order, SortOrder::Asc);

    state.next_page();
    state.clear_search();
    assert_eq!(state.page, 1);
    assert!(state.search.is_empty());
  }

  #[test]
  fn previous_page_stops_at_first_page() {
    let mut state = state();

    assert!(!state.previous_page());

    state.next_page();

    assert!(state.previous_page());
    assert_eq!(state.page, 1);
  }

  #[test]
  fn sort_fields_cycle_through_every_field() {
    let mut field = SortField::CreatedAt;

    let mut seen = Vec::new();

    for _ in 0..3 {
      seen.push(field.as_str());
      field = field.next();
    }

    assert_eq!(seen, vec!["created_at", "updated_at", "id"]);
    assert_eq!(field, SortField::CreatedAt);
  }
}
