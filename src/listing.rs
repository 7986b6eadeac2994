use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum EmptyState {
  NoComments,
  NoResults { query: String },
}

impl EmptyState {
  pub(crate) fn message(&self) -> String {
    match self {
      Self::NoComments => "No comments yet. Press c to write the first one.".into(),
      Self::NoResults { query } => {
        format!("No results for \"{}\"", truncate(query, 40))
      }
    }
  }
}

#[derive(Debug)]
pub(crate) enum Listing {
  Empty(EmptyState),
  Rows(Vec<RenderedRow>),
}

#[derive(Debug)]
pub(crate) struct PageResult {
  pub(crate) listing: Listing,
  /// Last page to load instead, when the requested page lies past the end.
  pub(crate) overshoot: Option<usize>,
  pub(crate) pagination: Pagination,
}

/// Folds a list response into the query state that produced it.
///
/// The returned state adopts the page and page size the backend actually
/// served. On error the caller keeps its previous state untouched.
pub(crate) fn apply_page_result(
  state: &QueryState,
  response: CommentPage,
) -> Result<(QueryState, PageResult), Error> {
  let CommentPage {
    comments,
    has_next,
    has_prev,
    page,
    page_size,
    total,
  } = response;

  let page_size = if page_size == 0 {
    state.page_size
  } else {
    page_size
  };

  let page = page.max(1);

  let pagination = Pagination::new(page, page_size, total);

  if (has_next, has_prev) != (pagination.has_next, pagination.has_prev) {
    tracing::debug!(
      page,
      total,
      has_next,
      has_prev,
      "backend navigation flags disagree with page counts"
    );
  }

  let mut next = state.clone();

  next.page = page;
  next.page_size = page_size;

  if total == 0 {
    let empty = if state.search.is_empty() {
      EmptyState::NoComments
    } else {
      EmptyState::NoResults {
        query: state.search.clone(),
      }
    };

    return Ok((
      next,
      PageResult {
        listing: Listing::Empty(empty),
        overshoot: None,
        pagination,
      },
    ));
  }

  let overshoot = (comments.is_empty() && page > pagination.total_pages)
    .then_some(pagination.total_pages);

  Ok((
    next,
    PageResult {
      listing: Listing::Rows(render(comments)?),
      overshoot,
      pagination,
    },
  ))
}

#[cfg(test)]
mod tests {
  use {super::*, crate::render::tests::comment};

  fn state(search: &str) -> QueryState {
    let mut state = QueryState::new(&Config::default());
    state.set_search(search);
    state
  }

  fn response(comments: Vec<Comment>, page: usize, total: usize) -> CommentPage {
    CommentPage {
      comments,
      has_next: false,
      has_prev: page > 1,
      page,
      page_size: 10,
      total,
    }
  }

  #[test]
  fn pagination_is_recomputed_from_totals() {
    for (page, has_prev, has_next) in
      [(1, false, true), (2, true, true), (3, true, false)]
    {
      let (state, result) = apply_page_result(
        &state(""),
        response(vec![comment(1, Vec::new())], page, 23),
      )
      .unwrap();

      assert_eq!(state.page, page);
      assert_eq!(result.pagination.total_pages, 3);
      assert_eq!(result.pagination.has_prev, has_prev);
      assert_eq!(result.pagination.has_next, has_next);
    }
  }

  #[test]
  fn empty_listing_without_search_invites_first_comment() {
    let (_, result) =
      apply_page_result(&state(""), response(Vec::new(), 1, 0)).unwrap();

    let Listing::Empty(empty) = result.listing else {
      panic!("expected empty listing");
    };

    assert_eq!(empty, EmptyState::NoComments);
    assert!(empty.message().starts_with("No comments yet"));
  }

  #[test]
  fn empty_listing_with_search_names_the_query() {
    let (_, result) =
      apply_page_result(&state("foo"), response(Vec::new(), 1, 0)).unwrap();

    let Listing::Empty(empty) = result.listing else {
      panic!("expected empty listing");
    };

    assert_eq!(
      empty,
      EmptyState::NoResults {
        query: "foo".into()
      }
    );

    assert_eq!(empty.message(), "No results for \"foo\"");
  }

  #[test]
  fn rows_are_rendered_from_the_page() {
    let (_, result) = apply_page_result(
      &state(""),
      response(
        vec![comment(1, vec![comment(2, Vec::new())]), comment(3, Vec::new())],
        1,
        2,
      ),
    )
    .unwrap();

    let Listing::Rows(rows) = result.listing else {
      panic!("expected rows");
    };

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].depth, 1);
  }

  #[test]
  fn page_past_the_end_requests_the_last_page() {
    let (_, result) =
      apply_page_result(&state(""), response(Vec::new(), 4, 23)).unwrap();

    assert_eq!(result.overshoot, Some(3));
  }

  #[test]
  fn backend_page_size_is_adopted() {
    let mut page = response(vec![comment(1, Vec::new())], 1, 1);
    page.page_size = 20;

    let (state, _) = apply_page_result(&state(""), page).unwrap();

    assert_eq!(state.page_size, 20);
  }

  #[test]
  fn malformed_tree_is_reported() {
    let result = apply_page_result(
      &state(""),
      response(vec![comment(1, Vec::new()), comment(1, Vec::new())], 1, 2),
    );

    assert!(matches!(result, Err(Error::DuplicateComment { id: 1 })));
  }
}
