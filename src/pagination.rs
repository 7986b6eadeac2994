#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Pagination {
  pub(crate) has_next: bool,
  pub(crate) has_prev: bool,
  pub(crate) page: usize,
  pub(crate) total: usize,
  pub(crate) total_pages: usize,
}

impl Pagination {
  pub(crate) fn describe(&self) -> String {
    format!("page {} of {}", self.page, self.total_pages.max(1))
  }

  pub(crate) fn new(page: usize, page_size: usize, total: usize) -> Self {
    let total_pages = total.div_ceil(page_size.max(1));

    Self {
      has_next: page < total_pages,
      has_prev: page > 1,
      page,
      total,
      total_pages,
    }
  }
}
