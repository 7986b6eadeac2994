use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentPage {
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) comments: Vec<Comment>,
  #[serde(default)]
  pub(crate) has_next: bool,
  #[serde(default)]
  pub(crate) has_prev: bool,
  pub(crate) page: usize,
  pub(crate) page_size: usize,
  pub(crate) total: usize,
}
