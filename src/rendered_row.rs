use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RenderedRow {
  pub(crate) children: Vec<usize>,
  pub(crate) comment: Comment,
  pub(crate) depth: usize,
  pub(crate) parent: Option<usize>,
}

impl RenderedRow {
  pub(crate) fn body(&self) -> &str {
    self.comment.content.as_str()
  }

  pub(crate) fn has_children(&self) -> bool {
    !self.children.is_empty()
  }

  pub(crate) fn header(&self) -> String {
    let timestamp = format_timestamp(&self.comment.created_at);

    match self.children.len() {
      0 => format!("{} · {timestamp}", self.comment.author),
      1 => format!("{} · {timestamp} · 1 reply", self.comment.author),
      count => format!("{} · {timestamp} · {count} replies", self.comment.author),
    }
  }

  pub(crate) fn id(&self) -> u64 {
    self.comment.id
  }

  /// Indentation level for display; nesting deeper than
  /// [`MAX_VISUAL_LEVEL`] reuses the deepest level.
  pub(crate) fn level(&self) -> usize {
    self.depth.min(MAX_VISUAL_LEVEL)
  }
}
