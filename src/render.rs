use {super::*, std::collections::HashSet};

pub(crate) const MAX_TREE_DEPTH: usize = 48;

pub(crate) const MAX_VISUAL_LEVEL: usize = 5;

/// Flattens comment trees into rows in depth-first pre-order, so every
/// reply follows its parent and precedes the parent's later siblings.
pub(crate) fn render(comments: Vec<Comment>) -> Result<Vec<RenderedRow>, Error> {
  let mut rows = Vec::new();
  let mut seen = HashSet::new();

  for comment in comments {
    push_row(&mut rows, &mut seen, comment, None, 0)?;
  }

  Ok(rows)
}

fn push_row(
  rows: &mut Vec<RenderedRow>,
  seen: &mut HashSet<u64>,
  mut comment: Comment,
  parent: Option<usize>,
  depth: usize,
) -> Result<usize, Error> {
  if depth >= MAX_TREE_DEPTH {
    return Err(Error::TreeTooDeep);
  }

  if !seen.insert(comment.id) {
    return Err(Error::DuplicateComment { id: comment.id });
  }

  let children = std::mem::take(&mut comment.children);

  let index = rows.len();

  rows.push(RenderedRow {
    children: Vec::new(),
    comment,
    depth,
    parent,
  });

  let mut child_indexes = Vec::with_capacity(children.len());

  for child in children {
    child_indexes.push(push_row(
      rows,
      seen,
      child,
      Some(index),
      depth.saturating_add(1),
    )?);
  }

  if let Some(row) = rows.get_mut(index) {
    row.children = child_indexes;
  }

  Ok(index)
}
