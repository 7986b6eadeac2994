use super::*;

#[derive(Default)]
pub(crate) struct CommentView {
  expanded: Vec<bool>,
  pub(crate) offset: usize,
  rows: Vec<RenderedRow>,
  selected: Option<usize>,
}

impl CommentView {
  pub(crate) fn collapse_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(row) = self.rows.get(selected)
    {
      if self.is_expanded(selected) && row.has_children() {
        self.expanded[selected] = false;
      } else if let Some(parent) = row.parent {
        self.selected = Some(parent);
      }
    }

    self.ensure_selection_visible();
  }

  fn ensure_selection_visible(&mut self) {
    let mut current = self.selected;

    while let Some(index) = current {
      if self.is_visible(index) {
        self.selected = Some(index);
        return;
      }

      current = self.rows.get(index).and_then(|row| row.parent);
    }

    self.selected = self.visible_indexes().first().copied();
  }

  pub(crate) fn expand_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(row) = self.rows.get(selected)
    {
      if !row.has_children() {
        return;
      }

      if self.is_expanded(selected) {
        self.selected = row.children.first().copied();
      } else {
        self.expanded[selected] = true;
      }
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub(crate) fn is_expanded(&self, index: usize) -> bool {
    self.expanded.get(index).copied().unwrap_or(true)
  }

  fn is_visible(&self, index: usize) -> bool {
    let mut current = self.rows.get(index).and_then(|row| row.parent);

    while let Some(parent) = current {
      if !self.is_expanded(parent) {
        return false;
      }

      current = self.rows.get(parent).and_then(|row| row.parent);
    }

    true
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    let (visible, selected_pos) = self.visible_with_selection();

    if visible.is_empty() {
      self.selected = None;
      return;
    }

    let current = selected_pos.unwrap_or(0);
    let max_index = visible.len().saturating_sub(1);

    let target = if delta >= 0 {
      current.saturating_add(delta.unsigned_abs()).min(max_index)
    } else {
      current.saturating_sub(delta.unsigned_abs())
    };

    self.selected = Some(visible[target]);
  }

  /// Selects the row for `focus` when present, otherwise the first row.
  pub(crate) fn new(rows: Vec<RenderedRow>, focus: Option<u64>) -> Self {
    let selected = focus
      .and_then(|id| rows.iter().position(|row| row.id() == id))
      .or_else(|| (!rows.is_empty()).then_some(0));

    Self {
      expanded: vec![true; rows.len()],
      offset: 0,
      rows,
      selected,
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.move_by(isize::try_from(step).unwrap_or(isize::MAX));
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.move_by(-isize::try_from(step).unwrap_or(isize::MAX));
  }

  pub(crate) fn row(&self, index: usize) -> Option<&RenderedRow> {
    self.rows.get(index)
  }

  pub(crate) fn select_index_at(&mut self, pos: usize) {
    let visible = self.visible_indexes();

    self.selected = visible
      .get(pos.min(visible.len().saturating_sub(1)))
      .copied();
  }

  pub(crate) fn select_last(&mut self) {
    let visible = self.visible_indexes();
    self.selected = visible.last().copied();
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    self.selected
  }

  pub(crate) fn selected_row(&self) -> Option<&RenderedRow> {
    self.selected.and_then(|index| self.rows.get(index))
  }

  /// Top-level comment the selection belongs to.
  pub(crate) fn selected_root(&self) -> Option<&RenderedRow> {
    let mut index = self.selected?;

    while let Some(parent) = self.rows.get(index)?.parent {
      index = parent;
    }

    self.rows.get(index)
  }

  /// Whether `target` is `root` or one of its replies.
  pub(crate) fn subtree_contains(&self, root: u64, target: u64) -> bool {
    let Some(mut index) = self.rows.iter().position(|row| row.id() == target)
    else {
      return false;
    };

    loop {
      let Some(row) = self.rows.get(index) else {
        return false;
      };

      if row.id() == root {
        return true;
      }

      match row.parent {
        Some(parent) => index = parent,
        None => return false,
      }
    }
  }

  pub(crate) fn toggle_selected(&mut self) {
    if let Some(selected) = self.selected
      && self.rows.get(selected).is_some_and(RenderedRow::has_children)
    {
      self.expanded[selected] = !self.is_expanded(selected);
    }

    self.ensure_selection_visible();
  }

  /// Total replies below the row, at any depth.
  pub(crate) fn subtree_size(&self, index: usize) -> usize {
    self.rows.get(index).map_or(0, |row| {
      row
        .children
        .iter()
        .map(|&child| 1 + self.subtree_size(child))
        .sum()
    })
  }

  pub(crate) fn visible_indexes(&self) -> Vec<usize> {
    (0..self.rows.len())
      .filter(|&index| self.is_visible(index))
      .collect()
  }

  pub(crate) fn visible_with_selection(&self) -> (Vec<usize>, Option<usize>) {
    let visible = self.visible_indexes();

    let selected_pos = self
      .selected
      .and_then(|selected| visible.iter().position(|&index| index == selected));

    (visible, selected_pos)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::render::tests::comment};

  fn make_view(focus: Option<u64>) -> CommentView {
    let rows = render(vec![
      comment(1, vec![comment(2, vec![comment(3, Vec::new())])]),
      comment(4, Vec::new()),
    ])
    .unwrap();

    CommentView::new(rows, focus)
  }

  fn selected_id(view: &CommentView) -> Option<u64> {
    view.selected_row().map(RenderedRow::id)
  }

  #[test]
  fn new_selects_focused_comment_when_present() {
    assert_eq!(selected_id(&make_view(Some(3))), Some(3));
    assert_eq!(selected_id(&make_view(Some(99))), Some(1));
    assert_eq!(selected_id(&CommentView::new(Vec::new(), None)), None);
  }

  #[test]
  fn toggle_selected_collapses_and_expands_subtree() {
    let mut view = make_view(None);

    view.toggle_selected();
    assert_eq!(view.visible_indexes(), vec![0, 3]);

    view.toggle_selected();
    assert_eq!(view.visible_indexes(), vec![0, 1, 2, 3]);
  }

  #[test]
  fn collapse_selected_moves_to_parent_when_leaf_selected() {
    let mut view = make_view(Some(3));

    view.collapse_selected();
    assert_eq!(selected_id(&view), Some(2));

    view.collapse_selected();
    assert_eq!(selected_id(&view), Some(2));
    assert!(!view.is_expanded(1));
  }

  #[test]
  fn expand_selected_moves_into_first_child() {
    let mut view = make_view(None);

    view.expand_selected();
    assert_eq!(selected_id(&view), Some(2));
  }

  #[test]
  fn hidden_selection_is_promoted_to_visible_ancestor() {
    let mut view = make_view(Some(3));

    view.select_index_at(0);
    view.toggle_selected();
    view.move_by(1);

    assert_eq!(selected_id(&view), Some(4));
  }

  #[test]
  fn paging_is_clamped_to_visible_rows() {
    let mut view = make_view(None);

    view.page_down(10);
    assert_eq!(selected_id(&view), Some(4));

    view.page_up(10);
    assert_eq!(selected_id(&view), Some(1));

    view.select_last();
    assert_eq!(selected_id(&view), Some(4));
  }

  #[test]
  fn selected_root_walks_up_the_tree() {
    let view = make_view(Some(3));

    assert_eq!(view.selected_root().map(RenderedRow::id), Some(1));
  }

  #[test]
  fn subtree_contains_follows_parents() {
    let view = make_view(None);

    assert!(view.subtree_contains(1, 3));
    assert!(view.subtree_contains(2, 2));
    assert!(!view.subtree_contains(2, 4));
    assert!(!view.subtree_contains(1, 99));
  }

  #[test]
  fn subtree_size_counts_nested_replies() {
    let view = make_view(None);

    assert_eq!(view.subtree_size(0), 2);
    assert_eq!(view.subtree_size(3), 0);
  }
}
