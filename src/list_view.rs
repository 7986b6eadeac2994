pub(crate) struct ListView<T> {
  items: Vec<T>,
  offset: usize,
  selected: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl<T> ListView<T> {
  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    let target = if delta >= 0 {
      self.selected.saturating_add(delta.unsigned_abs())
    } else {
      self.selected.saturating_sub(delta.unsigned_abs())
    };

    self.set_selected(target);
  }

  pub(crate) fn new(items: Vec<T>) -> Self {
    Self {
      items,
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.items.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  /// Swaps in a freshly loaded page, keeping the cursor where it was when
  /// the new page is long enough.
  pub(crate) fn replace(&mut self, items: Vec<T>) {
    self.items = items;
    self.offset = 0;
    self.set_selected(self.selected);
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.items.is_empty() {
      None
    } else {
      Some(self.selected.min(self.items.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self
      .selected_index()
      .and_then(|index| self.items.get(index))
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.items.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.items.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.items.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.items.len().saturating_sub(1));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_view_has_no_selection() {
    let view = ListView::<u64>::default();

    assert_eq!(view.selected_index(), None);
    assert!(view.selected_item().is_none());
    assert_eq!(view.offset(), 0);
  }

  #[test]
  fn movement_is_clamped_to_bounds() {
    let mut view = ListView::new(vec![1, 2, 3]);

    view.move_by(-4);
    assert_eq!(view.selected_item(), Some(&1));

    view.move_by(10);
    assert_eq!(view.selected_item(), Some(&3));

    view.set_offset(10);
    assert_eq!(view.offset(), 2);
  }

  #[test]
  fn replacing_a_page_keeps_the_cursor_in_range() {
    let mut view = ListView::new(vec!["a", "b", "c"]);
    view.set_selected(2);

    view.replace(vec!["d", "e", "f", "g"]);
    assert_eq!(view.selected_item(), Some(&"f"));

    view.replace(vec!["h"]);
    assert_eq!(view.selected_item(), Some(&"h"));

    view.replace(Vec::new());
    assert!(view.is_empty());
    assert_eq!(view.selected_index(), None);
  }
}
