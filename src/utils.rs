use super::*;

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn deserialize_null_default<'de, D, T>(
  deserializer: D,
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
  timestamp
    .with_timezone(&Local)
    .format("%Y-%m-%d %H:%M")
    .to_string()
}

/// Centers a box of the desired size inside `area`, shrinking it to fit.
pub(crate) fn popup_area(area: Rect, width: usize, height: usize) -> Rect {
  fn saturating_usize_to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
  }

  let available_width = area.width.saturating_sub(2).max(1);
  let available_height = area.height.saturating_sub(2).max(1);

  let width = available_width
    .clamp(1, saturating_usize_to_u16(width).max(1))
    .min(area.width);

  let height = available_height
    .clamp(1, saturating_usize_to_u16(height).max(1))
    .min(area.height);

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;

  Rect::new(x, y, width, height)
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = text.chars().take(max_chars).collect::<String>();

  result.truncate(result.trim_end().len());
  result.push_str("...");

  result
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.lines() {
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
      let word_width = word.chars().count();

      if current.is_empty() {
        current.push_str(word);
        current_width = word_width;
      } else if current_width + 1 + word_width <= width {
        current.push(' ');
        current.push_str(word);
        current_width += 1 + word_width;
      } else {
        lines.push(std::mem::take(&mut current));
        current.push_str(word);
        current_width = word_width;
      }
    }

    lines.push(current);
  }

  lines
}
