use super::*;

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result: String = text.chars().take(max_chars).collect();

  result.truncate(result.trim_end().len());
  result.push_str("...");

  result
}
