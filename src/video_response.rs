use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
  #[serde(default)]
  pub(crate) items: Vec<VideoResource>,
}

impl VideoListResponse {
  pub(crate) fn title(self) -> Option<String> {
    self.items.into_iter().next().map(|video| video.snippet.title)
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoResource {
  pub(crate) snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoSnippet {
  pub(crate) title: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_item_provides_the_title() {
    let response: VideoListResponse = serde_json::from_str(
      r#"{"items": [{"snippet": {"title": "Town Hall, March 2024"}}]}"#,
    )
    .unwrap();

    assert_eq!(response.title().as_deref(), Some("Town Hall, March 2024"));
  }

  #[test]
  fn empty_items_mean_no_title() {
    let response: VideoListResponse =
      serde_json::from_str(r#"{"items": []}"#).unwrap();

    assert_eq!(response.title(), None);
  }
}
