use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentResource {
  pub(crate) id: String,
  pub(crate) snippet: CommentSnippet,
}

impl CommentResource {
  pub(crate) fn into_comment(
    self,
    video_id: &str,
    parent_id: Option<String>,
  ) -> Comment {
    Comment {
      author: self.snippet.author_display_name.unwrap_or_default(),
      id: self.id,
      like_count: self.snippet.like_count,
      parent_id: parent_id.or(self.snippet.parent_id),
      published_at: self.snippet.published_at,
      text: self
        .snippet
        .text_original
        .or(self.snippet.text_display)
        .unwrap_or_default(),
      video_id: self
        .snippet
        .video_id
        .unwrap_or_else(|| video_id.to_owned()),
      video_title: String::new(),
    }
  }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentSnippet {
  pub(crate) author_display_name: Option<String>,
  #[serde(default)]
  pub(crate) like_count: u64,
  pub(crate) parent_id: Option<String>,
  pub(crate) published_at: DateTime<Utc>,
  pub(crate) text_display: Option<String>,
  pub(crate) text_original: Option<String>,
  pub(crate) video_id: Option<String>,
}
