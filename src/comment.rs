use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Comment {
  pub(crate) author: String,
  pub(crate) id: String,
  pub(crate) like_count: u64,
  pub(crate) parent_id: Option<String>,
  pub(crate) published_at: DateTime<Utc>,
  pub(crate) text: String,
  pub(crate) video_id: String,
  pub(crate) video_title: String,
}
