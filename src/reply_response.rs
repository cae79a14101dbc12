use super::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReplyListResponse {
  #[serde(default)]
  pub(crate) items: Vec<CommentResource>,
  pub(crate) next_page_token: Option<String>,
}

impl ReplyListResponse {
  pub(crate) fn into_page(self, video_id: &str, parent_id: &str) -> ReplyPage {
    ReplyPage {
      comments: self
        .items
        .into_iter()
        .map(|reply| {
          reply.into_comment(video_id, Some(parent_id.to_owned()))
        })
        .collect(),
      next_page_token: self.next_page_token,
    }
  }
}
