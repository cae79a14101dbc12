use super::*;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReplyList {
  #[serde(default)]
  pub(crate) comments: Vec<CommentResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThreadListResponse {
  #[serde(default)]
  pub(crate) items: Vec<ThreadResource>,
  pub(crate) next_page_token: Option<String>,
}

impl ThreadListResponse {
  pub(crate) fn into_page(self, video_id: &str) -> ThreadPage {
    ThreadPage {
      next_page_token: self.next_page_token,
      threads: self
        .items
        .into_iter()
        .map(|item| item.into_thread(video_id))
        .collect(),
    }
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ThreadResource {
  pub(crate) replies: Option<ReplyList>,
  pub(crate) snippet: ThreadSnippet,
}

impl ThreadResource {
  fn into_thread(self, video_id: &str) -> Thread {
    let comment = self
      .snippet
      .top_level_comment
      .into_comment(video_id, None);

    let parent_id = comment.id.clone();

    Thread {
      replies: self
        .replies
        .unwrap_or_default()
        .comments
        .into_iter()
        .map(|reply| reply.into_comment(video_id, Some(parent_id.clone())))
        .collect(),
      comment,
      total_reply_count: self.snippet.total_reply_count,
    }
  }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThreadSnippet {
  pub(crate) top_level_comment: CommentResource,
  #[serde(default)]
  pub(crate) total_reply_count: u64,
}
