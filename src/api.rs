use super::*;

#[derive(Clone, Debug)]
pub(crate) struct ReplyPage {
  pub(crate) comments: Vec<Comment>,
  pub(crate) next_page_token: Option<String>,
}

#[derive(Clone, Debug)]
pub(crate) struct Thread {
  pub(crate) comment: Comment,
  pub(crate) replies: Vec<Comment>,
  pub(crate) total_reply_count: u64,
}

#[derive(Clone, Debug)]
pub(crate) struct ThreadPage {
  pub(crate) next_page_token: Option<String>,
  pub(crate) threads: Vec<Thread>,
}

#[derive(Clone, Debug)]
pub(crate) struct ThreadRequest {
  pub(crate) include_replies: bool,
  pub(crate) page_size: u8,
  pub(crate) page_token: Option<String>,
  pub(crate) video_id: String,
}

pub(crate) trait CommentApi {
  async fn list_replies(
    &self,
    video_id: &str,
    parent_id: &str,
    page_token: Option<&str>,
  ) -> Result<ReplyPage, ApiError>;

  async fn list_threads(
    &self,
    request: &ThreadRequest,
  ) -> Result<ThreadPage, ApiError>;

  async fn video_title(
    &self,
    video_id: &str,
  ) -> Result<Option<String>, ApiError>;
}
