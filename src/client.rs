use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  api_key: String,
  client: reqwest::Client,
}

impl Client {
  const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

  async fn get_json<T: DeserializeOwned>(
    &self,
    endpoint: &str,
    query: &[(&str, &str)],
  ) -> Result<T, ApiError> {
    let response = self
      .client
      .get(format!("{}/{endpoint}", Self::API_BASE_URL))
      .query(query)
      .query(&[("key", self.api_key.as_str())])
      .send()
      .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
      return Err(ApiError::from_response(status, &body));
    }

    serde_json::from_str(&body)
      .map_err(|error| ApiError::Malformed(error.to_string()))
  }

  pub(crate) fn new(api_key: String) -> Self {
    Self {
      api_key,
      client: reqwest::Client::new(),
    }
  }
}

impl CommentApi for Client {
  async fn list_replies(
    &self,
    video_id: &str,
    parent_id: &str,
    page_token: Option<&str>,
  ) -> Result<ReplyPage, ApiError> {
    let mut query = vec![
      ("part", "snippet"),
      ("parentId", parent_id),
      ("maxResults", "100"),
      ("textFormat", "plainText"),
    ];

    if let Some(token) = page_token {
      query.push(("pageToken", token));
    }

    let response: ReplyListResponse =
      self.get_json("comments", &query).await?;

    Ok(response.into_page(video_id, parent_id))
  }

  async fn list_threads(
    &self,
    request: &ThreadRequest,
  ) -> Result<ThreadPage, ApiError> {
    let part = if request.include_replies {
      "snippet,replies"
    } else {
      "snippet"
    };

    let page_size = request.page_size.to_string();

    let mut query = vec![
      ("part", part),
      ("videoId", request.video_id.as_str()),
      ("maxResults", page_size.as_str()),
      ("textFormat", "plainText"),
    ];

    if let Some(token) = request.page_token.as_deref() {
      query.push(("pageToken", token));
    }

    let response: ThreadListResponse =
      self.get_json("commentThreads", &query).await?;

    Ok(response.into_page(&request.video_id))
  }

  async fn video_title(
    &self,
    video_id: &str,
  ) -> Result<Option<String>, ApiError> {
    let response: VideoListResponse = self
      .get_json("videos", &[("part", "snippet"), ("id", video_id)])
      .await?;

    Ok(response.title())
  }
}
