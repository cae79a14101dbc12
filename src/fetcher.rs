use super::*;

pub(crate) struct CommentFetcher<'a, C> {
  api: &'a C,
  config: &'a Config,
}

impl<'a, C: CommentApi> CommentFetcher<'a, C> {
  async fn call<T, F, Fut>(
    &self,
    deadline: Option<Instant>,
    limiter: Option<&DefaultDirectRateLimiter>,
    mut operation: F,
  ) -> Result<T, FetchError>
  where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
  {
    let mut attempts = 0;

    loop {
      attempts += 1;

      if deadline.is_some_and(|at| Instant::now() >= at) {
        return Err(FetchError::DeadlineExceeded);
      }

      if let Some(limiter) = limiter {
        limiter.until_ready().await;
      }

      let result = match deadline {
        Some(at) => match time::timeout_at(at, operation()).await {
          Ok(result) => result,
          Err(_) => return Err(FetchError::DeadlineExceeded),
        },
        None => operation().await,
      };

      match result {
        Ok(value) => return Ok(value),
        Err(error)
          if error.is_retryable()
            && attempts < self.config.retry.max_attempts =>
        {
          let delay = self.config.retry.backoff(attempts);

          warn!(%error, attempt = attempts, ?delay, "retrying after backoff");

          time::sleep(delay).await;
        }
        Err(error) => return Err(FetchError::from_api(error, attempts)),
      }
    }
  }

  pub(crate) async fn fetch_all(
    &self,
    video_ids: &[String],
  ) -> Result<Batch, FetchError> {
    let deadline = self.config.deadline.map(|limit| Instant::now() + limit);

    if self.config.concurrency > 1 {
      return self.fetch_concurrent(video_ids, deadline).await;
    }

    let mut batch = Batch::default();

    for video_id in video_ids {
      batch.push(self.fetch_video(video_id, deadline, None).await?);
    }

    Ok(batch)
  }

  async fn fetch_concurrent(
    &self,
    video_ids: &[String],
    deadline: Option<Instant>,
  ) -> Result<Batch, FetchError> {
    let limiter =
      RateLimiter::direct(Quota::per_second(self.config.requests_per_second));

    let mut fetches = stream::iter(video_ids)
      .map(|video_id| self.fetch_video(video_id, deadline, Some(&limiter)))
      .buffer_unordered(self.config.concurrency);

    let mut batch = Batch::default();

    while let Some(fetch) = fetches.next().await {
      batch.push(fetch?);
    }

    Ok(batch)
  }

  async fn fetch_replies(
    &self,
    video_id: &str,
    parent_id: &str,
    deadline: Option<Instant>,
    limiter: Option<&DefaultDirectRateLimiter>,
  ) -> Result<Vec<Comment>, FetchError> {
    let mut replies = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
      let page = self
        .call(deadline, limiter, || {
          self.api.list_replies(video_id, parent_id, page_token.as_deref())
        })
        .await?;

      replies.extend(page.comments);

      match page.next_page_token {
        Some(token) => page_token = Some(token),
        None => break,
      }
    }

    Ok(replies)
  }

  // Auth is the only error that escapes here; everything else lands in the
  // per-video summary so the rest of the batch can proceed.
  async fn fetch_video(
    &self,
    video_id: &str,
    deadline: Option<Instant>,
    limiter: Option<&DefaultDirectRateLimiter>,
  ) -> Result<VideoFetch, FetchError> {
    let title = match self.resolve_title(video_id, deadline, limiter).await {
      Ok(title) => title,
      Err(FetchError::DeadlineExceeded) => {
        return Ok(VideoFetch {
          summary: VideoSummary {
            comments_collected: 0,
            outcome: VideoOutcome::Failed(FetchError::DeadlineExceeded),
            pages_fetched: 0,
            partial_replies: false,
            title: video_id.to_owned(),
            video_id: video_id.to_owned(),
          },
          comments: Vec::new(),
        });
      }
      Err(error) => return Err(error),
    };

    info!(video_id, %title, "collecting comments");

    let mut comments: Vec<Comment> = Vec::new();
    let mut pages_fetched = 0;
    let mut partial_replies = false;
    let mut page_token: Option<String> = None;

    let outcome = loop {
      if self
        .config
        .max_pages_per_video
        .is_some_and(|cap| pages_fetched >= cap)
      {
        break VideoOutcome::Complete;
      }

      let request = ThreadRequest {
        include_replies: self.config.include_replies,
        page_size: self.config.page_size,
        page_token: page_token.take(),
        video_id: video_id.to_owned(),
      };

      let page = match self
        .call(deadline, limiter, || self.api.list_threads(&request))
        .await
      {
        Ok(page) => page,
        Err(FetchError::Auth(message)) => {
          return Err(FetchError::Auth(message));
        }
        Err(error) => {
          break if pages_fetched == 0 {
            VideoOutcome::Failed(error)
          } else {
            VideoOutcome::Partial(error)
          };
        }
      };

      pages_fetched += 1;

      for thread in page.threads {
        let parent_id = thread.comment.id.clone();

        comments.push(thread.comment);

        if !self.config.include_replies {
          continue;
        }

        let inline_complete = usize::try_from(thread.total_reply_count)
          .is_ok_and(|total| total <= thread.replies.len());

        if inline_complete {
          comments.extend(thread.replies);
          continue;
        }

        match self
          .fetch_replies(video_id, &parent_id, deadline, limiter)
          .await
        {
          Ok(replies) => comments.extend(replies),
          Err(FetchError::Auth(message)) => {
            return Err(FetchError::Auth(message));
          }
          Err(error) => {
            warn!(
              video_id,
              %parent_id,
              %error,
              "reply listing failed, keeping inline replies"
            );

            comments.extend(thread.replies);
            partial_replies = true;
          }
        }
      }

      match page.next_page_token {
        Some(token) => page_token = Some(token),
        None => break VideoOutcome::Complete,
      }
    };

    for comment in &mut comments {
      comment.video_title.clone_from(&title);
    }

    Ok(VideoFetch {
      summary: VideoSummary {
        comments_collected: comments.len(),
        outcome,
        pages_fetched,
        partial_replies,
        title,
        video_id: video_id.to_owned(),
      },
      comments,
    })
  }

  pub(crate) fn new(api: &'a C, config: &'a Config) -> Self {
    Self { api, config }
  }

  async fn resolve_title(
    &self,
    video_id: &str,
    deadline: Option<Instant>,
    limiter: Option<&DefaultDirectRateLimiter>,
  ) -> Result<String, FetchError> {
    match self
      .call(deadline, limiter, || self.api.video_title(video_id))
      .await
    {
      Ok(Some(title)) => Ok(title),
      Ok(None) => Ok(video_id.to_owned()),
      Err(FetchError::Auth(message)) => Err(FetchError::Auth(message)),
      Err(FetchError::DeadlineExceeded) => Err(FetchError::DeadlineExceeded),
      Err(error) => {
        warn!(video_id, %error, "could not fetch video title");

        Ok(video_id.to_owned())
      }
    }
  }
}
