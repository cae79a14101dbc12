use super::*;

#[derive(Debug, Default)]
pub(crate) struct Batch {
  pub(crate) comments: Vec<Comment>,
  pub(crate) report: BatchReport,
}

impl Batch {
  pub(crate) fn push(&mut self, fetch: VideoFetch) {
    self.comments.extend(fetch.comments);
    self.report.videos.push(fetch.summary);
  }
}

#[derive(Debug, Default)]
pub(crate) struct BatchReport {
  pub(crate) videos: Vec<VideoSummary>,
}

impl BatchReport {
  pub(crate) fn all_failed(&self) -> bool {
    !self.videos.is_empty()
      && self
        .videos
        .iter()
        .all(|video| matches!(video.outcome, VideoOutcome::Failed(_)))
  }

  pub(crate) fn log_summary(&self) {
    for video in &self.videos {
      let title = truncate(&video.title, 60);

      match &video.outcome {
        VideoOutcome::Complete => info!(
          video_id = %video.video_id,
          %title,
          comments = video.comments_collected,
          pages = video.pages_fetched,
          "collected"
        ),
        VideoOutcome::Failed(error) => error!(
          video_id = %video.video_id,
          %title,
          %error,
          "failed"
        ),
        VideoOutcome::Partial(error) => warn!(
          video_id = %video.video_id,
          %title,
          comments = video.comments_collected,
          pages = video.pages_fetched,
          %error,
          "partially collected"
        ),
      }

      if video.partial_replies {
        warn!(
          video_id = %video.video_id,
          "some replies could not be fetched"
        );
      }
    }
  }
}

#[derive(Debug)]
pub(crate) struct VideoFetch {
  pub(crate) comments: Vec<Comment>,
  pub(crate) summary: VideoSummary,
}

#[derive(Debug)]
pub(crate) enum VideoOutcome {
  Complete,
  Failed(FetchError),
  Partial(FetchError),
}

#[derive(Debug)]
pub(crate) struct VideoSummary {
  pub(crate) comments_collected: usize,
  pub(crate) outcome: VideoOutcome,
  pub(crate) pages_fetched: usize,
  pub(crate) partial_replies: bool,
  pub(crate) title: String,
  pub(crate) video_id: String,
}
