use {
  anyhow::Context,
  api::{CommentApi, ReplyPage, Thread, ThreadPage, ThreadRequest},
  api_error::ErrorEnvelope,
  arguments::Arguments,
  chrono::{DateTime, Utc},
  clap::{Parser, ValueEnum},
  client::Client,
  comment::Comment,
  comment_resource::CommentResource,
  config::{Config, RetryPolicy, RuntimeEnvironment},
  error::{ApiError, FetchError},
  fetcher::CommentFetcher,
  futures::stream::{self, StreamExt},
  governor::{DefaultDirectRateLimiter, Quota, RateLimiter},
  reply_response::ReplyListResponse,
  report::{Batch, VideoFetch, VideoOutcome, VideoSummary},
  reqwest::StatusCode,
  serde::{Deserialize, Serialize, de::DeserializeOwned},
  std::{
    fs,
    future::Future,
    num::NonZeroU32,
    path::{Path, PathBuf},
    process,
    time::Duration,
  },
  thread_response::ThreadListResponse,
  tokio::time::{self, Instant},
  tracing::{error, info, warn},
  tracing_subscriber::EnvFilter,
  utils::truncate,
  video_response::VideoListResponse,
};

mod api;
mod api_error;
mod arguments;
mod client;
mod comment;
mod comment_resource;
mod config;
mod error;
mod fetcher;
mod output;
mod reply_response;
mod report;
mod thread_response;
mod utils;
mod video_response;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  dotenvy::dotenv().ok();

  let arguments = Arguments::parse();

  let config = arguments.config();
  let output = arguments.output_path();

  let client = Client::new(arguments.api_key.clone());

  info!(
    videos = arguments.video_ids.len(),
    "starting comment collection"
  );

  let batch = CommentFetcher::new(&client, &config)
    .fetch_all(&arguments.video_ids)
    .await
    .context("comment collection aborted")?;

  batch.report.log_summary();

  if batch.report.all_failed() {
    anyhow::bail!("every video failed, nothing to write");
  }

  if batch.comments.is_empty() {
    warn!("no comments were collected from any video");
    return Ok(());
  }

  output::write_csv(&output, &batch.comments)?;

  info!(
    path = %output.display(),
    total = batch.comments.len(),
    "saved comments"
  );

  Ok(())
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .init();

  if let Err(error) = run().await {
    eprintln!("error: {error}");

    for (i, cause) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {cause}");
    }

    process::exit(1);
  }
}
