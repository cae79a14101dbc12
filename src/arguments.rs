use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "ytc",
  about = "Collects public YouTube comments into a CSV for later analysis"
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    short = 'k',
    env = "YOUTUBE_API_KEY",
    hide_env_values = true,
    help = "YouTube Data API key"
  )]
  pub(crate) api_key: String,
  #[arg(
    long,
    default_value_t = 1,
    help = "Number of videos fetched concurrently (1 = sequential)"
  )]
  pub(crate) concurrency: usize,
  #[arg(long, help = "Abandon the run after this many seconds")]
  pub(crate) deadline: Option<u64>,
  #[arg(
    long,
    value_enum,
    default_value_t = RuntimeEnvironment::Local,
    help = "Where the tool is running, decides the default data directory"
  )]
  pub(crate) environment: RuntimeEnvironment,
  #[arg(long, help = "Cap on pages fetched per video")]
  pub(crate) max_pages: Option<usize>,
  #[arg(long, help = "Skip fetching replies to top-level comments")]
  pub(crate) no_replies: bool,
  #[arg(
    long,
    short = 'o',
    help = "Output CSV path, defaults to <data dir>/comments.csv"
  )]
  pub(crate) output: Option<PathBuf>,
  #[arg(
    long,
    default_value_t = 100,
    help = "Comment threads per page, clamped to 1-100"
  )]
  pub(crate) page_size: u8,
  #[arg(
    long,
    default_value_t = 10,
    help = "Outbound request budget for concurrent mode"
  )]
  pub(crate) requests_per_second: u32,
  #[arg(long, default_value_t = 3, help = "Attempts per page before giving up")]
  pub(crate) retry_attempts: u32,
  #[arg(long, default_value_t = 500, help = "Base backoff delay between retries")]
  pub(crate) retry_backoff_ms: u64,
  #[arg(required = true, help = "Video IDs to collect comments from")]
  pub(crate) video_ids: Vec<String>,
}

impl Arguments {
  pub(crate) fn config(&self) -> Config {
    Config {
      concurrency: self.concurrency.max(1),
      deadline: self.deadline.map(Duration::from_secs),
      include_replies: !self.no_replies,
      max_pages_per_video: self.max_pages,
      page_size: Config::clamp_page_size(self.page_size),
      requests_per_second: NonZeroU32::new(self.requests_per_second)
        .unwrap_or(NonZeroU32::MIN),
      retry: RetryPolicy {
        backoff_base: Duration::from_millis(self.retry_backoff_ms),
        max_attempts: self.retry_attempts.max(1),
      },
      runtime_environment: self.environment,
    }
  }

  pub(crate) fn output_path(&self) -> PathBuf {
    self.output.clone().unwrap_or_else(|| {
      self.environment.data_dir().join("comments.csv")
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(arguments: &[&str]) -> Arguments {
    Arguments::try_parse_from(
      [&["ytc", "--api-key", "test-key"], arguments].concat(),
    )
    .unwrap()
  }

  #[test]
  fn at_least_one_video_id_is_required() {
    assert!(
      Arguments::try_parse_from(["ytc", "--api-key", "test-key"]).is_err()
    );
  }

  #[test]
  fn defaults_match_the_sequential_baseline() {
    let config = parse(&["dQw4w9WgXcQ"]).config();

    assert_eq!(config.concurrency, 1);
    assert_eq!(config.page_size, 100);
    assert_eq!(config.max_pages_per_video, None);
    assert!(config.include_replies);
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.retry.backoff_base, Duration::from_millis(500));
  }

  #[test]
  fn page_size_out_of_range_is_clamped() {
    assert_eq!(parse(&["--page-size", "0", "a"]).config().page_size, 1);
    assert_eq!(parse(&["--page-size", "200", "a"]).config().page_size, 100);
  }

  #[test]
  fn no_replies_disables_reply_fetching() {
    assert!(!parse(&["--no-replies", "a"]).config().include_replies);
  }

  #[test]
  fn output_defaults_follow_the_environment() {
    assert_eq!(
      parse(&["a"]).output_path(),
      PathBuf::from("data/raw/comments.csv")
    );

    assert_eq!(
      parse(&["--environment", "hosted", "a"]).output_path(),
      PathBuf::from("/content/data/raw/comments.csv")
    );

    assert_eq!(
      parse(&["--output", "out.csv", "a"]).output_path(),
      PathBuf::from("out.csv")
    );
  }
}
