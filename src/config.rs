use super::*;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) concurrency: usize,
  pub(crate) deadline: Option<Duration>,
  pub(crate) include_replies: bool,
  pub(crate) max_pages_per_video: Option<usize>,
  pub(crate) page_size: u8,
  pub(crate) requests_per_second: NonZeroU32,
  pub(crate) retry: RetryPolicy,
  pub(crate) runtime_environment: RuntimeEnvironment,
}

impl Config {
  pub(crate) const MAX_PAGE_SIZE: u8 = 100;

  pub(crate) fn clamp_page_size(page_size: u8) -> u8 {
    page_size.clamp(1, Self::MAX_PAGE_SIZE)
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      concurrency: 1,
      deadline: None,
      include_replies: true,
      max_pages_per_video: None,
      page_size: Self::MAX_PAGE_SIZE,
      requests_per_second: NonZeroU32::new(10).unwrap_or(NonZeroU32::MIN),
      retry: RetryPolicy::default(),
      runtime_environment: RuntimeEnvironment::Local,
    }
  }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct RetryPolicy {
  pub(crate) backoff_base: Duration,
  pub(crate) max_attempts: u32,
}

impl RetryPolicy {
  pub(crate) fn backoff(&self, attempt: u32) -> Duration {
    self
      .backoff_base
      .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
  }
}

impl Default for RetryPolicy {
  fn default() -> Self {
    Self {
      backoff_base: Duration::from_millis(500),
      max_attempts: 3,
    }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub(crate) enum RuntimeEnvironment {
  Hosted,
  #[default]
  Local,
}

impl RuntimeEnvironment {
  pub(crate) fn data_dir(self) -> PathBuf {
    match self {
      Self::Hosted => PathBuf::from("/content/data/raw"),
      Self::Local => PathBuf::from("data/raw"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn page_size_is_clamped_to_the_api_bounds() {
    assert_eq!(Config::clamp_page_size(0), 1);
    assert_eq!(Config::clamp_page_size(50), 50);
    assert_eq!(Config::clamp_page_size(100), 100);
    assert_eq!(Config::clamp_page_size(250), 100);
  }

  #[test]
  fn backoff_doubles_per_attempt() {
    let policy = RetryPolicy {
      backoff_base: Duration::from_millis(500),
      max_attempts: 4,
    };

    assert_eq!(policy.backoff(1), Duration::from_millis(500));
    assert_eq!(policy.backoff(2), Duration::from_millis(1000));
    assert_eq!(policy.backoff(3), Duration::from_millis(2000));
  }

  #[test]
  fn environments_resolve_to_distinct_data_dirs() {
    assert_eq!(
      RuntimeEnvironment::Local.data_dir(),
      PathBuf::from("data/raw")
    );

    assert_eq!(
      RuntimeEnvironment::Hosted.data_dir(),
      PathBuf::from("/content/data/raw")
    );
  }
}
