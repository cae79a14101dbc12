use {super::*, thiserror::Error};

#[derive(Clone, Debug, Error, PartialEq)]
pub(crate) enum ApiError {
  #[error("credential rejected: {0}")]
  Auth(String),
  #[error("unparseable response: {0}")]
  Malformed(String),
  #[error("not found: {0}")]
  NotFound(String),
  #[error("rate limited: {0}")]
  RateLimited(String),
  #[error("transient failure: {0}")]
  Transient(String),
}

impl ApiError {
  pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();

    let reason = envelope
      .as_ref()
      .and_then(ErrorEnvelope::reason)
      .unwrap_or_default()
      .to_owned();

    let message = envelope
      .as_ref()
      .map_or_else(|| status.to_string(), |envelope| envelope.message());

    match reason.as_str() {
      "quotaExceeded" | "rateLimitExceeded" => {
        return Self::RateLimited(message);
      }
      "videoNotFound" | "commentsDisabled" | "commentNotFound" => {
        return Self::NotFound(message);
      }
      "keyInvalid" | "keyExpired" => return Self::Auth(message),
      _ => {}
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
      Self::RateLimited(message)
    } else if status == StatusCode::NOT_FOUND {
      Self::NotFound(message)
    } else if status == StatusCode::UNAUTHORIZED
      || status == StatusCode::FORBIDDEN
    {
      Self::Auth(message)
    } else if status.is_server_error() {
      Self::Transient(message)
    } else {
      Self::Transient(format!("unexpected status {status}: {message}"))
    }
  }

  pub(crate) fn is_retryable(&self) -> bool {
    matches!(self, Self::RateLimited(_) | Self::Transient(_))
  }
}

impl From<reqwest::Error> for ApiError {
  fn from(error: reqwest::Error) -> Self {
    if error.is_decode() {
      Self::Malformed(error.to_string())
    } else {
      Self::Transient(error.to_string())
    }
  }
}

#[derive(Debug, Error, PartialEq)]
pub(crate) enum FetchError {
  #[error("credential rejected: {0}")]
  Auth(String),
  #[error("deadline exceeded")]
  DeadlineExceeded,
  #[error("unparseable response: {0}")]
  MalformedResponse(String),
  #[error("video not found: {0}")]
  NotFound(String),
  #[error("rate limit exhausted after {attempts} attempts: {message}")]
  RateLimitExceeded { attempts: u32, message: String },
  #[error("network failure after {attempts} attempts: {message}")]
  TransientNetwork { attempts: u32, message: String },
}

impl FetchError {
  pub(crate) fn from_api(error: ApiError, attempts: u32) -> Self {
    match error {
      ApiError::Auth(message) => Self::Auth(message),
      ApiError::Malformed(message) => Self::MalformedResponse(message),
      ApiError::NotFound(message) => Self::NotFound(message),
      ApiError::RateLimited(message) => {
        Self::RateLimitExceeded { attempts, message }
      }
      ApiError::Transient(message) => {
        Self::TransientNetwork { attempts, message }
      }
    }
  }
}
