use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
  #[serde(default)]
  pub(crate) errors: Vec<ErrorDetail>,
  pub(crate) message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
  pub(crate) reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
  pub(crate) error: ErrorBody,
}

impl ErrorEnvelope {
  pub(crate) fn message(&self) -> String {
    self
      .error
      .message
      .clone()
      .unwrap_or_else(|| "unknown error".into())
  }

  pub(crate) fn reason(&self) -> Option<&str> {
    self
      .error
      .errors
      .first()
      .and_then(|detail| detail.reason.as_deref())
  }
}
