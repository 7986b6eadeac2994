use {super::*, reqwest::StatusCode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ErrorKind {
  MalformedTree,
  Network,
  Validation,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("comment {id} appears more than once in the tree")]
  DuplicateComment { id: u64 },
  #[error("request failed: {source}")]
  Http {
    #[from]
    source: reqwest::Error,
  },
  #[error("{field} is required")]
  Required { field: &'static str },
  #[error("{message} ({status})")]
  Status { message: String, status: StatusCode },
  #[error("{field} must be at most {max} characters")]
  TooLong { field: &'static str, max: usize },
  #[error("comment tree is nested deeper than {} levels", MAX_TREE_DEPTH)]
  TreeTooDeep,
}

impl Error {
  pub(crate) fn kind(&self) -> ErrorKind {
    match self {
      Self::DuplicateComment { .. } | Self::TreeTooDeep => {
        ErrorKind::MalformedTree
      }
      Self::Http { .. } | Self::Status { .. } => ErrorKind::Network,
      Self::Required { .. } | Self::TooLong { .. } => ErrorKind::Validation,
    }
  }
}
