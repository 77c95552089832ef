use thiserror::Error;

/// 错误类别，对应三种对外可见的失败情形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidUrl,
    RetrievalFailed,
    DurationNotFound,
}

#[derive(Error, Debug)]
pub enum DurationError {
    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("Failed to retrieve the YouTube page")]
    RetrievalFailed { status: u16 },

    #[error("Failed to retrieve the YouTube page: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Duration not found")]
    DurationNotFound,
}

impl DurationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DurationError::InvalidUrl => ErrorCategory::InvalidUrl,
            DurationError::RetrievalFailed { .. } | DurationError::Transport(_) => {
                ErrorCategory::RetrievalFailed
            }
            DurationError::DurationNotFound => ErrorCategory::DurationNotFound,
        }
    }
}

pub type Result<T> = std::result::Result<T, DurationError>;
