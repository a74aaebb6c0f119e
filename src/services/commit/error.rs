use thiserror::Error;

/// Message shown when the backend gives no better explanation.
pub const DEFAULT_COMMIT_ERROR: &str = "Failed to schedule inspection";

/// Errors produced while confirming a pending schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// No time prompt is open.
    #[error("no inspection is waiting to be scheduled")]
    NothingPending,
    /// A request for this prompt is already in flight.
    #[error("a schedule request is already in progress")]
    AlreadySaving,
    #[error("choose a time before saving")]
    MissingTime,
    #[error("'{0}' is not a valid time of day")]
    InvalidTime(String),
    /// Backend answered with a non-2xx status.
    #[error("{}", .detail.as_deref().unwrap_or(DEFAULT_COMMIT_ERROR))]
    Rejected { status: u16, detail: Option<String> },
    /// Request never got a response.
    #[error("Failed to schedule inspection: {0}")]
    Transport(String),
}

impl CommitError {
    /// True for errors that leave the prompt open so the user can retry.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, CommitError::NothingPending | CommitError::AlreadySaving)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_detail_verbatim() {
        let err = CommitError::Rejected {
            status: 409,
            detail: Some("Inspector already booked".to_string()),
        };
        assert_eq!(err.to_string(), "Inspector already booked");
    }

    #[test]
    fn test_rejected_without_detail_uses_fallback() {
        let err = CommitError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), DEFAULT_COMMIT_ERROR);
    }

    #[test]
    fn test_retryable() {
        assert!(CommitError::Transport("timed out".to_string()).is_retryable());
        assert!(!CommitError::AlreadySaving.is_retryable());
    }
}
