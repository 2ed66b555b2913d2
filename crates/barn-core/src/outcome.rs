//! Request Outcome

use crate::error::ConsoleError;

/// State of the most recent submission of a workflow
#[derive(Clone, Debug, PartialEq)]
pub enum RequestOutcome<T> {
    /// Nothing submitted yet
    Idle,

    /// A request is in flight
    Pending,

    /// The service answered with a decodable result
    Success(T),

    /// Transport, decoding or client-side validation failed
    Failure(ConsoleError),
}

impl<T> Default for RequestOutcome<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestOutcome<T> {
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub const fn failure(&self) -> Option<&ConsoleError> {
        match self {
            Self::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Short state name for logs
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
        }
    }
}

impl<T> From<crate::Result<T>> for RequestOutcome<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err),
        }
    }
}
