//! Error types for Swiperail.

use std::fmt;

/// The main error type for Swiperail operations.
#[derive(Debug)]
pub enum RailError {
    /// Signal-related error.
    Signal(SignalError),
    /// Scheduler-related error.
    Scheduler(SchedulerError),
}

impl fmt::Display for RailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signal(err) => write!(f, "Signal error: {err}"),
            Self::Scheduler(err) => write!(f, "Scheduler error: {err}"),
        }
    }
}

impl std::error::Error for RailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Signal(err) => Some(err),
            Self::Scheduler(err) => Some(err),
        }
    }
}

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    InvalidConnection,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConnection => write!(f, "Invalid or disconnected connection ID"),
        }
    }
}

impl std::error::Error for SignalError {}

impl From<SignalError> for RailError {
    fn from(err: SignalError) -> Self {
        Self::Signal(err)
    }
}

/// Scheduler-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The task ID is invalid or the task has already run or been cancelled.
    InvalidTaskId,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTaskId => write!(f, "Invalid or expired scheduled task ID"),
        }
    }
}

impl std::error::Error for SchedulerError {}

impl From<SchedulerError> for RailError {
    fn from(err: SchedulerError) -> Self {
        Self::Scheduler(err)
    }
}

/// A specialized Result type for Swiperail operations.
pub type Result<T> = std::result::Result<T, RailError>;
