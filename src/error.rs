//! Error types for the input, generator, and CLI layers.
//!
//! The planner is total and has no error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for course-planner operations outside the planner.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Errors raised while collecting or preparing courses.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The course list failed validation.
    #[error("invalid course list: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// More courses than the configured limit.
    #[error("too many courses: {count} given, at most {max} allowed")]
    TooManyCourses {
        /// Courses supplied.
        count: usize,
        /// Configured limit.
        max: usize,
    },

    /// Unrecognised generator preset name.
    #[error("unknown preset '{0}' (expected 'small' or 'medium')")]
    UnknownPreset(String),
}

impl From<Vec<ValidationError>> for PlannerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
