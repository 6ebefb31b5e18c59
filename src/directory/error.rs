use super::types::{StudentId, ValidationError};
use thiserror::Error;

/// Outcome of a failed directory operation.
///
/// The HTTP boundary maps each variant to a status code and the sentinel body of the route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("student {0} not found")]
    NotFound(StudentId),

    #[error("no student named {0:?}")]
    NameNotFound(String),

    #[error("student {0} already exists")]
    Conflict(StudentId),

    /// The viewing endpoint only serves ids strictly between `gt` and `lt`.
    #[error("student_id {id} must be greater than {gt} and less than {lt}")]
    OutOfRange { id: u64, gt: u64, lt: u64 },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
