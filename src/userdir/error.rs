use crate::model::RecordId;
use thiserror::Error;

/// Why a submitted form was rejected.
///
/// The messages are shown to the user verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField,

    #[error("Please enter a valid email.")]
    InvalidEmail,

    #[error("Phone number should contain numbers only.")]
    InvalidPhone,
}

#[derive(Error, Debug)]
pub enum UserdirError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("User not found: {0}")]
    NotFound(RecordId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, UserdirError>;
