//! Error types for the resort engine.

use crate::types::CollectionKind;
use thiserror::Error;

/// Main error type for resort operations.
#[derive(Debug, Error)]
pub enum ResortError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No {kind} with id {id:?}")]
    MutationTargetMissing { kind: CollectionKind, id: String },

    #[error("Invalid {type_name} value: {value:?}")]
    InvalidEnumValue {
        type_name: &'static str,
        value: String,
    },

    #[error("Duplicate {kind} id in seed: {id:?}")]
    DuplicateId { kind: CollectionKind, id: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Subscription was dropped")]
    SubscriptionDropped,
}

impl From<serde_json::Error> for ResortError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_syntax() || e.is_eof() {
            ResortError::Deserialization(e.to_string())
        } else {
            ResortError::Serialization(e.to_string())
        }
    }
}

/// Result type for resort operations.
pub type Result<T> = std::result::Result<T, ResortError>;
