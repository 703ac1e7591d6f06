use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::RecipeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("recipe index {index} is out of range (collection holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("recipe {id} targeted by the edit dialog no longer exists")]
    StaleEditTarget { id: RecipeId },
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::IndexOutOfRange { .. } => ErrorCode::Validation,
            StoreError::StaleEditTarget { .. } => ErrorCode::NotFound,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}
