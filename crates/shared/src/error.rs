use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MethodNotAllowed,
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

/// Configuration problems detected while building the frame pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("invalid action base '{value}': {reason}")]
    InvalidActionBase { value: String, reason: String },
    #[error("invalid image base url '{value}': {reason}")]
    InvalidImageBase { value: String, reason: String },
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
