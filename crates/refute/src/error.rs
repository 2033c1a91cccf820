//! Error types for refute

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefuteError {
    #[error("line {line}: invalid literal '{token}'")]
    InvalidLiteral { line: usize, token: String },

    #[error("line {line}: empty clause line")]
    EmptyLine { line: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RefuteError>;
