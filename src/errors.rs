//! Unified application error type.
//! Every module (core, input, output, config, cli) returns AppError so the
//! binary has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Layout errors
    // ---------------------------
    #[error("Invalid column width hint: {0}")]
    InvalidWidthHint(String),

    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    // ---------------------------
    // Config / input errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input data: {0}")]
    Input(String),
}

pub type AppResult<T> = Result<T, AppError>;
