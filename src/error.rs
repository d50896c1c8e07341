// SPDX-License-Identifier: MIT
//
// Errors that escape the application layer.
//
// Color math, generation and emission are total and never produce one of
// these. Only reading or writing files and parsing configuration can fail.

use thiserror::Error;

use hk_color::ParseColorError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("color error: {0}")]
    Color(#[from] ParseColorError),
}
