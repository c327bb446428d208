use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::color::ColorError;
use crate::theme::ThemeError;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("cannot locate the theme storage directory: HOME is not set")]
    MissingHomeDirectory,
    #[error("theme import from {} failed", .0.display())]
    ImportFailed(PathBuf),
    #[error("{0}")]
    Usage(String),
    #[error("failed to write output")]
    Output(#[from] io::Error),
}
