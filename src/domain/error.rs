use std::io;

use thiserror::Error;

use crate::domain::config::ConfigError;
use crate::domain::params::ValidationError;
use crate::domain::paths::PathError;
use crate::domain::profile::ProfileNameError;
use crate::domain::variables::VariableErrors;
use crate::ports::RenderError;

/// Library-wide error type for taskdown operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The `--config` profile selector failed validation.
    #[error(transparent)]
    Profile(#[from] ProfileNameError),

    /// A positional parameter failed pattern validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// One or more variables failed validation.
    #[error(transparent)]
    Variables(#[from] VariableErrors),

    /// Configuration loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Template rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Config scaffold already exists at the target location.
    #[error("taskdown config already exists at {0}")]
    ConfigExists(String),
}
