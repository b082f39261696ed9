pub mod config;
pub mod error;
pub mod filename;
pub mod identifiers;
pub mod inference;
pub mod params;
pub mod paths;
pub mod profile;
pub mod variables;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use filename::FilenameHashGenerator;
pub use params::{DirectiveType, LayerType, ParamKind, ValidationError, resolve_pair};
pub use paths::{OutputTarget, PathError, ResolvedPathSet};
pub use profile::{ConfigProfileName, ProfileNameError};
pub use variables::{Variable, VariableError, VariableErrors, VariableSet};
