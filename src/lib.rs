//! taskdown: resolve two-parameter prompt commands into template paths and
//! substitution variables for AI-assisted Markdown breakdown.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::env;
use std::path::PathBuf;

use app::commands::{generate, init};

pub use app::commands::{GenerateOptions, GeneratedPrompt};
pub use domain::{
    AppError, ConfigProfileName, DirectiveType, LayerType, OutputTarget, ResolvedPathSet,
    VariableSet,
};

/// Initialize `.taskdown/` configuration in the current directory.
///
/// Returns the path of the created config file.
pub fn init() -> Result<PathBuf, AppError> {
    let cwd = env::current_dir()?;
    init::execute(&cwd)
}

/// Resolve and render the prompt for a directive/layer pair.
///
/// One resolution pass: validates both parameters against the active
/// profile's patterns, derives the prompt/schema/input/output paths, builds
/// the substitution table, and renders the prompt template with it.
pub fn generate(
    directive: &str,
    layer: &str,
    options: &GenerateOptions,
) -> Result<GeneratedPrompt, AppError> {
    generate::execute(directive, layer, options)
}
