//! Application configuration models.

use serde::Deserialize;
use thiserror::Error;

/// Error produced while loading or parsing configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Configuration file did not parse or deserialize.
    #[error("Failed to parse config {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Merged configuration consumed by the resolution engine.
///
/// Loaded from a profile-addressed `app`/`user` YAML pair; every key is
/// optional and falls back to the built-in defaults below.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Working directory for non-prompt, non-schema file handling.
    #[serde(default = "default_working_dir")]
    pub working_dir: String,

    /// Prompt template location settings.
    #[serde(default)]
    pub app_prompt: PromptDirConfig,

    /// Schema location settings.
    #[serde(default)]
    pub app_schema: SchemaDirConfig,

    /// Parameter validation settings.
    #[serde(default)]
    pub params: ParamsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            working_dir: default_working_dir(),
            app_prompt: PromptDirConfig::default(),
            app_schema: SchemaDirConfig::default(),
            params: ParamsConfig::default(),
        }
    }
}

/// Prompt template location settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptDirConfig {
    /// Base directory for prompt templates, relative to the process working
    /// directory.
    #[serde(default = "default_prompt_base_dir")]
    pub base_dir: String,
}

impl Default for PromptDirConfig {
    fn default() -> Self {
        Self { base_dir: default_prompt_base_dir() }
    }
}

/// Schema location settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaDirConfig {
    /// Base directory for schemas, relative to the process working directory.
    #[serde(default = "default_schema_base_dir")]
    pub base_dir: String,
}

impl Default for SchemaDirConfig {
    fn default() -> Self {
        Self { base_dir: default_schema_base_dir() }
    }
}

/// Parameter validation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParamsConfig {
    /// Settings for the two-positional-parameter form.
    #[serde(default)]
    pub two: TwoParamsConfig,
}

/// Pattern overrides for the two positional parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TwoParamsConfig {
    #[serde(default)]
    pub directive_type: TypePatternConfig,
    #[serde(default)]
    pub layer_type: TypePatternConfig,
}

/// A single parameter's validation settings.
///
/// An explicitly empty `pattern` disables the parameter entirely, which
/// surfaces as `PatternNotFound` during validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypePatternConfig {
    /// Full-match pattern for the parameter value.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Vocabulary tokens for layer inference. Only meaningful on
    /// `layer_type`.
    #[serde(default)]
    pub tokens: Option<Vec<String>>,
}

fn default_working_dir() -> String {
    ".taskdown".to_string()
}

fn default_prompt_base_dir() -> String {
    ".taskdown/prompts".to_string()
}

fn default_schema_base_dir() -> String {
    ".taskdown/schema".to_string()
}
