//! Schema path resolution.

use std::path::{Path, PathBuf};

use crate::domain::params::{DirectiveType, LayerType};
use crate::domain::paths::{PathError, ensure_safe_base};

/// Fixed schema file name; only the directory varies with parameters.
pub const SCHEMA_FILE_NAME: &str = "base.schema.md";

/// Resolve the schema path: `{base}/{directive}/{layer}/base.schema.md`.
///
/// Same base-directory resolution rule as the prompt path.
pub fn resolve(
    base_dir: &Path,
    directive: &DirectiveType,
    layer: &LayerType,
) -> Result<PathBuf, PathError> {
    ensure_safe_base(base_dir)?;
    Ok(base_dir.join(directive.as_str()).join(layer.as_str()).join(SCHEMA_FILE_NAME))
}
