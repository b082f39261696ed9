//! Prompt template path resolution.

use std::path::{Path, PathBuf};

use crate::domain::identifiers::is_safe_component;
use crate::domain::inference;
use crate::domain::params::{DirectiveType, LayerType};
use crate::domain::paths::{PathError, ensure_safe_base};

/// Resolve the prompt template path for a directive/layer pair.
///
/// `{base}/{directive}/{layer}/f_{effectiveLayer}.md`, where the effective
/// layer is the explicit input-layer option if present, otherwise inferred
/// from the input file path, otherwise the layer itself. An adaptation
/// option turns the filename into `f_{effectiveLayer}_{adaptation}.md`.
///
/// The base directory is taken as configured, relative to the process working
/// directory; it is never re-rooted onto any other working-directory setting.
pub fn resolve(
    base_dir: &Path,
    directive: &DirectiveType,
    layer: &LayerType,
    input_layer: Option<&str>,
    from_file: Option<&str>,
    adaptation: Option<&str>,
    layer_tokens: &[String],
) -> Result<PathBuf, PathError> {
    ensure_safe_base(base_dir)?;

    let effective_layer = match input_layer {
        Some(explicit) => explicit.to_string(),
        None => from_file
            .and_then(|path| inference::infer_layer(path, layer_tokens))
            .unwrap_or_else(|| layer.as_str().to_string()),
    };
    ensure_filename_component(&effective_layer)?;

    let file_name = match adaptation {
        Some(adaptation) => {
            ensure_filename_component(adaptation)?;
            format!("f_{effective_layer}_{adaptation}.md")
        }
        None => format!("f_{effective_layer}.md"),
    };

    Ok(base_dir.join(directive.as_str()).join(layer.as_str()).join(file_name))
}

/// Values embedded into the template filename must be path-safe.
fn ensure_filename_component(value: &str) -> Result<(), PathError> {
    if is_safe_component(value) {
        Ok(())
    } else {
        Err(PathError::InvalidPath {
            path: value.to_string(),
            reason: "not a safe filename component".to_string(),
        })
    }
}
