//! Output destination resolution.

use std::path::{Path, PathBuf};

use crate::domain::filename::FilenameHashGenerator;
use crate::domain::params::LayerType;
use crate::domain::paths::{OutputTarget, PathError, ensure_safe_path};

/// Resolve the output destination for a run.
///
/// Branches on the `--destination` option:
/// 1. Absent: directory is the layer name, filename auto-generated.
/// 2. Directory-like (`.` or a value with a path separator that either names
///    an existing directory or has no `.` in its last segment): filename
///    auto-generated inside it. An existing same-named directory always wins,
///    so the existence probe runs before the extension check.
/// 3. Separator plus a `.` in the last segment, no such directory: the whole
///    value is a literal file path, used unmodified.
/// 4. No separator at all: directory is the layer name, filename is the
///    value verbatim.
///
/// `cwd` anchors the directory-existence probe and the collision probe; the
/// returned paths keep the shape the caller supplied. The output directory is
/// not created here; creation is deferred to write time.
pub fn resolve(
    destination: Option<&str>,
    layer: &LayerType,
    cwd: &Path,
    generator: &FilenameHashGenerator,
) -> Result<OutputTarget, PathError> {
    let Some(destination) = destination else {
        return auto_named(PathBuf::from(layer.as_str()), cwd, generator);
    };
    ensure_safe_path(destination)?;

    let dot_relative = destination == "." || destination.starts_with("./");
    if !destination.contains('/') && !dot_relative {
        // Bare name: never probed, never completed beyond the layer directory.
        return Ok(OutputTarget {
            dir: PathBuf::from(layer.as_str()),
            file_name: destination.to_string(),
        });
    }

    if cwd.join(destination).is_dir() {
        return auto_named(PathBuf::from(destination), cwd, generator);
    }

    let last_segment =
        Path::new(destination).file_name().and_then(|name| name.to_str()).unwrap_or("");
    if last_segment.contains('.') {
        let dir = Path::new(destination).parent().map(Path::to_path_buf).unwrap_or_default();
        return Ok(OutputTarget { dir, file_name: last_segment.to_string() });
    }

    auto_named(PathBuf::from(destination), cwd, generator)
}

fn auto_named(
    dir: PathBuf,
    cwd: &Path,
    generator: &FilenameHashGenerator,
) -> Result<OutputTarget, PathError> {
    let file_name = generator.generate(&cwd.join(&dir))?;
    Ok(OutputTarget { dir, file_name })
}
