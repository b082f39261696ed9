//! Scaffold `.taskdown/` configuration in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::services::CONFIG_DIR;

const DEFAULT_APP_CONFIG: &str = r#"# taskdown profile configuration
working_dir: .taskdown
app_prompt:
  base_dir: .taskdown/prompts
app_schema:
  base_dir: .taskdown/schema
params:
  two:
    directive_type:
      pattern: "^(to|summary|defect)$"
    layer_type:
      pattern: "^(project|issue|task)$"
"#;

/// Create the default profile config plus the prompt/schema base directories.
///
/// Refuses to overwrite an existing config file. Returns the path of the
/// created config.
pub fn execute(root: &Path) -> Result<PathBuf, AppError> {
    let config_dir = root.join(CONFIG_DIR);
    let config_path = config_dir.join("default-app.yml");
    if config_path.exists() {
        return Err(AppError::ConfigExists(config_path.display().to_string()));
    }

    fs::create_dir_all(&config_dir)?;
    fs::write(&config_path, DEFAULT_APP_CONFIG)?;
    fs::create_dir_all(root.join(".taskdown/prompts"))?;
    fs::create_dir_all(root.join(".taskdown/schema"))?;

    Ok(config_path)
}
