//! Profile-addressed configuration loading.

use std::fs;
use std::path::Path;

use serde_yaml::mapping::Entry;
use serde_yaml::{Mapping, Value};

use crate::domain::config::{AppConfig, ConfigError};
use crate::domain::profile::ConfigProfileName;

/// Directory holding profile config pairs, relative to the invocation root.
pub const CONFIG_DIR: &str = ".taskdown/config";

/// Load the merged configuration for a profile from `root`.
///
/// Reads `{profile}-app.yml` then `{profile}-user.yml` from the config
/// directory. Both files are optional; user values override app values, and
/// keys absent from both fall back to built-in defaults.
pub fn load_config(root: &Path, profile: &ConfigProfileName) -> Result<AppConfig, ConfigError> {
    let config_dir = root.join(CONFIG_DIR);
    let mut merged = Value::Mapping(Mapping::new());

    for suffix in ["app", "user"] {
        let path = config_dir.join(format!("{}-{}.yml", profile.prefix(), suffix));
        if !path.exists() {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        let value: Value = serde_yaml::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        deep_merge(&mut merged, value);
    }

    serde_yaml::from_value(merged).map_err(|err| ConfigError::Parse {
        path: config_dir.display().to_string(),
        reason: err.to_string(),
    })
}

/// Overlay `other` onto `base`, recursing into mappings and replacing
/// everything else wholesale.
fn deep_merge(base: &mut Value, other: Value) {
    match (base, other) {
        (Value::Mapping(base_map), Value::Mapping(other_map)) => {
            for (key, value) in other_map {
                match base_map.entry(key) {
                    Entry::Occupied(mut slot) => deep_merge(slot.get_mut(), value),
                    Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
