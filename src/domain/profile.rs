use std::fmt;

use thiserror::Error;

/// File-name prefix used when no profile was selected.
pub const DEFAULT_PROFILE: &str = "default";

/// Maximum length of a custom profile selector.
pub const MAX_PROFILE_NAME_LEN: usize = 50;

/// Error produced when a `--config` profile selector fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileNameError {
    /// The selector is too long or contains characters outside `[a-z0-9_-]`.
    #[error(
        "Invalid config profile name '{0}': must be 1-50 characters of lowercase letters, digits, '-' or '_'"
    )]
    InvalidProfileName(String),
}

/// Validated selector for a configuration-file pair.
///
/// Absent or whitespace-only input resolves to the default profile rather
/// than an error. Anything else must satisfy the profile charset rule.
/// Immutable once constructed; equality is value-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigProfileName {
    value: Option<String>,
}

impl ConfigProfileName {
    /// Resolve a raw `--config` value into a profile name.
    ///
    /// Whitespace is trimmed before any check. `None` and empty input yield
    /// the default profile, never an error.
    pub fn resolve(raw: Option<&str>) -> Result<Self, ProfileNameError> {
        let Some(raw) = raw else {
            return Ok(Self::default_profile());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default_profile());
        }
        if !is_valid_profile_name(trimmed) {
            return Err(ProfileNameError::InvalidProfileName(trimmed.to_string()));
        }
        Ok(Self { value: Some(trimmed.to_string()) })
    }

    /// The default ("no profile") state.
    pub fn default_profile() -> Self {
        Self { value: None }
    }

    /// Whether this is the default profile.
    pub fn is_default(&self) -> bool {
        self.value.is_none()
    }

    /// File-name prefix for the config pair this profile selects.
    pub fn prefix(&self) -> &str {
        self.value.as_deref().unwrap_or(DEFAULT_PROFILE)
    }
}

impl fmt::Display for ConfigProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

fn is_valid_profile_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_PROFILE_NAME_LEN {
        return false;
    }
    name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
