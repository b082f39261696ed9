//! Validated directive/layer parameter types.

use std::fmt;

use regex::Regex;
use thiserror::Error;

use crate::ports::PatternProvider;

/// Which of the two positional parameters an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Directive,
    Layer,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Directive => write!(f, "directive"),
            ParamKind::Layer => write!(f, "layer"),
        }
    }
}

/// Error produced while validating the two positional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The active profile has no usable pattern for this parameter. Distinct
    /// from a value that merely fails to match.
    #[error("No usable {kind} pattern is configured for the active profile")]
    PatternNotFound { kind: ParamKind },

    /// The value did not satisfy the configured pattern.
    #[error("Invalid {kind} '{value}': does not match pattern '{pattern}'")]
    PatternValidationFailed { kind: ParamKind, value: String, pattern: String },
}

macro_rules! impl_param_str {
    ($name:ident) => {
        impl $name {
            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Validated directive parameter (e.g. "to", "summary", "defect").
///
/// Only constructible through [`DirectiveType::resolve`], so every value in
/// circulation has satisfied the active profile's pattern. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectiveType(String);

impl DirectiveType {
    /// Validate a raw directive string against the active pattern.
    pub fn resolve(raw: &str, patterns: &dyn PatternProvider) -> Result<Self, ValidationError> {
        let value = validate_against(raw, patterns.directive_pattern(), ParamKind::Directive)?;
        Ok(Self(value))
    }
}

impl_param_str!(DirectiveType);

#[cfg(test)]
impl DirectiveType {
    pub(crate) fn new_unchecked(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Validated layer parameter (e.g. "project", "issue", "task").
///
/// Carries a derived hierarchy level used only for informational ordering,
/// never for path construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerType(String);

impl LayerType {
    /// Validate a raw layer string against the active pattern.
    pub fn resolve(raw: &str, patterns: &dyn PatternProvider) -> Result<Self, ValidationError> {
        let value = validate_against(raw, patterns.layer_pattern(), ParamKind::Layer)?;
        Ok(Self(value))
    }

    /// Hierarchy level for informational ordering.
    ///
    /// 0 means a custom layer outside the standard vocabulary.
    pub fn hierarchy(&self) -> u32 {
        match self.0.as_str() {
            "project" => 1,
            "issue" => 2,
            "task" => 3,
            _ => 0,
        }
    }
}

impl_param_str!(LayerType);

#[cfg(test)]
impl LayerType {
    pub(crate) fn new_unchecked(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Validate both positional parameters, directive first.
///
/// Fails fast on whichever check fails first; never partially succeeds.
pub fn resolve_pair(
    raw_directive: &str,
    raw_layer: &str,
    patterns: &dyn PatternProvider,
) -> Result<(DirectiveType, LayerType), ValidationError> {
    let directive = DirectiveType::resolve(raw_directive, patterns)?;
    let layer = LayerType::resolve(raw_layer, patterns)?;
    Ok((directive, layer))
}

/// Full-match validation of a raw value against a profile pattern.
///
/// A missing or uncompilable pattern is `PatternNotFound`; a value that does
/// not cover the whole input is `PatternValidationFailed`.
fn validate_against(
    raw: &str,
    pattern: Option<&str>,
    kind: ParamKind,
) -> Result<String, ValidationError> {
    let pattern = pattern.ok_or(ValidationError::PatternNotFound { kind })?;
    let regex = Regex::new(&format!(r"\A(?:{pattern})\z"))
        .map_err(|_| ValidationError::PatternNotFound { kind })?;
    if regex.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(ValidationError::PatternValidationFailed {
            kind,
            value: raw.to_string(),
            pattern: pattern.to_string(),
        })
    }
}
