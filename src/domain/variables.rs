//! The flat variable-substitution table handed to the template renderer.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::domain::paths::ResolvedPathSet;

/// Reserved name: file name of the input source.
pub const VAR_INPUT_TEXT_FILE: &str = "input_text_file";
/// Reserved name: output directory joined with the output filename.
pub const VAR_DESTINATION_PATH: &str = "destination_path";
/// Reserved name: resolved prompt template path.
pub const VAR_PROMPT_PATH: &str = "prompt_path";
/// Reserved name: resolved schema path.
pub const VAR_SCHEMA_FILE: &str = "schema_file";
/// Reserved name: piped stdin content.
pub const VAR_INPUT_TEXT: &str = "input_text";

/// Option prefix for user-supplied custom variables.
pub const USER_VAR_PREFIX: &str = "uv-";

/// A single substitution variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variable {
    /// Fixed reserved-name variable (destination path, input file name).
    Standard { name: &'static str, value: String },
    /// File-reference variable (prompt and schema paths).
    FilePath { name: &'static str, value: String },
    /// The single piped-input variable.
    Stdin { value: String },
    /// User-supplied `uv-` variable, stored without the prefix.
    User { name: String, value: String },
}

impl Variable {
    /// The substitution name this variable binds.
    pub fn name(&self) -> &str {
        match self {
            Variable::Standard { name, .. } | Variable::FilePath { name, .. } => name,
            Variable::Stdin { .. } => VAR_INPUT_TEXT,
            Variable::User { name, .. } => name,
        }
    }

    /// The substitution value.
    pub fn value(&self) -> &str {
        match self {
            Variable::Standard { value, .. }
            | Variable::FilePath { value, .. }
            | Variable::Stdin { value }
            | Variable::User { value, .. } => value,
        }
    }
}

/// A malformed user-variable name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    #[error(
        "Invalid variable name '{0}': must start with a letter and contain only letters, digits or '_'"
    )]
    InvalidVariableName(String),
}

/// All validation failures accumulated across one assembly pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableErrors(pub Vec<VariableError>);

impl fmt::Display for VariableErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for VariableErrors {}

/// Flat, validated name-to-value substitution table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    values: BTreeMap<String, String>,
}

impl VariableSet {
    /// Look up a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The full table, for handing to the template renderer.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Number of variables in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, variable: &Variable) {
        self.values.insert(variable.name().to_string(), variable.value().to_string());
    }
}

/// Merge resolved paths, stdin content, and user-supplied variables into one
/// table.
///
/// Validation accumulates: every malformed user-variable name is recorded,
/// and the result is either the complete table or the full error list, never
/// a partially-populated table. Among repeated user variables the last
/// occurrence wins. Reserved variables are inserted after user variables, so
/// a user variable can never shadow a reserved name.
pub fn assemble(
    paths: &ResolvedPathSet,
    stdin_text: Option<&str>,
    custom: &[(String, String)],
) -> Result<VariableSet, VariableErrors> {
    let mut errors = Vec::new();
    let mut variables = Vec::new();

    for (raw_name, value) in custom {
        let name = raw_name.strip_prefix(USER_VAR_PREFIX).unwrap_or(raw_name);
        if !is_valid_variable_name(name) {
            errors.push(VariableError::InvalidVariableName(name.to_string()));
            continue;
        }
        variables.push(Variable::User { name: name.to_string(), value: value.clone() });
    }

    let input_file_name = paths
        .input_path
        .as_deref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    variables.push(Variable::Standard { name: VAR_INPUT_TEXT_FILE, value: input_file_name });
    variables.push(Variable::Standard {
        name: VAR_DESTINATION_PATH,
        value: paths.output.path().display().to_string(),
    });
    variables.push(Variable::FilePath {
        name: VAR_PROMPT_PATH,
        value: paths.prompt_path.display().to_string(),
    });
    variables.push(Variable::FilePath {
        name: VAR_SCHEMA_FILE,
        value: paths.schema_path.display().to_string(),
    });
    if let Some(text) = stdin_text {
        variables.push(Variable::Stdin { value: text.to_string() });
    }

    if !errors.is_empty() {
        return Err(VariableErrors(errors));
    }

    let mut set = VariableSet::default();
    for variable in &variables {
        set.insert(variable);
    }
    Ok(set)
}

fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
