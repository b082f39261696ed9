//! The two-parameter generate flow.
//!
//! Orchestrates one resolution pass: profile, config, parameter validation,
//! the three path resolvers, variable assembly, and finally rendering. The
//! whole pass executes once per invocation and its outputs are immutable.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, ConfigProfileName, FilenameHashGenerator, ResolvedPathSet, VariableSet, paths,
    resolve_pair, variables,
};
use crate::ports::PatternProvider;
use crate::services::{ConfigPatternProvider, MinijinjaRenderer, load_config, render_prompt_file};

/// Options for a generate run, mirroring the CLI option surface.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// `-f/--from` input source path.
    pub from_file: Option<String>,
    /// `-o/--destination` output file or directory.
    pub destination: Option<String>,
    /// `-i/--input` explicit input-layer override.
    pub input_layer: Option<String>,
    /// `-a/--adaptation` prompt filename suffix.
    pub adaptation: Option<String>,
    /// `--config/-c` profile selector.
    pub config_profile: Option<String>,
    /// `--uv-<name>=<value>` custom variables in occurrence order.
    pub custom_variables: Vec<(String, String)>,
    /// Piped stdin content, when present.
    pub stdin_text: Option<String>,
}

/// Fully resolved and rendered prompt for one invocation.
#[derive(Debug, Clone)]
pub struct GeneratedPrompt {
    /// Rendered prompt text.
    pub content: String,
    /// The resolved path bundle.
    pub paths: ResolvedPathSet,
    /// The substitution table used for rendering.
    pub variables: VariableSet,
}

/// Run the generate flow in the process working directory.
pub fn execute(
    raw_directive: &str,
    raw_layer: &str,
    options: &GenerateOptions,
) -> Result<GeneratedPrompt, AppError> {
    let cwd = env::current_dir()?;
    execute_in(&cwd, raw_directive, raw_layer, options)
}

/// Run the generate flow with an explicit working directory.
pub fn execute_in(
    cwd: &Path,
    raw_directive: &str,
    raw_layer: &str,
    options: &GenerateOptions,
) -> Result<GeneratedPrompt, AppError> {
    let profile = ConfigProfileName::resolve(options.config_profile.as_deref())?;
    let config = load_config(cwd, &profile)?;
    let patterns = ConfigPatternProvider::from_config(&config);

    let (directive, layer) = resolve_pair(raw_directive, raw_layer, &patterns)?;

    let prompt_path = paths::prompt::resolve(
        Path::new(&config.app_prompt.base_dir),
        &directive,
        &layer,
        options.input_layer.as_deref(),
        options.from_file.as_deref(),
        options.adaptation.as_deref(),
        patterns.layer_tokens(),
    )?;
    let schema_path =
        paths::schema::resolve(Path::new(&config.app_schema.base_dir), &directive, &layer)?;
    let input_path = paths::input::resolve(options.from_file.as_deref())?;
    let output = paths::output::resolve(
        options.destination.as_deref(),
        &layer,
        cwd,
        &FilenameHashGenerator::new(),
    )?;

    let resolved = ResolvedPathSet { prompt_path, schema_path, input_path, output };
    let table =
        variables::assemble(&resolved, options.stdin_text.as_deref(), &options.custom_variables)?;

    let template_path = join_cwd(cwd, &resolved.prompt_path);
    let content = render_prompt_file(&MinijinjaRenderer::new(), &template_path, &table)?;

    Ok(GeneratedPrompt { content, paths: resolved, variables: table })
}

fn join_cwd(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_file(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn write_default_config(root: &Path) {
        write_file(
            root,
            ".taskdown/config/default-app.yml",
            "app_prompt:\n  base_dir: prompts\napp_schema:\n  base_dir: schema\n",
        );
    }

    #[test]
    fn full_pass_resolves_and_renders() {
        let root = TempDir::new().unwrap();
        write_default_config(root.path());
        write_file(
            root.path(),
            "prompts/to/issue/f_issue.md",
            "write {{ destination_path }} per {{ schema_file }}",
        );

        let options = GenerateOptions {
            destination: Some("report.md".to_string()),
            ..GenerateOptions::default()
        };
        let generated = execute_in(root.path(), "to", "issue", &options).unwrap();

        assert_eq!(
            generated.content,
            "write issue/report.md per schema/to/issue/base.schema.md"
        );
        assert_eq!(
            generated.paths.prompt_path,
            PathBuf::from("prompts/to/issue/f_issue.md")
        );
    }

    #[test]
    fn inferred_layer_selects_the_template_file() {
        let root = TempDir::new().unwrap();
        write_default_config(root.path());
        write_file(root.path(), "prompts/to/task/f_issue.md", "issue-shaped");

        let options = GenerateOptions {
            from_file: Some("something/created/123_issue_file.md".to_string()),
            ..GenerateOptions::default()
        };
        let generated = execute_in(root.path(), "to", "task", &options).unwrap();

        assert_eq!(generated.content, "issue-shaped");
        assert_eq!(generated.variables.get("input_text_file"), Some("123_issue_file.md"));
    }

    #[test]
    fn invalid_directive_fails_before_any_path_work() {
        let root = TempDir::new().unwrap();
        write_default_config(root.path());

        let err =
            execute_in(root.path(), "nonsense", "issue", &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn missing_template_is_a_render_error_not_a_resolution_error() {
        let root = TempDir::new().unwrap();
        write_default_config(root.path());

        let err = execute_in(root.path(), "to", "issue", &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
    }

    #[test]
    fn variable_errors_are_aggregated() {
        let root = TempDir::new().unwrap();
        write_default_config(root.path());
        write_file(root.path(), "prompts/to/issue/f_issue.md", "body");

        let options = GenerateOptions {
            custom_variables: vec![
                ("uv-".to_string(), "x".to_string()),
                ("uv-no spaces".to_string(), "y".to_string()),
            ],
            ..GenerateOptions::default()
        };
        let err = execute_in(root.path(), "to", "issue", &options).unwrap_err();

        match err {
            AppError::Variables(errors) => assert_eq!(errors.0.len(), 2),
            other => panic!("expected variable errors, got {other:?}"),
        }
    }
}
