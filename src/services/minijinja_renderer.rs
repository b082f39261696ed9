//! Template rendering via Minijinja.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use minijinja::Environment;

use crate::domain::VariableSet;
use crate::ports::{RenderError, TemplateRenderer};

/// Template renderer using Minijinja.
///
/// Prompt templates are substitution-only: logic blocks and comments are
/// rejected before rendering. Variables absent from the table render empty.
pub struct MinijinjaRenderer;

impl MinijinjaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinijinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(
        &self,
        template: &str,
        variables: &VariableSet,
        template_name: &str,
    ) -> Result<String, RenderError> {
        if let Some(token) = disallowed_template_token(template) {
            return Err(RenderError::TemplateSyntaxNotAllowed {
                template: template_name.to_string(),
                token: token.to_string(),
            });
        }

        let env = ENV.get_or_init(Environment::new);

        env.render_str(template, variables.as_map())
            .map_err(|err| render_error(template_name, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Render the prompt template at `path`.
///
/// The existence check lives here, with the renderer, not in the resolution
/// engine that produced the path.
pub fn render_prompt_file(
    renderer: &dyn TemplateRenderer,
    path: &Path,
    variables: &VariableSet,
) -> Result<String, RenderError> {
    if !path.is_file() {
        return Err(RenderError::TemplateNotFound(path.display().to_string()));
    }
    let template = fs::read_to_string(path).map_err(|err| RenderError::TemplateRead {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    renderer.render(&template, variables, &path.display().to_string())
}

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}

fn render_error(template_name: &str, err: impl std::fmt::Display) -> RenderError {
    RenderError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::domain::paths::{OutputTarget, ResolvedPathSet};
    use crate::domain::variables;

    fn sample_variables() -> VariableSet {
        let paths = ResolvedPathSet {
            prompt_path: PathBuf::from("prompts/to/issue/f_issue.md"),
            schema_path: PathBuf::from("schema/to/issue/base.schema.md"),
            input_path: None,
            output: OutputTarget {
                dir: PathBuf::from("issue"),
                file_name: "report.md".to_string(),
            },
        };
        variables::assemble(&paths, Some("piped"), &[]).unwrap()
    }

    #[test]
    fn variables_are_substituted() {
        let rendered = MinijinjaRenderer::new()
            .render("write to {{ destination_path }}", &sample_variables(), "t")
            .unwrap();
        assert_eq!(rendered, "write to issue/report.md");
    }

    #[test]
    fn unknown_variables_render_empty() {
        let rendered = MinijinjaRenderer::new()
            .render("[{{ not_defined }}]", &sample_variables(), "t")
            .unwrap();
        assert_eq!(rendered, "[]");
    }

    #[test]
    fn logic_blocks_are_rejected() {
        let err = MinijinjaRenderer::new()
            .render("{% if x %}y{% endif %}", &sample_variables(), "t")
            .unwrap_err();
        assert!(matches!(err, RenderError::TemplateSyntaxNotAllowed { .. }));
    }

    #[test]
    fn missing_template_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = render_prompt_file(
            &MinijinjaRenderer::new(),
            &dir.path().join("absent.md"),
            &sample_variables(),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(_)));
    }

    #[test]
    fn template_file_is_read_and_rendered() {
        let dir = TempDir::new().unwrap();
        let template_path = dir.path().join("f_issue.md");
        std::fs::write(&template_path, "schema: {{ schema_file }}\n{{ input_text }}\n").unwrap();

        let rendered =
            render_prompt_file(&MinijinjaRenderer::new(), &template_path, &sample_variables())
                .unwrap();
        assert_eq!(rendered, "schema: schema/to/issue/base.schema.md\npiped");
    }
}
