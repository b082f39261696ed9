use thiserror::Error;

use crate::domain::VariableSet;

/// Error produced by the template-rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The prompt template file was not found.
    #[error("Prompt template not found: {0}")]
    TemplateNotFound(String),

    /// Failed to read the prompt template file.
    #[error("Failed to read prompt template {path}: {reason}")]
    TemplateRead { path: String, reason: String },

    /// The template uses syntax beyond variable substitution.
    #[error("Template {template} uses disallowed syntax '{token}'")]
    TemplateSyntaxNotAllowed { template: String, token: String },

    /// Failed to render the template with the provided variables.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRender { template: String, reason: String },
}

/// Trait for rendering prompt templates.
///
/// This abstraction keeps the template engine out of the domain layer. The
/// resolution engine hands over a finished variable table; existence checks
/// on the template file are the renderer's responsibility, not the engine's.
pub trait TemplateRenderer {
    /// Render a template string with the given variable table.
    ///
    /// # Arguments
    /// * `template` - The template string to render.
    /// * `variables` - The substitution table to render with.
    /// * `template_name` - A name for the template (for error reporting).
    fn render(
        &self,
        template: &str,
        variables: &VariableSet,
        template_name: &str,
    ) -> Result<String, RenderError>;
}
