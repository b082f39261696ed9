mod pattern_provider;
mod template_renderer;

pub use pattern_provider::PatternProvider;
pub use template_renderer::{RenderError, TemplateRenderer};
