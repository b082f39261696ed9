mod config_filesystem;
mod config_patterns;
mod minijinja_renderer;

pub use config_filesystem::{CONFIG_DIR, load_config};
pub use config_patterns::{
    ConfigPatternProvider, DEFAULT_DIRECTIVE_PATTERN, DEFAULT_LAYER_PATTERN,
};
pub use minijinja_renderer::{MinijinjaRenderer, render_prompt_file};
