//! Configuration-backed pattern provider.

use crate::domain::config::AppConfig;
use crate::ports::PatternProvider;

/// Default directive vocabulary.
pub const DEFAULT_DIRECTIVE_PATTERN: &str = "^(to|summary|defect)$";

/// Default layer vocabulary.
pub const DEFAULT_LAYER_PATTERN: &str = "^(project|issue|task)$";

fn default_layer_tokens() -> Vec<String> {
    vec!["project".to_string(), "issue".to_string(), "task".to_string()]
}

/// `PatternProvider` backed by the merged profile configuration.
///
/// A profile that omits a pattern gets the default vocabulary; a profile that
/// sets a pattern to the empty string disables the parameter, which surfaces
/// as `PatternNotFound` during validation.
#[derive(Debug, Clone)]
pub struct ConfigPatternProvider {
    directive_pattern: Option<String>,
    layer_pattern: Option<String>,
    layer_tokens: Vec<String>,
}

impl ConfigPatternProvider {
    pub fn from_config(config: &AppConfig) -> Self {
        let two = &config.params.two;
        Self {
            directive_pattern: effective_pattern(
                two.directive_type.pattern.as_deref(),
                DEFAULT_DIRECTIVE_PATTERN,
            ),
            layer_pattern: effective_pattern(
                two.layer_type.pattern.as_deref(),
                DEFAULT_LAYER_PATTERN,
            ),
            layer_tokens: two.layer_type.tokens.clone().unwrap_or_else(default_layer_tokens),
        }
    }
}

fn effective_pattern(configured: Option<&str>, default: &str) -> Option<String> {
    match configured {
        Some(pattern) if pattern.is_empty() => None,
        Some(pattern) => Some(pattern.to_string()),
        None => Some(default.to_string()),
    }
}

impl PatternProvider for ConfigPatternProvider {
    fn directive_pattern(&self) -> Option<&str> {
        self.directive_pattern.as_deref()
    }

    fn layer_pattern(&self) -> Option<&str> {
        self.layer_pattern.as_deref()
    }

    fn layer_tokens(&self) -> &[String] {
        &self.layer_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let provider = ConfigPatternProvider::from_config(&AppConfig::default());
        assert_eq!(provider.directive_pattern(), Some(DEFAULT_DIRECTIVE_PATTERN));
        assert_eq!(provider.layer_pattern(), Some(DEFAULT_LAYER_PATTERN));
        assert_eq!(provider.layer_tokens(), ["project", "issue", "task"]);
    }

    #[test]
    fn configured_patterns_replace_defaults() {
        let mut config = AppConfig::default();
        config.params.two.directive_type.pattern = Some("^(web|api)$".to_string());

        let provider = ConfigPatternProvider::from_config(&config);
        assert_eq!(provider.directive_pattern(), Some("^(web|api)$"));
        assert_eq!(provider.layer_pattern(), Some(DEFAULT_LAYER_PATTERN));
    }

    #[test]
    fn empty_pattern_disables_the_parameter() {
        let mut config = AppConfig::default();
        config.params.two.layer_type.pattern = Some(String::new());

        let provider = ConfigPatternProvider::from_config(&config);
        assert_eq!(provider.layer_pattern(), None);
    }

    #[test]
    fn configured_tokens_replace_the_inference_vocabulary() {
        let mut config = AppConfig::default();
        config.params.two.layer_type.tokens =
            Some(vec!["epic".to_string(), "story".to_string()]);

        let provider = ConfigPatternProvider::from_config(&config);
        assert_eq!(provider.layer_tokens(), ["epic", "story"]);
    }
}
