/// Supplies the active profile's validation patterns for the two positional
/// parameters.
///
/// Implementations are configuration-driven so a deployment can redefine its
/// directive/layer vocabulary without touching validation logic. A value that
/// is valid under one profile may be invalid under another.
pub trait PatternProvider {
    /// Pattern for the directive parameter, if the profile has a usable one.
    fn directive_pattern(&self) -> Option<&str>;

    /// Pattern for the layer parameter, if the profile has a usable one.
    fn layer_pattern(&self) -> Option<&str>;

    /// Layer vocabulary tokens scanned during input-file layer inference.
    fn layer_tokens(&self) -> &[String];
}
