//! Layer inference from input file paths.

/// Derive a missing layer hint from an input file path.
///
/// Pure string scan, no filesystem access: the path is searched for the
/// literal tokens of the layer vocabulary, anywhere in the string (directory
/// segments or filename). The token with the earliest occurrence wins; equal
/// positions resolve in vocabulary order. `None` when no token is present.
pub fn infer_layer(from_file: &str, tokens: &[String]) -> Option<String> {
    tokens
        .iter()
        .filter_map(|token| from_file.find(token.as_str()).map(|pos| (pos, token)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, token)| token.clone())
}
