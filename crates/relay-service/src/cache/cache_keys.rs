//! Cache key generators for consistent key naming.

/// Generate the cache key for a prompt.
///
/// The prompt is appended verbatim: no trimming and no case folding, so two
/// prompts share an entry only when they are byte-identical.
#[must_use]
pub fn generation(prefix: &str, prompt: &str) -> String {
    format!("{}{}", prefix, prompt)
}
