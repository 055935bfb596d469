//! Token estimation

/// Rough token count for LLM budgeting: characters divided by four, rounded up.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}
