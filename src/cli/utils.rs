//! Shared helpers for CLI argument handling

/// Split a comma-separated flag value, dropping blanks. `None` when the flag
/// was not given.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|raw| {
        raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(ToString::to_string).collect()
    })
}
