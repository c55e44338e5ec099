//! Builds the comma-separated target list sent to the gitignore API.

use std::collections::HashSet;

/// Targets always requested unless overridden by `PYINIT_DEFAULT_TARGETS`.
pub const DEFAULT_TARGETS: [&str; 3] = ["macos", "windows", "python"];

/// Splits on commas, trims, lowercases and dedupes, keeping first occurrence.
pub fn normalize<I, S>(targets: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for target in targets {
        for token in target.as_ref().split(',') {
            let token = token.trim().to_lowercase();
            if !token.is_empty() && seen.insert(token.clone()) {
                out.push(token);
            }
        }
    }

    out
}

/// User targets followed by any defaults not already present.
///
/// Order is deterministic but carries no meaning for the API.
pub fn build_options<S: AsRef<str>>(targets: &[S], defaults: &[String]) -> Vec<String> {
    normalize(targets.iter().map(AsRef::as_ref).chain(defaults.iter().map(String::as_str)))
}

pub fn join_options(options: &[String]) -> String {
    options.join(",")
}
