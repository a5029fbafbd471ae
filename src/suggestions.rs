//! # Error Suggestions
//!
//! Helpers that turn a failure into something a user can act on: what went
//! wrong and how to fix it. The library uses the `did_you_mean` helpers when
//! it meets an unknown descriptor key or license key; the CLI uses the
//! `anyhow` constructors for problems with its own arguments.

use std::path::Path;

use crate::schema::{License, ProjectProperty};

/// Generate an error for a configuration directory that does not exist.
///
/// Includes hints about the `--config-dir` flag and `PM_CONFIG_DIR`.
pub fn config_dir_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration directory not found: {path}\n\n\
         hint: Create the directory with a projects.pm file listing your project directories\n\
         hint: Use -c/--config-dir to specify a different directory\n\
         hint: Set PM_CONFIG_DIR environment variable",
        path = path.display()
    )
}

/// Generate an error for a configuration directory without a projects index.
pub fn projects_file_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Projects file not found: {path}\n\n\
         hint: Add one line per managed project, e.g. 'core=../core'\n\
         hint: Keys are informational, values are project directories",
        path = path.display()
    )
}

/// Hint for an unrecognised descriptor key, if a known key is close.
pub fn did_you_mean_property(key: &str) -> Option<String> {
    find_similar(key, &ProjectProperty::keys()).map(|s| format!("did you mean '{s}'?"))
}

/// Hint for an unknown license key: a close match, or the list of known keys.
pub fn did_you_mean_license(key: &str) -> String {
    let known = License::keys();
    match find_similar(key, &known) {
        Some(s) => format!("did you mean '{s}'?"),
        None => format!("known licenses are: {}", known.join(", ")),
    }
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut previous: Vec<usize> = (0..=b_len).collect();
    let mut current = vec![0usize; b_len + 1];

    for i in 1..=a_len {
        current[0] = i;
        for j in 1..=b_len {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            current[j] = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_len]
}
