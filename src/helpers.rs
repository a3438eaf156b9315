use std::fs;
use std::path::Path;

use strsim::levenshtein;

/// Largest edit distance at which a file name still counts as a typo.
const MAX_TYPO_DISTANCE: usize = 2;

/// Pick the file name closest to a mistyped `target`.
///
/// Ties go to the earliest candidate, so callers should pass names in a
/// stable order.
pub fn find_similar_name<'a>(target: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|&name| (name, levenshtein(target, name)))
        .filter(|&(_, distance)| distance <= MAX_TYPO_DISTANCE)
        .min_by_key(|&(_, distance)| distance)
        .map(|(name, _)| name)
}

/// Suggest a sibling file whose name is a near-miss for a missing `path`.
pub fn suggest_sibling(path: &Path) -> Option<String> {
    let target = path.file_name()?.to_str()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut names: Vec<String> = fs::read_dir(parent)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    let candidates: Vec<&str> = names.iter().map(String::as_str).collect();

    let name = find_similar_name(target, &candidates)?;
    Some(path.with_file_name(name).display().to_string())
}
