use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SPECIAL_CHARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^a-zA-Z0-9\s\-_]").expect("Failed to compile regex pattern for SPECIAL_CHARS_RE")
});
static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(-+|_+|\s+)([a-z])").expect("Failed to compile regex pattern for SEPARATOR_RE")
});

/// Returns the file name without its last extension
///
/// `icon.svg` gives `icon`, `icon.dark.svg` gives `icon.dark` and a name
/// without any dot is returned unchanged.
pub fn filename_without_extension(path: &Path) -> String {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match filename.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => filename,
    }
}

/// Derives a PascalCase component name from a file name stem
pub fn component_name(name: &str) -> String {
    let cleaned = SPECIAL_CHARS_RE.replace_all(name, "").to_lowercase();
    let camel_cased = SEPARATOR_RE.replace_all(&cleaned, |captures: &Captures| {
        captures[2].to_uppercase()
    });

    let mut chars = camel_cased.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
