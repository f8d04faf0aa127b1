use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, tag_not_found_error};

static SVG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<svg.*?</svg>").expect("Failed to compile regex pattern for SVG_RE")
});
static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<title.*?</title>").expect("Failed to compile regex pattern for TITLE_RE")
});
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s\s+").expect("Failed to compile regex pattern for WHITESPACE_RE")
});
static EMPTY_GROUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<g>\s*</g>").expect("Failed to compile regex pattern for EMPTY_GROUP_RE")
});
static GAP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">\s+<").expect("Failed to compile regex pattern for GAP_RE"));

/// Extracts the first `<svg>…</svg>` element and cleans it up
///
/// Titles and empty groups are removed, whitespace runs are collapsed and
/// whitespace between adjacent tags is dropped.
///
/// # Errors
/// Returns a `TagNotFound` error if the input has no `<svg>` element
pub fn extract_svg_tag(input: &str) -> Result<String> {
    let svg = SVG_RE
        .find(input)
        .ok_or_else(|| tag_not_found_error("svg"))?
        .as_str();

    let svg = TITLE_RE.replace_all(svg, "");
    let svg = WHITESPACE_RE.replace_all(&svg, " ");
    let svg = EMPTY_GROUP_RE.replace_all(&svg, "");
    let svg = GAP_RE.replace_all(&svg, "><");

    Ok(svg.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_extract_svg_tag() {
        let input = "<?xml version=\"1.0\"?>\n<!-- icon -->\n<svg width=\"24\">\n  <rect/>\n</svg>\n";
        assert_eq!(
            extract_svg_tag(input).unwrap(),
            "<svg width=\"24\"><rect/></svg>"
        );
    }

    #[test]
    fn test_extract_first_svg_only() {
        let input = "<svg><circle/></svg><svg><rect/></svg>";
        assert_eq!(extract_svg_tag(input).unwrap(), "<svg><circle/></svg>");
    }

    #[test]
    fn test_extract_case_insensitive() {
        let input = "<SVG viewBox=\"0 0 1 1\"><rect/></SVG>";
        assert_eq!(
            extract_svg_tag(input).unwrap(),
            "<SVG viewBox=\"0 0 1 1\"><rect/></SVG>"
        );
    }

    #[test]
    fn test_extract_removes_title() {
        let input = "<svg><title>\n  Home icon\n</title><path/></svg>";
        assert_eq!(extract_svg_tag(input).unwrap(), "<svg><path/></svg>");
    }

    #[test]
    fn test_extract_removes_empty_groups() {
        let input = "<svg>\n  <g>\n  </g>\n  <G></G>\n  <g><path/></g>\n</svg>";
        assert_eq!(
            extract_svg_tag(input).unwrap(),
            "<svg><g><path/></g></svg>"
        );
    }

    #[test]
    fn test_extract_collapses_whitespace() {
        let input = "<svg   width=\"1\"\t\theight=\"2\"><path d=\"M0  0\"/></svg>";
        assert_eq!(
            extract_svg_tag(input).unwrap(),
            "<svg width=\"1\" height=\"2\"><path d=\"M0 0\"/></svg>"
        );
    }

    #[test]
    fn test_extract_without_svg_tag() {
        let result = extract_svg_tag("<html><body/></html>");
        assert!(matches!(result, Err(Error::TagNotFound { .. })));

        // An unterminated element does not count either
        let result = extract_svg_tag("<svg><rect/>");
        assert!(matches!(result, Err(Error::TagNotFound { .. })));
    }
}
