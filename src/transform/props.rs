use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::PROPS_TOKEN;
use crate::errors::{Result, tag_not_found_error};

static OPENING_SVG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<svg.*?>").expect("Failed to compile regex pattern for OPENING_SVG_RE")
});

/// Inserts the spread-props token right before the `>` closing the opening `<svg` tag
///
/// # Errors
/// Returns a `TagNotFound` error if there is no opening `<svg` tag
pub fn add_props(input: &str) -> Result<String> {
    let opening = OPENING_SVG_RE
        .find(input)
        .ok_or_else(|| tag_not_found_error("svg"))?;

    // The match always ends with the one-byte `>`
    let insert_at = opening.end() - 1;
    Ok(format!(
        "{} {}{}",
        &input[..insert_at],
        PROPS_TOKEN,
        &input[insert_at..]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_add_props() {
        assert_eq!(
            add_props(r#"<svg width="1">"#).unwrap(),
            r#"<svg width="1" {...props}>"#
        );
    }

    #[test]
    fn test_add_props_on_capitalized_markup() {
        assert_eq!(
            add_props("<Svg>\n<Rect/>\n</Svg>\n").unwrap(),
            "<Svg {...props}>\n<Rect/>\n</Svg>\n"
        );
    }

    #[test]
    fn test_add_props_preserves_surroundings() {
        assert_eq!(
            add_props("  <svg><path/></svg>").unwrap(),
            "  <svg {...props}><path/></svg>"
        );
    }

    #[test]
    fn test_add_props_only_first_svg() {
        assert_eq!(
            add_props("<svg><svg></svg></svg>").unwrap(),
            "<svg {...props}><svg></svg></svg>"
        );
    }

    #[test]
    fn test_add_props_without_svg_tag() {
        let result = add_props("<path/>");
        assert!(matches!(result, Err(Error::TagNotFound { .. })));

        let result = add_props("<svg");
        assert!(matches!(result, Err(Error::TagNotFound { .. })));
    }
}
