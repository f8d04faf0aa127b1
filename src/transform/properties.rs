use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::STRIPPED_PROPERTIES;

static PROPERTY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    STRIPPED_PROPERTIES
        .iter()
        .map(|property| {
            let pattern = format!(r#"(?is)(<svg[^>]*) {}=".*?"(.*?>)"#, regex::escape(property));
            Regex::new(&pattern).expect("Failed to compile regex pattern for PROPERTY_PATTERNS")
        })
        .collect()
});

/// Removes the listed attributes from every opening `<svg>` tag
///
/// Attributes of the same name on other elements are kept. Each attribute is
/// removed until no occurrence is left, so running this twice is a no-op.
pub fn remove_svg_properties(input: &str) -> String {
    let mut svg = input.to_string();

    for pattern in PROPERTY_PATTERNS.iter() {
        // Every replacement shortens the string, so this terminates
        while pattern.is_match(&svg) {
            svg = pattern.replace_all(&svg, "${1}${2}").into_owned();
        }
    }

    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_svg_properties() {
        let input = r#"<svg version="1.1" id="Layer_1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" x="0px" xml:space="preserve" style="enable-background:new"><path/></svg>"#;
        assert_eq!(
            remove_svg_properties(input),
            r#"<svg x="0px"><path/></svg>"#
        );
    }

    #[test]
    fn test_only_root_tag_is_stripped() {
        let input = r#"<svg id="x"><rect id="y"/></svg>"#;
        assert_eq!(remove_svg_properties(input), r#"<svg><rect id="y"/></svg>"#);
    }

    #[test]
    fn test_similar_names_are_kept() {
        // `data-id` and `idx` only share a suffix or prefix with `id`
        let input = r#"<svg data-id="a" idx="b" width="2"><path/></svg>"#;
        assert_eq!(remove_svg_properties(input), input);
    }

    #[test]
    fn test_remove_svg_properties_is_idempotent() {
        let inputs = [
            r#"<svg id="a" version="1.1" width="3"><g id="b"/></svg>"#,
            r#"<svg id="a" id="b" style="fill:red"><path style="x"/></svg>"#,
            r#"<svg><path/></svg>"#,
        ];

        for input in inputs {
            let once = remove_svg_properties(input);
            let twice = remove_svg_properties(&once);
            assert_eq!(once, twice, "Stripping twice should match stripping once for {input}");
        }
    }

    #[test]
    fn test_duplicated_attribute_is_fully_removed() {
        let input = r#"<svg id="a" id="b" width="1"></svg>"#;
        assert_eq!(remove_svg_properties(input), r#"<svg width="1"></svg>"#);
    }
}
