use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::constants::{NAME_PLACEHOLDER, ROOT_TAG, SVG_PLACEHOLDER, TAGS_PLACEHOLDER};

static TAG_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(\w+)[\s>]").expect("Failed to compile regex pattern for TAG_NAME_RE")
});
static SVG_PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| placeholder_regex(r"[ \t]*?", SVG_PLACEHOLDER));
static NAME_PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| placeholder_regex("", NAME_PLACEHOLDER));
static TAGS_PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| placeholder_regex("", TAGS_PLACEHOLDER));

fn placeholder_regex(prefix: &str, placeholder: &str) -> Regex {
    let pattern = format!("(?i){}{}", prefix, regex::escape(placeholder));
    Regex::new(&pattern).expect("Failed to compile regex pattern for template placeholder")
}

/// Collects the distinct tag names used in the markup in first-seen order, without the root tag
pub fn collect_tags(svg: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for captures in TAG_NAME_RE.captures_iter(svg) {
        let tag = &captures[1];
        if tag != ROOT_TAG && !tags.iter().any(|known| known == tag) {
            tags.push(tag.to_string());
        }
    }

    tags
}

/// Fills the template placeholders with the markup, component name and tag list
///
/// Placeholders are matched case-insensitively and every occurrence is
/// replaced. Horizontal whitespace in front of `%svg%` is dropped since the
/// markup carries its own indentation.
pub fn create_component(svg: &str, name: &str, template: &str) -> String {
    let tags = collect_tags(svg).join(", ");

    let component = SVG_PLACEHOLDER_RE.replace_all(template, NoExpand(svg));
    let component = NAME_PLACEHOLDER_RE.replace_all(&component, NoExpand(name));
    let component = TAGS_PLACEHOLDER_RE.replace_all(&component, NoExpand(tags.as_str()));

    component.into_owned()
}
