//! SVG transformation module
//!
//! This module contains the textual rewrite stages that turn raw SVG markup
//! into component markup. Every stage is a pure function over an immutable
//! input string.

mod capitalize;
mod component;
mod extract;
mod indent;
mod naming;
mod properties;
mod props;

pub use capitalize::capitalize_tags;
pub use component::{collect_tags, create_component};
pub use extract::extract_svg_tag;
pub use indent::{IndentState, TagType, add_tabs, classify_line};
pub use naming::{component_name, filename_without_extension};
pub use properties::remove_svg_properties;
pub use props::add_props;

use log::debug;

use crate::errors::Result;

/// Runs every rewrite stage on `content` in order and wraps the result in `template`
///
/// # Errors
/// Returns a `TagNotFound` error if the content has no `<svg>` element
pub fn transform_svg(content: &str, name: &str, template: &str, tab_size: usize) -> Result<String> {
    let svg = extract_svg_tag(content)?;
    let svg = remove_svg_properties(&svg);
    let svg = capitalize_tags(&svg);
    let svg = add_props(&svg)?;
    let svg = add_tabs(&svg, tab_size);
    debug!("Transformed markup for {name}:\n{svg}");

    Ok(create_component(&svg, name, template))
}
