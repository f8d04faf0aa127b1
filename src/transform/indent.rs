//! Heuristic indentation of one-tag-per-line markup
//!
//! No nesting is tracked. The indent level moves according to the tag type of
//! the previous line and of the current line only.

use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<.+/>").expect("Failed to compile regex pattern for SINGLE_RE"));
static CLOSING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</.+>").expect("Failed to compile regex pattern for CLOSING_RE"));
static OPENING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<.*>").expect("Failed to compile regex pattern for OPENING_RE"));

/// Kind of tag found on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagType {
    /// No tag on the line
    None,
    /// Self-closing tag, e.g. `<Rect/>`
    Single,
    /// Closing tag, e.g. `</G>`
    Closing,
    /// Any other tag, e.g. `<G>`
    Opening,
}

/// Classifies a line, checking self-closing, closing and opening tags in that order
pub fn classify_line(line: &str) -> TagType {
    if SINGLE_RE.is_match(line) {
        TagType::Single
    } else if CLOSING_RE.is_match(line) {
        TagType::Closing
    } else if OPENING_RE.is_match(line) {
        TagType::Opening
    } else {
        TagType::None
    }
}

/// Indentation state carried from one line to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentState {
    /// Number of spaces in front of the current line
    pub level: usize,
    /// Tag type of the previous line
    pub previous: TagType,
}

impl IndentState {
    /// State before the first line: one level deep inside an implicit opening tag
    pub fn initial(tab_size: usize) -> Self {
        IndentState {
            level: tab_size,
            previous: TagType::Opening,
        }
    }

    /// Computes the state for a line of type `current`
    ///
    /// | previous | current     | level          |
    /// |----------|-------------|----------------|
    /// | Opening  | not Closing | `+ tab_size`   |
    /// | Single   | Closing     | `- tab_size`   |
    /// | Closing  | Closing     | `- tab_size`   |
    /// | other    | other       | unchanged      |
    ///
    /// The level never drops below zero and saturates at `usize::MAX`.
    pub fn advance(self, current: TagType, tab_size: usize) -> Self {
        let level = match (self.previous, current) {
            (TagType::Opening, TagType::Closing) => self.level,
            (TagType::Opening, _) => self.level.saturating_add(tab_size),
            (TagType::Single, TagType::Closing) | (TagType::Closing, TagType::Closing) => {
                self.level.saturating_sub(tab_size)
            }
            _ => self.level,
        };

        IndentState {
            level,
            previous: current,
        }
    }
}

/// Prefixes every line of `input` with spaces according to the indentation state machine
pub fn add_tabs(input: &str, tab_size: usize) -> String {
    let mut state = IndentState::initial(tab_size);

    input
        .split('\n')
        .map(|line| {
            state = state.advance(classify_line(line), tab_size);
            format!("{}{}", " ".repeat(state.level), line)
        })
        .collect::<Vec<String>>()
        .join("\n")
}
