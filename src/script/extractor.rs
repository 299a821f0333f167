use super::{classify, Script};
use std::collections::BTreeSet;

fn is_script_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_ascii()
}

/// Distinct script labels of the non-ASCII, non-whitespace characters in `text`.
pub fn scripts_in_text(text: &str) -> BTreeSet<Script> {
    text.chars().filter(|&c| is_script_char(c)).map(classify).collect()
}

/// Same test as `!scripts_in_text(text).is_empty()`, without classifying.
pub fn has_non_ascii_script(text: &str) -> bool {
    text.chars().any(is_script_char)
}
