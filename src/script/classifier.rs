use super::Script;
use unicode_normalization::char::{canonical_combining_class, decompose_compatible};

/// Maps one character to its script label.
///
/// Latin-1 characters split into `Basic-Latin` and `Latin-diacritics`; a fixed set of
/// code-point blocks is checked next, in order; anything else takes the first word of
/// its Unicode name, or `Other` when the code point has no name.
pub fn classify(c: char) -> Script {
    let code = c as u32;

    if code < 0x0100 {
        return if canonical_combining_class(c) != 0 || has_decomposition(c) {
            Script::LatinDiacritics
        } else {
            Script::BasicLatin
        };
    }

    match code {
        0x0400..=0x04FF => Script::Cyrillic,
        0x0600..=0x06FF => Script::Arabic,
        0x0900..=0x097F => Script::Devanagari,
        0x0E00..=0x0E7F => Script::Thai,
        0x1100..=0x11FF | 0xAC00..=0xD7AF => Script::Korean,
        0x3040..=0x309F => Script::Hiragana,
        0x30A0..=0x30FF => Script::Katakana,
        0x4E00..=0x9FFF => Script::Cjk,
        _ => from_unicode_name(c),
    }
}

fn from_unicode_name(c: char) -> Script {
    unicode_names2::name(c)
        .and_then(|name| {
            name.to_string()
                .split_whitespace()
                .next()
                .map(Script::from_label)
        })
        .unwrap_or(Script::Other)
}

/// True when the character has a canonical or compatibility decomposition.
fn has_decomposition(c: char) -> bool {
    let mut parts = 0;
    let mut identity = true;
    decompose_compatible(c, |d| {
        parts += 1;
        if d != c {
            identity = false;
        }
    });
    !(parts == 1 && identity)
}
