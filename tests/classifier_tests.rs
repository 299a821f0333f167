use normaudit::script::{classify, Script};
use rstest::rstest;

fn named(label: &str) -> Script {
    Script::Named(label.to_string())
}

// --- LATIN-1 SPLIT ---
#[rstest]
#[case('a', Script::BasicLatin)]
#[case(' ', Script::BasicLatin)]
#[case('~', Script::BasicLatin)]
#[case('ß', Script::BasicLatin)] // no decomposition
#[case('×', Script::BasicLatin)]
#[case('é', Script::LatinDiacritics)]
#[case('ñ', Script::LatinDiacritics)]
#[case('Ü', Script::LatinDiacritics)]
#[case('\u{00A0}', Script::LatinDiacritics)] // <noBreak> compatibility mapping
fn test_latin1_characters(#[case] c: char, #[case] expected: Script) {
    assert_eq!(classify(c), expected, "wrong label for {:?}", c);
}

// --- FIXED BLOCKS ---
#[rstest]
#[case('Д', Script::Cyrillic)]
#[case('\u{0400}', Script::Cyrillic)]
#[case('\u{04FF}', Script::Cyrillic)]
#[case('ب', Script::Arabic)]
#[case('क', Script::Devanagari)]
#[case('ก', Script::Thai)]
#[case('\u{1100}', Script::Korean)] // Hangul Jamo
#[case('한', Script::Korean)]
#[case('\u{D7AF}', Script::Korean)]
#[case('あ', Script::Hiragana)]
#[case('カ', Script::Katakana)]
#[case('山', Script::Cjk)]
#[case('\u{9FFF}', Script::Cjk)]
fn test_fixed_ranges(#[case] c: char, #[case] expected: Script) {
    assert_eq!(classify(c), expected, "wrong label for U+{:04X}", c as u32);
}

// --- UNICODE NAME FALLBACK ---
#[rstest]
#[case('α', "GREEK")]
#[case('א', "HEBREW")]
#[case('ā', "LATIN")] // Latin Extended-A is outside the Latin-1 split
#[case('€', "EURO")]
#[case('ა', "GEORGIAN")]
fn test_unicode_name_fallback(#[case] c: char, #[case] expected: &str) {
    assert_eq!(classify(c), named(expected));
}

#[rstest]
#[case('\u{E000}')] // private use
#[case('\u{0378}')] // unassigned
fn test_unnamed_code_points_are_other(#[case] c: char) {
    assert_eq!(classify(c), Script::Other);
}

#[test]
fn test_labels_match_documented_text() {
    assert_eq!(Script::Cjk.to_string(), "CJK");
    assert_eq!(Script::LatinDiacritics.to_string(), "Latin-diacritics");
    assert_eq!(Script::BasicLatin.to_string(), "Basic-Latin");
    assert_eq!(named("GREEK").to_string(), "GREEK");
}

#[test]
fn test_labels_round_trip_through_text() {
    for script in [
        Script::Korean,
        Script::Cjk,
        Script::Other,
        named("HEBREW"),
    ] {
        assert_eq!(Script::from_label(script.as_str()), script);
    }
    // A name token spelled like a fixed label is that label.
    assert_eq!(Script::from_label("CJK"), Script::Cjk);
}
