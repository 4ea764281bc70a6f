//! Arabic normalization and tokenization.
//!
//! - Letter normalization: alef variants, alef maqsura, taa marbuta, gaf
//! - Diacritics (tashkeel) and tatwil removal
//! - Tokenization into Arabic-letter runs and full stops

use regex::Regex;
use std::sync::LazyLock;

/// Fathatan through sukun (U+064B..U+0652) plus tatwil (U+0640).
static DIACRITICS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{064B}-\x{0652}\x{0640}]").expect("diacritics pattern is valid")
});

/// Runs of Arabic letters (hamza U+0621 through yaa U+064A), or a single full stop.
static ARABIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{0621}-\x{064A}]+|\.").expect("token pattern is valid")
});

const ALEF: char = '\u{0627}';
const ALEF_MADDA: char = '\u{0622}';
const ALEF_HAMZA_ABOVE: char = '\u{0623}';
const ALEF_HAMZA_BELOW: char = '\u{0625}';
const ALEF_MAQSURA: char = '\u{0649}';
const YAA: char = '\u{064A}';
const TAA_MARBUTA: char = '\u{0629}';
const HAA: char = '\u{0647}';
const GAF: char = '\u{06AF}';
const KAF: char = '\u{0643}';

/// Normalize Arabic letter variants.
///
/// Alef with hamza or madda becomes bare alef, alef maqsura becomes yaa,
/// taa marbuta becomes haa, and gaf becomes kaf. Afterwards every `وال`
/// (conjunction waw fused to the definite article) is split into `و ال`.
#[must_use]
pub fn normalize_arabic(text: &str) -> String {
    let mapped: String = text
        .chars()
        .map(|c| match c {
            ALEF_HAMZA_BELOW | ALEF_HAMZA_ABOVE | ALEF_MADDA => ALEF,
            ALEF_MAQSURA => YAA,
            TAA_MARBUTA => HAA,
            GAF => KAF,
            other => other,
        })
        .collect();
    mapped.replace("\u{0648}\u{0627}\u{0644}", "\u{0648} \u{0627}\u{0644}")
}

/// Strip tashdid, fatha, tanwin fath, damma, tanwin damm, kasra, tanwin kasr,
/// sukun and tatwil.
#[must_use]
pub fn remove_diacritics(text: &str) -> String {
    DIACRITICS.replace_all(text, "").into_owned()
}

/// Extract Arabic-letter runs and full stops, in order of appearance.
///
/// Everything else (Latin text, digits, other punctuation, whitespace) is dropped.
#[must_use]
pub fn arabic_tokens(text: &str) -> Vec<&str> {
    ARABIC_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Full cleaning pipeline: diacritics removal, normalization, tokenization.
#[must_use]
pub fn prepare_arabic(text: &str) -> Vec<String> {
    let stripped = remove_diacritics(text);
    let normalized = normalize_arabic(&stripped);
    arabic_tokens(&normalized)
        .into_iter()
        .map(str::to_string)
        .collect()
}
