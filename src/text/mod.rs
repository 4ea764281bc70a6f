//! Text cleaning before tokenization.

pub mod arabic;

pub use arabic::{arabic_tokens, normalize_arabic, prepare_arabic, remove_diacritics};
