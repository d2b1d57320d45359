use wana_kana::{
    ConvertJapanese,
    Options,
};

/// Converts what the user types into the kun'yomi field into kana.
///
/// Called on every keystroke. Returning `None` means the conversion is not
/// available and the raw input should be kept as typed.
pub trait Transliterator: Send {
    fn transliterate(&self, raw: &str) -> Option<String>;
}

/// Romaji to hiragana in IME mode, so a trailing `n` waits for the next key
/// instead of turning into `ん` mid-word.
#[derive(Debug, Clone, Copy, Default)]
pub struct WanaKanaTransliterator;

impl Transliterator for WanaKanaTransliterator {
    fn transliterate(&self, raw: &str) -> Option<String> {
        let options = Options { imemode: true, use_obsolete_kana: false, ..Default::default() };
        Some(raw.to_hiragana_with_opt(options))
    }
}

/// Keeps input untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Transliterator for Passthrough {
    fn transliterate(&self, _raw: &str) -> Option<String> {
        None
    }
}
