//! Japanese script classification and conversion

use unicode_normalization::UnicodeNormalization;
use wakaru_core::language::ScriptVariants;

/// Distance between a hiragana code point and its katakana counterpart
const KANA_TABLE_DISTANCE: u32 = 96;

pub fn is_hiragana(c: char) -> bool {
    (0x3040..=0x309F).contains(&(c as u32))
}

pub fn is_katakana(c: char) -> bool {
    (0x30A0..=0x30FF).contains(&(c as u32))
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn is_kanji(c: char) -> bool {
    (0x4E00..=0x9FFF).contains(&(c as u32)) || c == '々'
}

/// Convert katakana characters to hiragana, leaving everything else alone
pub fn to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            if (0x30A1..=0x30F6).contains(&cp) {
                char::from_u32(cp - KANA_TABLE_DISTANCE).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert hiragana characters to katakana, leaving everything else alone
pub fn to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            if (0x3041..=0x3096).contains(&cp) {
                char::from_u32(cp + KANA_TABLE_DISTANCE).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// NFKC-normalize lookup text. The scanner never rewrites its input (match
/// offsets index the original text), so callers apply this before scanning
/// when their source may contain full-width or decomposed characters.
pub fn normalize(text: &str) -> String {
    let text: String = text.trim().nfkc().collect();
    text.replace(['\n', '\r'], "")
}

/// Script-variant support for Japanese
#[derive(Debug, Default, Clone, Copy)]
pub struct JapaneseScript;

impl ScriptVariants for JapaneseScript {
    fn all_forms(&self, word: &str) -> Vec<String> {
        let mut forms = vec![word.to_string()];
        for form in [to_hiragana(word), to_katakana(word)] {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
        forms
    }

    fn text_variants(&self, text: &str) -> Vec<String> {
        self.all_forms(text)
    }

    fn is_lookup_char(&self, c: char) -> bool {
        is_kana(c) || is_kanji(c)
    }
}
