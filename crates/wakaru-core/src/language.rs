/// Word-validity lookup backing the scanner
pub trait WordValidity: Send + Sync {
    /// Whether `text` is a dictionary word. Implementations whose backing
    /// data has not finished loading must answer `false`, never fail.
    fn is_valid_word(&self, text: &str) -> bool;
}

/// Optional trait for word frequency data
pub trait FrequencyProvider: Send + Sync {
    /// Get frequency rank (lower = more common), None if not in list
    fn frequency(&self, word: &str) -> Option<u32>;
}

/// Script-variant generation for languages written in more than one script
pub trait ScriptVariants: Send + Sync {
    /// Every written form a dictionary entry for `word` may be indexed
    /// under, the word itself first
    fn all_forms(&self, word: &str) -> Vec<String>;

    /// Forms of a raw text fragment worth looking up
    fn text_variants(&self, text: &str) -> Vec<String>;

    /// Whether a match attempt should start at this character
    fn is_lookup_char(&self, c: char) -> bool;
}
