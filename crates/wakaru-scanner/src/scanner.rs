use std::collections::HashSet;
use std::sync::Arc;

use wakaru_core::language::{ScriptVariants, WordValidity};
use wakaru_core::types::{WordMatch, WordStatus};
use wakaru_transform::LanguageTransformer;

use crate::status::classify;

/// Longest substring attempted at each scan position, in characters
const MAX_LOOKUP_CHARS: usize = 20;

/// Finds dictionary words in raw text by longest-match scanning.
///
/// Every collaborator is injected, so independent configurations (a test
/// rule set, a second language) can coexist without global state. A scanner
/// is read-only after construction and can be shared across threads.
pub struct WordScanner {
    transformer: Arc<LanguageTransformer>,
    validity: Arc<dyn WordValidity>,
    script: Arc<dyn ScriptVariants>,
}

impl WordScanner {
    pub fn new(
        transformer: Arc<LanguageTransformer>,
        validity: Arc<dyn WordValidity>,
        script: Arc<dyn ScriptVariants>,
    ) -> Self {
        Self {
            transformer,
            validity,
            script,
        }
    }

    /// Scan text left to right, reporting non-overlapping matches in order.
    ///
    /// Offsets in the returned matches are character offsets into `text`.
    /// Characters no match starts at are skipped, not reported.
    pub fn find_words(&self, text: &str) -> Vec<WordMatch> {
        let chars: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if !self.script.is_lookup_char(chars[pos]) {
                pos += 1;
                continue;
            }
            match self.match_at(&chars, pos) {
                Some(found) => {
                    pos = found.end;
                    matches.push(found);
                }
                None => pos += 1,
            }
        }

        matches
    }

    /// Classify a recognized word against the user's vocabulary sets
    pub fn word_status(
        &self,
        base_form: &str,
        surface: &str,
        known: &HashSet<String>,
        ignored: &HashSet<String>,
        session_ignored: &HashSet<String>,
    ) -> WordStatus {
        classify(
            self.script.as_ref(),
            base_form,
            surface,
            known,
            ignored,
            session_ignored,
        )
    }

    /// Longest-first match attempt at a single position. The first valid
    /// candidate wins; within one length the variant and candidate
    /// generation order decides, a deterministic but not semantically
    /// meaningful tie-break.
    fn match_at(&self, chars: &[char], pos: usize) -> Option<WordMatch> {
        let limit = MAX_LOOKUP_CHARS.min(chars.len() - pos);
        for len in (1..=limit).rev() {
            let slice = &chars[pos..pos + len];
            if !slice.iter().any(|&c| self.script.is_lookup_char(c)) {
                continue;
            }
            let surface: String = slice.iter().collect();
            for variant in self.script.text_variants(&surface) {
                for candidate in self.transformer.transform(&variant) {
                    if let Some(base_form) = self.lookup(&candidate.text) {
                        return Some(WordMatch {
                            surface,
                            base_form,
                            start: pos,
                            end: pos + len,
                            inflections: candidate.inflections(),
                        });
                    }
                }
            }
        }
        None
    }

    /// Check a deinflection candidate against the word list, trying each of
    /// its script variants since a word may be indexed under another script
    fn lookup(&self, candidate: &str) -> Option<String> {
        self.script
            .all_forms(candidate)
            .into_iter()
            .find(|form| self.validity.is_valid_word(form))
    }
}
