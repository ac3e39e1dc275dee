use std::collections::HashSet;

use wakaru_core::language::ScriptVariants;
use wakaru_core::types::WordStatus;

/// Decide known/unknown/ignored for a recognized word.
///
/// Both the dictionary form and the surface form are expanded into their
/// script variants before checking, so a word stored in hiragana still
/// classifies correctly when it was matched in katakana. Session-level
/// suppression is checked first, then the persistent ignore list, then the
/// known list: a word explicitly suppressed stays suppressed even when a
/// known-vocabulary source also lists it.
pub fn classify(
    script: &dyn ScriptVariants,
    base_form: &str,
    surface: &str,
    known: &HashSet<String>,
    ignored: &HashSet<String>,
    session_ignored: &HashSet<String>,
) -> WordStatus {
    let mut forms = script.all_forms(base_form);
    for form in script.all_forms(surface) {
        if !forms.contains(&form) {
            forms.push(form);
        }
    }

    if forms.iter().any(|form| session_ignored.contains(form)) {
        return WordStatus::Ignored;
    }
    if forms.iter().any(|form| ignored.contains(form)) {
        return WordStatus::Ignored;
    }
    if forms.iter().any(|form| known.contains(form)) {
        return WordStatus::Known;
    }
    WordStatus::Unknown
}
