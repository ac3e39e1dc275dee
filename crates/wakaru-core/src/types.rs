use serde::{Deserialize, Serialize};

/// One recognized word in a scanned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// The word exactly as it appears in the source text
    pub surface: String,
    /// Dictionary form the surface deinflects to
    pub base_form: String,
    /// Start offset into the source text, in characters
    pub start: usize,
    /// End offset (exclusive), in characters
    pub end: usize,
    /// Names of the transforms applied to reach the surface, outermost last
    pub inflections: Vec<String>,
}

/// Classification of a recognized word against the user's vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    Known,
    Unknown,
    Ignored,
}

impl WordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordStatus::Known => "known",
            WordStatus::Unknown => "unknown",
            WordStatus::Ignored => "ignored",
        }
    }
}
