use serde::{Deserialize, Serialize};

/// The three shapes a deinflection rule can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Replace a matching suffix of the inflected form
    Suffix,
    /// Replace a matching prefix of the inflected form
    Prefix,
    /// Replace the entire word
    WholeWord,
}

/// One directional transformation from an inflected shape back towards a
/// dictionary shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    pub kind: RuleKind,
    /// Pattern recognizing the inflected shape
    pub inflected: String,
    /// Replacement producing the candidate dictionary shape
    pub deinflected: String,
    /// Conditions the inflected form must satisfy; empty means the rule
    /// only applies to the unconstrained starting text
    #[serde(default)]
    pub conditions_in: Vec<String>,
    /// Conditions the produced form will satisfy
    #[serde(default)]
    pub conditions_out: Vec<String>,
}

impl RuleSpec {
    pub fn suffix(
        inflected: &str,
        deinflected: &str,
        conditions_in: &[&str],
        conditions_out: &[&str],
    ) -> Self {
        Self::new(RuleKind::Suffix, inflected, deinflected, conditions_in, conditions_out)
    }

    pub fn prefix(
        inflected: &str,
        deinflected: &str,
        conditions_in: &[&str],
        conditions_out: &[&str],
    ) -> Self {
        Self::new(RuleKind::Prefix, inflected, deinflected, conditions_in, conditions_out)
    }

    pub fn whole_word(
        inflected: &str,
        deinflected: &str,
        conditions_in: &[&str],
        conditions_out: &[&str],
    ) -> Self {
        Self::new(RuleKind::WholeWord, inflected, deinflected, conditions_in, conditions_out)
    }

    fn new(
        kind: RuleKind,
        inflected: &str,
        deinflected: &str,
        conditions_in: &[&str],
        conditions_out: &[&str],
    ) -> Self {
        Self {
            kind,
            inflected: inflected.to_string(),
            deinflected: deinflected.to_string(),
            conditions_in: conditions_in.iter().map(|s| s.to_string()).collect(),
            conditions_out: conditions_out.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A named group of rules sharing one grammatical meaning (e.g. past tense)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformSpec {
    pub name: String,
    /// Short usage note surfaced by consumers next to recognized inflections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rules: Vec<RuleSpec>,
}

/// A grammatical category. Conditions with `sub_conditions` are composites
/// resolving to the union of the referenced conditions' flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionSpec {
    /// Short tag used by rules ("v1", "adj-i")
    pub id: String,
    /// Human-readable name ("Ichidan verb")
    pub label: String,
    /// Marks categories a dictionary headword may carry; informational,
    /// not consulted by the search
    #[serde(default)]
    pub dictionary_form: bool,
    #[serde(default)]
    pub sub_conditions: Vec<String>,
}

impl ConditionSpec {
    pub fn primitive(id: &str, label: &str, dictionary_form: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            dictionary_form,
            sub_conditions: Vec::new(),
        }
    }

    pub fn composite(id: &str, label: &str, sub_conditions: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            dictionary_form: false,
            sub_conditions: sub_conditions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The full declared rule set for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    /// ISO 639-1 code ("ja")
    pub language: String,
    pub conditions: Vec<ConditionSpec>,
    pub transforms: Vec<TransformSpec>,
}
