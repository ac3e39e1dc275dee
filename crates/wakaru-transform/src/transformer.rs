use std::collections::HashMap;

use crate::descriptor::{ConditionSpec, LanguageDescriptor, RuleKind, TransformSpec};
use crate::error::RegistrationError;

/// A candidate reached during deinflection search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedText {
    pub text: String,
    /// Condition bitmask the text currently satisfies; 0 means
    /// unconstrained and matches any rule
    pub conditions: u32,
    /// Rules applied to reach this text, newest frame first
    pub trace: Vec<TraceFrame>,
}

impl TransformedText {
    fn identity(text: &str) -> Self {
        Self {
            text: text.to_string(),
            conditions: 0,
            trace: Vec::new(),
        }
    }

    /// Transform names along the trace, outermost inflection last
    pub fn inflections(&self) -> Vec<String> {
        self.trace.iter().map(|frame| frame.transform.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    pub transform: String,
    pub rule_index: usize,
    /// Text before the rule was applied
    pub text: String,
}

#[derive(Debug, Clone)]
struct Rule {
    kind: RuleKind,
    inflected: String,
    deinflected: String,
    conditions_in: u32,
    conditions_out: u32,
}

impl Rule {
    /// Apply the rule in the deinflecting direction, None if the
    /// recognizer pattern does not match
    fn deinflect(&self, text: &str) -> Option<String> {
        match self.kind {
            RuleKind::Suffix => text
                .strip_suffix(self.inflected.as_str())
                .map(|stem| format!("{stem}{}", self.deinflected)),
            RuleKind::Prefix => text
                .strip_prefix(self.inflected.as_str())
                .map(|rest| format!("{}{rest}", self.deinflected)),
            RuleKind::WholeWord => (text == self.inflected).then(|| self.deinflected.clone()),
        }
    }
}

/// Union of a transform's recognizer patterns, checked before testing the
/// individual rules
#[derive(Debug, Clone, Default)]
struct Heuristic {
    suffixes: Vec<String>,
    prefixes: Vec<String>,
    whole_words: Vec<String>,
}

impl Heuristic {
    fn build(rules: &[Rule]) -> Self {
        let mut heuristic = Self::default();
        for rule in rules {
            let patterns = match rule.kind {
                RuleKind::Suffix => &mut heuristic.suffixes,
                RuleKind::Prefix => &mut heuristic.prefixes,
                RuleKind::WholeWord => &mut heuristic.whole_words,
            };
            if !patterns.contains(&rule.inflected) {
                patterns.push(rule.inflected.clone());
            }
        }
        heuristic
    }

    fn matches(&self, text: &str) -> bool {
        self.suffixes.iter().any(|p| text.ends_with(p.as_str()))
            || self.prefixes.iter().any(|p| text.starts_with(p.as_str()))
            || self.whole_words.iter().any(|w| w == text)
    }
}

#[derive(Debug, Clone)]
struct Transform {
    name: String,
    description: Option<String>,
    rules: Vec<Rule>,
    heuristic: Heuristic,
}

/// Compiled rule sets for one or more languages, and the deinflection
/// search over them. Built once, read-only afterwards.
#[derive(Debug, Default)]
pub struct LanguageTransformer {
    condition_flags: HashMap<String, u32>,
    next_flag_index: u32,
    transforms: Vec<Transform>,
}

impl LanguageTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a descriptor into this registry. Condition errors abort the
    /// whole registration; a transform with a malformed rule is skipped on
    /// its own.
    pub fn register(&mut self, descriptor: &LanguageDescriptor) -> Result<(), RegistrationError> {
        self.allocate_condition_flags(&descriptor.conditions)?;

        let mut compiled = Vec::with_capacity(descriptor.transforms.len());
        for spec in &descriptor.transforms {
            if let Some(transform) = self.compile_transform(spec)? {
                compiled.push(transform);
            }
        }

        tracing::info!(
            "Registered {} transforms for language '{}'",
            compiled.len(),
            descriptor.language
        );
        self.transforms.extend(compiled);
        Ok(())
    }

    /// Combined bitmask for a list of condition names; unknown names are
    /// silently skipped (reporting helper, not a gate)
    pub fn condition_flags(&self, names: &[&str]) -> u32 {
        names
            .iter()
            .filter_map(|name| self.condition_flags.get(*name))
            .fold(0, |flags, flag| flags | flag)
    }

    /// Usage note attached to a transform, if any
    pub fn description(&self, transform: &str) -> Option<&str> {
        self.transforms
            .iter()
            .find(|t| t.name == transform)
            .and_then(|t| t.description.as_deref())
    }

    /// Every dictionary-form candidate reachable from `source` by zero or
    /// more rule applications. Always contains at least the identity state.
    pub fn transform(&self, source: &str) -> Vec<TransformedText> {
        let mut results = vec![TransformedText::identity(source)];
        let mut cursor = 0;

        while cursor < results.len() {
            let state = results[cursor].clone();
            cursor += 1;

            for transform in &self.transforms {
                if !transform.heuristic.matches(&state.text) {
                    continue;
                }
                for (rule_index, rule) in transform.rules.iter().enumerate() {
                    if state.conditions != 0 && state.conditions & rule.conditions_in == 0 {
                        continue;
                    }
                    let Some(deinflected) = rule.deinflect(&state.text) else {
                        continue;
                    };
                    // A (transform, rule, text) triple may appear only once
                    // per trace; this bounds the worklist.
                    let seen = state.trace.iter().any(|frame| {
                        frame.transform == transform.name
                            && frame.rule_index == rule_index
                            && frame.text == state.text
                    });
                    if seen {
                        continue;
                    }

                    let mut trace = Vec::with_capacity(state.trace.len() + 1);
                    trace.push(TraceFrame {
                        transform: transform.name.clone(),
                        rule_index,
                        text: state.text.clone(),
                    });
                    trace.extend(state.trace.iter().cloned());
                    results.push(TransformedText {
                        text: deinflected,
                        conditions: rule.conditions_out,
                        trace,
                    });
                }
            }
        }

        results
    }

    /// Assign flags to new conditions, resolving composites by fixed-point
    /// iteration since composites may reference other composites
    fn allocate_condition_flags(
        &mut self,
        conditions: &[ConditionSpec],
    ) -> Result<(), RegistrationError> {
        let mut pending: Vec<&ConditionSpec> = conditions
            .iter()
            .filter(|c| !self.condition_flags.contains_key(&c.id))
            .collect();

        while !pending.is_empty() {
            let mut progressed = false;
            let mut remaining = Vec::new();

            for spec in pending {
                if spec.sub_conditions.is_empty() {
                    if self.next_flag_index >= 32 {
                        return Err(RegistrationError::ConditionLimitExceeded(spec.id.clone()));
                    }
                    self.condition_flags.insert(spec.id.clone(), 1 << self.next_flag_index);
                    self.next_flag_index += 1;
                    progressed = true;
                    continue;
                }

                let mut flags = 0u32;
                let resolved = spec.sub_conditions.iter().all(|sub| {
                    match self.condition_flags.get(sub) {
                        Some(flag) => {
                            flags |= flag;
                            true
                        }
                        None => false,
                    }
                });
                if resolved {
                    self.condition_flags.insert(spec.id.clone(), flags);
                    progressed = true;
                } else {
                    remaining.push(spec);
                }
            }

            if !progressed {
                let names = remaining
                    .iter()
                    .map(|c| c.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(RegistrationError::UnresolvableConditions(names));
            }
            pending = remaining;
        }

        Ok(())
    }

    fn compile_transform(
        &self,
        spec: &TransformSpec,
    ) -> Result<Option<Transform>, RegistrationError> {
        let mut rules = Vec::with_capacity(spec.rules.len());
        for (index, rule) in spec.rules.iter().enumerate() {
            if rule.inflected.is_empty() {
                tracing::warn!(
                    "transform '{}' rule {} has an empty pattern, skipping the transform",
                    spec.name,
                    index
                );
                return Ok(None);
            }
            rules.push(Rule {
                kind: rule.kind,
                inflected: rule.inflected.clone(),
                deinflected: rule.deinflected.clone(),
                conditions_in: self.compile_condition_list(&spec.name, &rule.conditions_in)?,
                conditions_out: self.compile_condition_list(&spec.name, &rule.conditions_out)?,
            });
        }
        let heuristic = Heuristic::build(&rules);
        Ok(Some(Transform {
            name: spec.name.clone(),
            description: spec.description.clone(),
            rules,
            heuristic,
        }))
    }

    fn compile_condition_list(
        &self,
        transform: &str,
        names: &[String],
    ) -> Result<u32, RegistrationError> {
        let mut flags = 0;
        for name in names {
            let flag = self.condition_flags.get(name).ok_or_else(|| {
                RegistrationError::UnknownCondition {
                    transform: transform.to_string(),
                    condition: name.clone(),
                }
            })?;
            flags |= flag;
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::RuleSpec;

    fn verb_descriptor() -> LanguageDescriptor {
        LanguageDescriptor {
            language: "ja".to_string(),
            conditions: vec![
                ConditionSpec::composite("v", "Verb", &["v1", "v5"]),
                ConditionSpec::primitive("v1", "Ichidan verb", true),
                ConditionSpec::primitive("v5", "Godan verb", true),
                ConditionSpec::primitive("-te", "Connective ending", false),
            ],
            transforms: vec![
                TransformSpec {
                    name: "past".to_string(),
                    description: Some("Completed action".to_string()),
                    rules: vec![
                        RuleSpec::suffix("た", "る", &["-te"], &["v1"]),
                        RuleSpec::suffix("んだ", "む", &["-te"], &["v5"]),
                    ],
                },
                TransformSpec {
                    name: "progressive".to_string(),
                    description: None,
                    rules: vec![RuleSpec::suffix("ている", "て", &["v1"], &["-te"])],
                },
                TransformSpec {
                    name: "connective".to_string(),
                    description: None,
                    rules: vec![RuleSpec::suffix("て", "る", &["-te"], &["v1"])],
                },
            ],
        }
    }

    fn candidates(transformer: &LanguageTransformer, source: &str) -> Vec<String> {
        transformer
            .transform(source)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn identity_is_always_included() {
        let transformer = LanguageTransformer::new();
        let results = transformer.transform("なにもない");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "なにもない");
        assert_eq!(results[0].conditions, 0);
        assert!(results[0].trace.is_empty());
    }

    #[test]
    fn single_suffix_rule_produces_candidate() {
        let mut transformer = LanguageTransformer::new();
        transformer.register(&verb_descriptor()).unwrap();

        let results = transformer.transform("食べた");
        let eat = results.iter().find(|t| t.text == "食べる").unwrap();
        assert_eq!(eat.inflections(), vec!["past"]);
        assert_eq!(eat.conditions, transformer.condition_flags(&["v1"]));
    }

    #[test]
    fn chained_rules_accumulate_trace_outermost_last() {
        let mut transformer = LanguageTransformer::new();
        transformer.register(&verb_descriptor()).unwrap();

        // 食べていた → 食べている → 食べて → 食べる
        let results = transformer.transform("食べていた");
        let eat = results.iter().find(|t| t.text == "食べる").unwrap();
        assert_eq!(eat.inflections(), vec!["connective", "progressive", "past"]);
    }

    #[test]
    fn conditions_gate_rule_application() {
        let mut transformer = LanguageTransformer::new();
        transformer
            .register(&LanguageDescriptor {
                language: "test".to_string(),
                conditions: vec![
                    ConditionSpec::primitive("a", "A", false),
                    ConditionSpec::primitive("b", "B", false),
                ],
                transforms: vec![
                    TransformSpec {
                        name: "x-to-y".to_string(),
                        description: None,
                        rules: vec![RuleSpec::suffix("x", "y", &["a"], &["a"])],
                    },
                    TransformSpec {
                        name: "y-to-x".to_string(),
                        description: None,
                        rules: vec![RuleSpec::suffix("y", "x", &["b"], &["b"])],
                    },
                ],
            })
            .unwrap();

        // "zy" carries condition a after the first rule; the b-gated rule
        // matches its text but must not fire.
        let results = transformer.transform("zx");
        let texts: Vec<&str> = results.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["zx", "zy"]);
    }

    #[test]
    fn self_matching_rule_terminates() {
        let mut transformer = LanguageTransformer::new();
        transformer
            .register(&LanguageDescriptor {
                language: "test".to_string(),
                conditions: vec![ConditionSpec::primitive("x", "Anything", false)],
                transforms: vec![TransformSpec {
                    name: "loop".to_string(),
                    description: None,
                    rules: vec![RuleSpec::suffix("る", "る", &["x"], &["x"])],
                }],
            })
            .unwrap();

        let results = transformer.transform("見る");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn oscillating_rules_terminate() {
        let mut transformer = LanguageTransformer::new();
        transformer
            .register(&LanguageDescriptor {
                language: "test".to_string(),
                conditions: vec![ConditionSpec::primitive("x", "Anything", false)],
                transforms: vec![
                    TransformSpec {
                        name: "a-to-b".to_string(),
                        description: None,
                        rules: vec![RuleSpec::suffix("あ", "い", &["x"], &["x"])],
                    },
                    TransformSpec {
                        name: "b-to-a".to_string(),
                        description: None,
                        rules: vec![RuleSpec::suffix("い", "あ", &["x"], &["x"])],
                    },
                ],
            })
            .unwrap();

        let results = transformer.transform("ああ");
        // Bounded: each (transform, rule, text) triple enters a trace once.
        assert!(results.len() < 64);
        assert!(results.iter().any(|t| t.text == "あい"));
    }

    #[test]
    fn composite_conditions_resolve_to_union() {
        let mut transformer = LanguageTransformer::new();
        transformer.register(&verb_descriptor()).unwrap();

        let v = transformer.condition_flags(&["v"]);
        let parts = transformer.condition_flags(&["v1", "v5"]);
        assert_eq!(v, parts);
        assert_ne!(v, 0);
    }

    #[test]
    fn unknown_names_are_skipped_in_flag_reporting() {
        let mut transformer = LanguageTransformer::new();
        transformer.register(&verb_descriptor()).unwrap();

        let flags = transformer.condition_flags(&["v1", "nonexistent"]);
        assert_eq!(flags, transformer.condition_flags(&["v1"]));
    }

    #[test]
    fn overlapping_registration_reuses_flags() {
        let mut transformer = LanguageTransformer::new();
        transformer.register(&verb_descriptor()).unwrap();
        let before = transformer.condition_flags(&["v1"]);

        transformer
            .register(&LanguageDescriptor {
                language: "ja".to_string(),
                conditions: vec![
                    ConditionSpec::primitive("v1", "Ichidan verb", true),
                    ConditionSpec::primitive("new", "New category", false),
                ],
                transforms: Vec::new(),
            })
            .unwrap();

        assert_eq!(transformer.condition_flags(&["v1"]), before);
        assert_ne!(transformer.condition_flags(&["new"]), 0);
    }

    #[test]
    fn too_many_primitive_conditions_fail() {
        let conditions: Vec<ConditionSpec> = (0..33)
            .map(|i| ConditionSpec::primitive(&format!("c{i}"), &format!("Category {i}"), false))
            .collect();
        let mut transformer = LanguageTransformer::new();
        let err = transformer
            .register(&LanguageDescriptor {
                language: "test".to_string(),
                conditions,
                transforms: Vec::new(),
            })
            .unwrap_err();
        assert!(matches!(err, RegistrationError::ConditionLimitExceeded(_)));
    }

    #[test]
    fn cyclic_composites_fail() {
        let mut transformer = LanguageTransformer::new();
        let err = transformer
            .register(&LanguageDescriptor {
                language: "test".to_string(),
                conditions: vec![
                    ConditionSpec::composite("a", "A", &["b"]),
                    ConditionSpec::composite("b", "B", &["a"]),
                ],
                transforms: Vec::new(),
            })
            .unwrap_err();
        assert!(matches!(err, RegistrationError::UnresolvableConditions(_)));
    }

    #[test]
    fn unknown_rule_condition_fails() {
        let mut transformer = LanguageTransformer::new();
        let err = transformer
            .register(&LanguageDescriptor {
                language: "test".to_string(),
                conditions: vec![ConditionSpec::primitive("v1", "Ichidan verb", true)],
                transforms: vec![TransformSpec {
                    name: "broken".to_string(),
                    description: None,
                    rules: vec![RuleSpec::suffix("た", "る", &["typo"], &["v1"])],
                }],
            })
            .unwrap_err();
        assert!(matches!(err, RegistrationError::UnknownCondition { .. }));
    }

    #[test]
    fn malformed_rule_skips_only_its_transform() {
        let mut transformer = LanguageTransformer::new();
        transformer
            .register(&LanguageDescriptor {
                language: "test".to_string(),
                conditions: vec![ConditionSpec::primitive("v1", "Ichidan verb", true)],
                transforms: vec![
                    TransformSpec {
                        name: "broken".to_string(),
                        description: None,
                        rules: vec![RuleSpec::suffix("", "る", &["v1"], &["v1"])],
                    },
                    TransformSpec {
                        name: "past".to_string(),
                        description: None,
                        rules: vec![RuleSpec::suffix("た", "る", &["v1"], &["v1"])],
                    },
                ],
            })
            .unwrap();

        let results = candidates(&transformer, "食べた");
        assert!(results.contains(&"食べる".to_string()));
        assert!(transformer.description("broken").is_none());
    }

    #[test]
    fn whole_word_rule_replaces_exact_text_only() {
        let mut transformer = LanguageTransformer::new();
        transformer
            .register(&LanguageDescriptor {
                language: "test".to_string(),
                conditions: vec![ConditionSpec::primitive("vk", "Kuru verb", true)],
                transforms: vec![TransformSpec {
                    name: "irregular-past".to_string(),
                    description: None,
                    rules: vec![RuleSpec::whole_word("きた", "くる", &["vk"], &["vk"])],
                }],
            })
            .unwrap();

        assert!(candidates(&transformer, "きた").contains(&"くる".to_string()));
        assert!(!candidates(&transformer, "起きた").contains(&"起くる".to_string()));
    }

    #[test]
    fn transform_descriptions_are_kept() {
        let mut transformer = LanguageTransformer::new();
        transformer.register(&verb_descriptor()).unwrap();
        assert_eq!(transformer.description("past"), Some("Completed action"));
        assert_eq!(transformer.description("progressive"), None);
    }
}
