//! Ordered pattern cascades: first accepted match wins.

use regex::{Captures, Regex};
use tracing::trace;

use super::normalize::Normalizer;
use crate::models::statement::FieldValue;

/// Which capture group of a match carries the field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePolicy {
    /// Take the given group.
    Group(usize),
    /// Scan groups from the last one backwards and take the first that
    /// starts with a digit, skipping label groups.
    LastNumeric,
}

impl CapturePolicy {
    fn select<'h>(self, caps: &Captures<'h>) -> Option<&'h str> {
        match self {
            CapturePolicy::Group(index) => caps.get(index).map(|m| m.as_str()),
            CapturePolicy::LastNumeric => {
                let groups: Vec<&'h str> = caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
                groups
                    .into_iter()
                    .rev()
                    .find(|group| group.starts_with(|c: char| c.is_ascii_digit()))
            }
        }
    }
}

/// One entry of a pattern table.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    policy: CapturePolicy,
    exclude: Option<Regex>,
}

impl Rule {
    /// Compile a rule. Patterns with several groups default to
    /// [`CapturePolicy::LastNumeric`], single-group ones to group 1.
    pub fn new(pattern: &str) -> Self {
        let pattern = compile(pattern);
        let policy = if pattern.captures_len() > 2 {
            CapturePolicy::LastNumeric
        } else {
            CapturePolicy::Group(1)
        };
        Self {
            pattern,
            policy,
            exclude: None,
        }
    }

    /// Take a specific capture group.
    pub fn group(mut self, index: usize) -> Self {
        self.policy = CapturePolicy::Group(index);
        self
    }

    /// Skip matches whose full text hits `regex`.
    pub fn excluding(mut self, regex: &Regex) -> Self {
        self.exclude = Some(regex.clone());
        self
    }

    pub fn policy(&self) -> CapturePolicy {
        self.policy
    }

    /// Candidate spans in text order.
    pub fn candidates<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern
            .captures_iter(text)
            .filter(move |caps| !self.is_excluded(caps))
            .filter_map(move |caps| self.policy.select(&caps))
    }

    fn is_excluded(&self, caps: &Captures<'_>) -> bool {
        match (&self.exclude, caps.get(0)) {
            (Some(exclude), Some(whole)) => exclude.is_match(whole.as_str()),
            _ => false,
        }
    }
}

/// Compile a table pattern. Tables are static, so a bad pattern is a bug.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid extraction pattern `{pattern}`: {e}"))
}

/// Try `rules` in order against `text` and return the first candidate the
/// normalizer accepts.
pub fn extract_field(text: &str, rules: &[Rule], normalizer: Normalizer) -> FieldValue {
    for (index, rule) in rules.iter().enumerate() {
        for candidate in rule.candidates(text) {
            match normalizer.apply(candidate) {
                Some(value) => {
                    trace!("{:?} rule {} accepted {:?}", normalizer, index, value);
                    return FieldValue::Found(value);
                }
                None => trace!("{:?} rule {} rejected {:?}", normalizer, index, candidate),
            }
        }
    }
    FieldValue::NotFound
}

/// A field's ordered rule list together with its normalizer.
#[derive(Debug, Clone)]
pub struct Cascade {
    normalizer: Normalizer,
    rules: Vec<Rule>,
}

impl Cascade {
    pub fn new(normalizer: Normalizer, rules: Vec<Rule>) -> Self {
        Self { normalizer, rules }
    }

    pub fn names(rules: Vec<Rule>) -> Self {
        Self::new(Normalizer::Name, rules)
    }

    pub fn cards(rules: Vec<Rule>) -> Self {
        Self::new(Normalizer::MaskedCard, rules)
    }

    pub fn dates(rules: Vec<Rule>) -> Self {
        Self::new(Normalizer::Date, rules)
    }

    pub fn amounts(rules: Vec<Rule>) -> Self {
        Self::new(Normalizer::Amount, rules)
    }

    /// A field the layout never carries; always yields `NotFound`.
    pub fn unsupported(normalizer: Normalizer) -> Self {
        Self::new(normalizer, Vec::new())
    }

    pub fn is_supported(&self) -> bool {
        !self.rules.is_empty()
    }

    pub fn extract(&self, text: &str) -> FieldValue {
        extract_field(text, &self.rules, self.normalizer)
    }
}
