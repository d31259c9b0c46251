//! Post-match cleanup for captured field spans.
//!
//! Every normalizer is a pipeline of pure steps. A step returns `None` to
//! reject the candidate, which sends the cascade on to its next match.

use lazy_static::lazy_static;
use regex::Regex;

/// Glyph prefixed to every extracted amount.
pub const CURRENCY_SYMBOL: &str = "₹";

lazy_static! {
    static ref NOMINEE_CLAUSE: Regex = Regex::new(r"(?i)\bName\s*of\s*Nominee.*$").unwrap();
    static ref HELPLINE_CLAUSE: Regex = Regex::new(
        r"(?i)\b(?:for\s+lost\s+or\s+stolen\s+card|customer\s*care|helpline)\b.*$"
    ).unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_NAME_CHARS: Regex = Regex::new(r"[^A-Za-z.\s]").unwrap();
    static ref STRUCTURAL_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:ACCOUNT|STATEMENT|SUMMARY|AMOUNT|DUE|DATE|BILL|PERIOD|CYCLE|ADDRESS|NOMINEE)\b"
    ).unwrap();
    static ref AMOUNT_SPAN: Regex = Regex::new(r"\d[\d,]*(?:\.\d{1,2})?").unwrap();
    static ref LAST_FOUR: Regex = Regex::new(r"(\d{4})\D*$").unwrap();
}

/// Cleanup applied to a captured span before it becomes a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    Name,
    Amount,
    Date,
    MaskedCard,
}

impl Normalizer {
    pub fn apply(self, raw: &str) -> Option<String> {
        match self {
            Normalizer::Name => normalize_name(raw),
            Normalizer::Amount => normalize_amount(raw),
            Normalizer::Date => normalize_date(raw),
            Normalizer::MaskedCard => normalize_masked_card(raw),
        }
    }
}

type Step = fn(&str) -> Option<String>;

const NAME_STEPS: [Step; 8] = [
    truncate_at_break,
    strip_boilerplate,
    collapse_whitespace,
    retain_name_chars,
    reject_structural_keywords,
    require_token_count,
    title_case,
    require_length,
];

/// Turn a raw captured span into a display name, or reject it.
pub fn normalize_name(raw: &str) -> Option<String> {
    NAME_STEPS
        .iter()
        .try_fold(raw.to_string(), |value, step| step(&value))
}

fn truncate_at_break(value: &str) -> Option<String> {
    value
        .trim()
        .split([',', '/', '\n', '\r'])
        .next()
        .map(str::to_string)
}

fn strip_boilerplate(value: &str) -> Option<String> {
    let value = NOMINEE_CLAUSE.replace(value, "");
    let value = HELPLINE_CLAUSE.replace(&value, "");
    Some(value.trim().to_string())
}

fn collapse_whitespace(value: &str) -> Option<String> {
    Some(WHITESPACE.replace_all(value, " ").into_owned())
}

fn retain_name_chars(value: &str) -> Option<String> {
    Some(NON_NAME_CHARS.replace_all(value, "").trim().to_string())
}

fn reject_structural_keywords(value: &str) -> Option<String> {
    if STRUCTURAL_KEYWORD.is_match(value) {
        None
    } else {
        Some(value.to_string())
    }
}

fn require_token_count(value: &str) -> Option<String> {
    let tokens = value.split_whitespace().count();
    (2..=5).contains(&tokens).then(|| value.to_string())
}

fn title_case(value: &str) -> Option<String> {
    let tokens: Vec<String> = value
        .split_whitespace()
        .map(|token| {
            if token.contains('.') && token.chars().count() <= 3 {
                token.to_uppercase()
            } else {
                capitalize(token)
            }
        })
        .collect();
    Some(tokens.join(" "))
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn require_length(value: &str) -> Option<String> {
    let len = value.chars().count();
    (len > 3 && len < 50).then(|| value.to_string())
}

/// Isolate the numeric span and prefix the currency glyph.
///
/// Grouping separators are kept exactly as printed.
pub fn normalize_amount(raw: &str) -> Option<String> {
    AMOUNT_SPAN
        .find(raw.trim())
        .map(|m| format!("{}{}", CURRENCY_SYMBOL, m.as_str()))
}

/// Dates are kept exactly as printed, only trimmed; no calendar parsing happens.
pub fn normalize_date(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Keep only the trailing four visible digits. Any visible prefix is dropped.
pub fn normalize_masked_card(raw: &str) -> Option<String> {
    LAST_FOUR
        .captures(raw.trim())
        .map(|caps| caps[1].to_string())
}
