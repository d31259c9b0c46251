//! Provider detection from unstructured statement text.

use tracing::debug;

use crate::models::statement::ProviderTag;

/// Keyword sets in priority order. The first tag with any keyword present wins.
pub const DETECTION_RULES: [(ProviderTag, &[&str]); 5] = [
    (ProviderTag::Hdfc, &["HDFC"]),
    (ProviderTag::Icici, &["ICICI"]),
    (ProviderTag::Axis, &["AXIS"]),
    (ProviderTag::Kotak, &["KOTAK"]),
    (ProviderTag::Sbi, &["STATE BANK", "SBI CARD"]),
];

/// Classify the statement layout. Never fails; unknown text maps to
/// [`ProviderTag::Generic`].
pub fn detect(text: &str) -> ProviderTag {
    let upper = text.to_uppercase();

    let tag = DETECTION_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| upper.contains(keyword)))
        .map(|(tag, _)| *tag)
        .unwrap_or(ProviderTag::Generic);

    debug!("Detected provider: {}", tag);
    tag
}
