//! Completeness score for an extraction.

use crate::models::statement::{ExtractedFields, FieldValue};

/// Percentage of fields that were found, truncated toward zero.
pub fn score(fields: &ExtractedFields) -> u8 {
    score_values(fields.entries().iter().map(|(_, value)| *value))
}

/// Score an arbitrary set of field values. An empty set scores 0.
pub fn score_values<'a>(values: impl IntoIterator<Item = &'a FieldValue>) -> u8 {
    let (found, total) = values
        .into_iter()
        .fold((0usize, 0usize), |(found, total), value| {
            (found + usize::from(value.is_found()), total + 1)
        });

    if total == 0 {
        return 0;
    }
    // found <= total, so the quotient never exceeds 100
    (found * 100 / total) as u8
}
