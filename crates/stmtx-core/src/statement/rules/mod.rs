//! Pattern-matching building blocks for statement field extraction.

pub mod cascade;
pub mod normalize;
pub mod patterns;

pub use cascade::{extract_field, Cascade, CapturePolicy, Rule};
pub use normalize::{
    normalize_amount, normalize_date, normalize_masked_card, normalize_name, Normalizer,
    CURRENCY_SYMBOL,
};
