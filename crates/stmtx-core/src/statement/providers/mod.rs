//! Declarative per-provider extraction profiles and the registry that
//! dispatches on [`ProviderTag`].

mod axis;
mod generic;
mod hdfc;
mod icici;
mod kotak;
mod sbi;

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use tracing::debug;

use super::rules::cascade::Cascade;
use super::transactions::TransactionLayout;
use super::StatementExtractor;
use crate::models::statement::{ExtractedFields, ProviderTag, Transaction};

/// One cascade per scalar field.
#[derive(Debug, Clone)]
pub struct FieldTable {
    pub cardholder_name: Cascade,
    pub card_number: Cascade,
    pub statement_date: Cascade,
    pub payment_due_date: Cascade,
    pub total_amount_due: Cascade,
    pub minimum_amount_due: Cascade,
    pub credit_limit: Cascade,
}

impl FieldTable {
    /// Run every cascade. A miss in one field never affects the others.
    pub fn extract(&self, text: &str) -> ExtractedFields {
        ExtractedFields {
            cardholder_name: self.cardholder_name.extract(text),
            card_number: self.card_number.extract(text),
            statement_date: self.statement_date.extract(text),
            payment_due_date: self.payment_due_date.extract(text),
            total_amount_due: self.total_amount_due.extract(text),
            minimum_amount_due: self.minimum_amount_due.extract(text),
            credit_limit: self.credit_limit.extract(text),
        }
    }
}

/// A provider's whole layout knowledge: field cascades plus where its
/// transaction rows live.
#[derive(Debug, Clone)]
pub struct ProviderProfile {
    pub tag: ProviderTag,
    pub fields: FieldTable,
    pub transactions: TransactionLayout,
}

impl StatementExtractor for ProviderProfile {
    fn provider(&self) -> ProviderTag {
        self.tag
    }

    fn extract_fields(&self, text: &str) -> ExtractedFields {
        self.fields.extract(text)
    }

    fn extract_transactions(&self, text: &str) -> Vec<Transaction> {
        self.transactions.extract(text)
    }
}

/// Maps provider tags to extractors, falling back to the generic one.
pub struct ExtractorRegistry {
    extractors: HashMap<ProviderTag, Box<dyn StatementExtractor>>,
    fallback: Box<dyn StatementExtractor>,
}

impl ExtractorRegistry {
    /// A registry that only knows the fallback extractor.
    pub fn new(fallback: Box<dyn StatementExtractor>) -> Self {
        Self {
            extractors: HashMap::new(),
            fallback,
        }
    }

    /// The five institution profiles plus the generic fallback.
    pub fn builtin() -> Self {
        let mut registry = Self::new(Box::new(generic::profile()));
        registry.register(Box::new(hdfc::profile()));
        registry.register(Box::new(icici::profile()));
        registry.register(Box::new(axis::profile()));
        registry.register(Box::new(kotak::profile()));
        registry.register(Box::new(sbi::profile()));
        registry
    }

    /// Shared handle to the built-in registry, compiled once per process.
    pub fn shared() -> Arc<ExtractorRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Register an extractor under its own tag, replacing any previous one.
    pub fn register(&mut self, extractor: Box<dyn StatementExtractor>) {
        let tag = extractor.provider();
        debug!("Registering extractor for {}", tag);
        self.extractors.insert(tag, extractor);
    }

    /// Extractor for `tag`; unknown tags get the fallback.
    pub fn get(&self, tag: ProviderTag) -> &dyn StatementExtractor {
        self.extractors
            .get(&tag)
            .map(|extractor| &**extractor)
            .unwrap_or(&*self.fallback)
    }

    pub fn is_registered(&self, tag: ProviderTag) -> bool {
        self.extractors.contains_key(&tag)
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&str> = self.extractors.keys().map(ProviderTag::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("ExtractorRegistry")
            .field("extractors", &tags)
            .field("fallback", &self.fallback.provider())
            .finish()
    }
}

lazy_static! {
    static ref BUILTIN: Arc<ExtractorRegistry> = Arc::new(ExtractorRegistry::builtin());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statement::FieldValue;

    #[test]
    fn test_builtin_profiles_compile() {
        let registry = ExtractorRegistry::builtin();
        for tag in ProviderTag::ALL {
            assert_eq!(registry.get(tag).provider(), tag);
        }
        assert!(!registry.is_registered(ProviderTag::Generic));
    }

    #[test]
    fn test_every_institution_supports_all_fields() {
        for profile in [
            hdfc::profile(),
            icici::profile(),
            axis::profile(),
            kotak::profile(),
            sbi::profile(),
        ] {
            let fields = &profile.fields;
            for cascade in [
                &fields.cardholder_name,
                &fields.card_number,
                &fields.statement_date,
                &fields.payment_due_date,
                &fields.total_amount_due,
                &fields.minimum_amount_due,
                &fields.credit_limit,
            ] {
                assert!(cascade.is_supported(), "{}", profile.tag);
            }
        }
    }

    #[test]
    fn test_fallback_for_unregistered_tag() {
        let registry = ExtractorRegistry::new(Box::new(generic::profile()));
        let extractor = registry.get(ProviderTag::Hdfc);
        assert_eq!(extractor.provider(), ProviderTag::Generic);
        assert_eq!(
            extractor.extract_fields("").statement_date,
            FieldValue::NotFound
        );
    }
}
