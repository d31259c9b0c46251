//! Fallback profile for layouts no institution profile claims.
//!
//! Only the name, card number, due date and total due are attempted, with
//! broad label sets. Everything else stays `Not Found`.

use crate::models::statement::ProviderTag;
use crate::statement::rules::patterns::*;
use crate::statement::rules::{Cascade, Normalizer, Rule};
use crate::statement::transactions::TransactionLayout;

use super::{FieldTable, ProviderProfile};

const NAME_LABELS: &str =
    r"(?:Card[ \t]*member[ \t]*Name|Card[ \t]*Holder(?:[ \t]*Name)?|Customer[ \t]*Name|Name[ \t]*:)";

const TOTAL_DUE_LABELS: &str = r"(Total[ \t]*Amount[ \t]*Due|Total[ \t]*Amt\.?[ \t]*Due|Total[ \t]*Dues?|Amount[ \t]*Payable(?:[ \t]*by[ \t]*Due[ \t]*Date)?|Amount[ \t]*to[ \t]*be[ \t]*Paid|Net[ \t]*Amount[ \t]*Payable)";

const BALANCE_LABELS: &str =
    r"(Current[ \t]*Balance|Outstanding[ \t]*Amount|Total[ \t]*Outstanding|Closing[ \t]*Balance)";

const MINIMUM_DUE_LABELS: &str = r"(Minimum[ \t]*Amount[ \t]*Due|Min\.?[ \t]*Due|Minimum[ \t]*Due)";

const DUE_DATE_LABELS: &str = r"(?:Payment[ \t]*Due[ \t]*Date|Payment[ \t]*Due|Due[ \t]*Date|Due[ \t]*Dt\.?|Pay[ \t]*by|Pay[ \t]*on|Due[ \t]*on|Due[ \t]*by|Last[ \t]*date[ \t]*of[ \t]*payment|On[ \t]*or[ \t]*before)";

pub(super) fn profile() -> ProviderProfile {
    ProviderProfile {
        tag: ProviderTag::Generic,
        fields: FieldTable {
            cardholder_name: Cascade::names(vec![
                Rule::new(&format!(r"(?im)^[^\n]*?{NAME_LABELS}[ \t]*:?[ \t]*([^\n]+)$"))
                    .excluding(&NOMINEE_LINE),
                Rule::new(
                    r"(?i)Dear[ \t]+(?:(?:Mr|Ms|Mrs|Mx|Dr)\.?[ \t]+)?([A-Z][A-Z .-]+?)[ \t]*(?:,|\n)",
                ),
                Rule::new(&format!(r"(?i){NAME_LABELS}[:\s]+([A-Z][A-Z \t.]+)"))
                    .excluding(&NOMINEE_LINE),
                Rule::new(r"\b(?:Mr|Ms|Mrs|Mx)\.?[ \t]+([A-Z][A-Z \t]+)"),
                Rule::new(r"(?i)\b(?:Attention|Attn\.|To)[ \t]*:[ \t]*([A-Z][A-Z \t.]+)"),
            ]),
            card_number: Cascade::cards(vec![
                Rule::new(&format!(
                    r"(?i)(?:Card|Account)[ \t]*(?:No\.?|Number|#)[ \t]*:?[ \t]*({})",
                    *MASKED_CARD
                )),
                Rule::new(&format!("({})", *MASKED_CARD)),
                Rule::new(r"(?:\b\d{4}[ \t-]?){3}(\d{4})\b"),
                Rule::new(r"(?i)\b(?:ending|ends[ \t]*with)(?:[ \t]*in)?[ \t]*:?[ \t]*(\d{4})\b"),
            ]),
            statement_date: Cascade::unsupported(Normalizer::Date),
            payment_due_date: Cascade::dates(vec![Rule::new(&format!(
                r"(?i){DUE_DATE_LABELS}[ \t]*:?[ \t]*({}|{}|{}|{}|{})",
                *DATE_MONTH_FIRST, *DATE_WORDY, *DATE_HYPHEN_MONTH, *DATE_NUMERIC, *DATE_DOT
            ))]),
            total_amount_due: Cascade::amounts(vec![
                Rule::new(&format!(r"(?i){TOTAL_DUE_LABELS}[ \t]*:?[ \t]*{}", *MONEY)),
                Rule::new(&format!(r"(?i){BALANCE_LABELS}[ \t]*:?[ \t]*{}", *MONEY)),
                Rule::new(&format!(r"(?i){MINIMUM_DUE_LABELS}[ \t]*:?[ \t]*{}", *MONEY)),
            ]),
            minimum_amount_due: Cascade::unsupported(Normalizer::Amount),
            credit_limit: Cascade::unsupported(Normalizer::Amount),
        },
        transactions: TransactionLayout::None,
    }
}
