//! Kotak Mahindra Bank: every summary field is an inline `Label : value` line.

use crate::models::statement::ProviderTag;
use crate::statement::rules::patterns::*;
use crate::statement::rules::{Cascade, Rule};
use crate::statement::transactions::{TransactionLayout, TransactionRow};

use super::{FieldTable, ProviderProfile};

fn inline_money(label: &str) -> Rule {
    Rule::new(&format!(r"(?im){label}{INLINE}{}", *MONEY))
}

pub(super) fn profile() -> ProviderProfile {
    let date = format!(
        "({}|{}|{})",
        *DATE_HYPHEN_MONTH, *DATE_WORDY, *DATE_NUMERIC
    );

    ProviderProfile {
        tag: ProviderTag::Kotak,
        fields: FieldTable {
            cardholder_name: Cascade::names(vec![
                Rule::new(r"(?i)Primary[ \t]*Card[ \t]*Holder(?:[ \t]*Name)?[ \t]*:?[ \t]*([^\n]+)"),
                Rule::new(r"(?im)^[ \t]*(?:Card[ \t]*Holder|Customer)[ \t]*Name[ \t]*:?[ \t]*([^\n]+)$")
                    .excluding(&NOMINEE_LINE),
            ]),
            card_number: Cascade::cards(vec![
                Rule::new(&format!(r"(?i)Card[ \t]*(?:Number|No\.?){INLINE}({})", *MASKED_CARD)),
                Rule::new(&format!("({})", *MASKED_CARD)),
            ]),
            statement_date: Cascade::dates(vec![Rule::new(&format!(
                r"(?i)Statement[ \t]*Date{INLINE}{date}"
            ))]),
            payment_due_date: Cascade::dates(vec![Rule::new(&format!(
                r"(?i)(?:Payment[ \t]*)?Due[ \t]*Date{INLINE}{date}"
            ))]),
            total_amount_due: Cascade::amounts(vec![
                inline_money(r"Total[ \t]*Amount[ \t]*Due"),
                inline_money(r"Total[ \t]*Dues?"),
            ]),
            minimum_amount_due: Cascade::amounts(vec![inline_money(
                r"Minimum[ \t]*Amount[ \t]*Due",
            )]),
            credit_limit: Cascade::amounts(vec![
                inline_money(r"Total[ \t]*Credit[ \t]*Limit"),
                inline_money(r"^[ \t]*Credit[ \t]*Limit"),
            ]),
        },
        transactions: TransactionLayout::whole_text(TransactionRow::new(
            &format!(
                r"(?m)^[ \t]*(?P<date>\d{{2}}-[A-Za-z]{{3}}-\d{{4}})[ \t]+(?P<desc>[^\n]+?)[ \t]+(?P<amount>{AMOUNT})(?:[ \t]+(?P<marker>Cr))?[ \t]*$"
            ),
            &["Cr"],
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statement::FieldValue;
    use crate::statement::StatementExtractor;

    #[test]
    fn test_ordinal_due_date() {
        let fields = profile().extract_fields("Payment Due Date : 21st May 2024");
        assert_eq!(fields.payment_due_date, FieldValue::from("21st May 2024"));
    }

    #[test]
    fn test_summary_lines_are_not_transactions() {
        let text = "Statement Date : 18-Mar-2024\n20-Feb-2024    CROMA    999.00\n";
        let rows = profile().extract_transactions(text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, "₹999.00");
    }
}
