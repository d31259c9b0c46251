//! ICICI Bank: salutation address block, and a `STATEMENT SUMMARY` where
//! each label sits on its own line with the value below it.

use crate::models::statement::ProviderTag;
use crate::statement::rules::patterns::*;
use crate::statement::rules::{Cascade, Rule};
use crate::statement::transactions::{TransactionLayout, TransactionRow};

use super::{FieldTable, ProviderProfile};

/// Gap between a label and its value, on the same line or the next.
fn gap() -> String {
    format!("(?:{NEXT_LINE}|{INLINE})")
}

fn labelled_money(label: &str) -> Rule {
    Rule::new(&format!(r"(?i){label}{}{}", gap(), *MONEY))
}

pub(super) fn profile() -> ProviderProfile {
    let date = format!("({}|{}|{})", *DATE_MONTH_FIRST, *DATE_NUMERIC, *DATE_WORDY);

    ProviderProfile {
        tag: ProviderTag::Icici,
        fields: FieldTable {
            cardholder_name: Cascade::names(vec![
                Rule::new(r"(?m)^[ \t]*(?:MR|MS|MRS|DR)\.?[ \t]+([A-Z][A-Za-z.]*(?:[ \t]+[A-Z][A-Za-z.]*){1,4})[ \t]*$"),
                Rule::new(&format!(r"(?i)Customer[ \t]*Name{}([^\n]+)", gap()))
                    .excluding(&NOMINEE_LINE),
            ]),
            card_number: Cascade::cards(vec![
                Rule::new(&format!(r"(?i)Card[ \t]*(?:Number|No\.?){}({})", gap(), *MASKED_CARD)),
                Rule::new(&format!("({})", *MASKED_CARD)),
            ]),
            statement_date: Cascade::dates(vec![Rule::new(&format!(
                r"(?i)Statement[ \t]*Date{}{date}",
                gap()
            ))]),
            payment_due_date: Cascade::dates(vec![Rule::new(&format!(
                r"(?i)(?:Payment[ \t]*)?Due[ \t]*Date{}{date}",
                gap()
            ))]),
            total_amount_due: Cascade::amounts(vec![
                labelled_money(r"Total[ \t]*Amount[ \t]*Due"),
                labelled_money(r"Total[ \t]*Dues?"),
            ]),
            minimum_amount_due: Cascade::amounts(vec![labelled_money(
                r"Minimum[ \t]*Amount[ \t]*Due",
            )]),
            credit_limit: Cascade::amounts(vec![
                labelled_money(r"(?m:^)[ \t]*Credit[ \t]*Limit(?:[ \t]*\(Including[ \t]*cash\))?"),
            ]),
        },
        transactions: TransactionLayout::whole_text(TransactionRow::new(
            &format!(
                r"(?m)^[ \t]*(?P<date>\d{{2}}/\d{{2}}/\d{{4}})[ \t]+\d{{6,}}[ \t]+(?P<desc>[^\n]+?)[ \t]+(?P<amount>{AMOUNT})(?:[ \t]+(?P<marker>CR))?[ \t]*$"
            ),
            &["CR"],
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statement::FieldValue;
    use crate::statement::StatementExtractor;

    #[test]
    fn test_salutation_requires_upper_case_line() {
        let text = "Dr Smith will see you\nMRS KAVITA DAS\n";
        let fields = profile().extract_fields(text);
        assert_eq!(fields.cardholder_name, FieldValue::from("Kavita Das"));
    }

    #[test]
    fn test_available_credit_is_not_the_limit() {
        let text = "Available Credit Limit\nRs. 10.00\nCredit Limit (Including cash)\nRs. 90,000.00\n";
        let fields = profile().extract_fields(text);
        assert_eq!(fields.credit_limit, FieldValue::from("₹90,000.00"));
    }

    #[test]
    fn test_serial_number_required() {
        let text = "14/02/2024    FLIPKART    2,499.00\n15/02/2024    123456    SWIGGY    99.00\n";
        let rows = profile().extract_transactions(text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "SWIGGY");
    }
}
