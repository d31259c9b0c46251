//! Axis Bank: header rows followed by a single value row.

use lazy_static::lazy_static;

use crate::models::statement::ProviderTag;
use crate::statement::rules::patterns::*;
use crate::statement::rules::{Cascade, Rule};
use crate::statement::transactions::{TransactionLayout, TransactionRow};

use super::{FieldTable, ProviderProfile};

lazy_static! {
    static ref IDENTITY_ROW: String =
        format!(r"(?i)Name[ \t]+Card[ \t]*No\.?{NEXT_LINE}([^\n]+?)[ \t]{{2,}}({})", *MASKED_CARD);

    /// Groups: total, minimum, period start, period end, due date, generation date.
    static ref SUMMARY_ROW: String = format!(
        concat!(
            r"(?i)Total[ \t]+Payment[ \t]+Due[ \t]+Minimum[ \t]+Payment[ \t]+Due[ \t]+Statement[ \t]+Period",
            r"[ \t]+Payment[ \t]+Due[ \t]+Date[ \t]+Statement[ \t]+Generation[ \t]+Date{nl}",
            r"({amount}){dr}[ \t]+({amount}){dr}[ \t]+({date})[ \t]*-[ \t]*({date})[ \t]+({date})[ \t]+({date})",
        ),
        nl = NEXT_LINE,
        amount = AMOUNT,
        dr = r"(?:[ \t]*(?:Dr|Cr))?",
        date = *DATE_NUMERIC,
    );

    static ref LIMITS_ROW: String = format!(
        r"(?i)Credit[ \t]+Limit[ \t]+Available[ \t]+Credit[ \t]+Limit[ \t]+Available[ \t]+Cash[ \t]+Limit{NEXT_LINE}({AMOUNT})"
    );
}

pub(super) fn profile() -> ProviderProfile {
    ProviderProfile {
        tag: ProviderTag::Axis,
        fields: FieldTable {
            cardholder_name: Cascade::names(vec![
                Rule::new(&IDENTITY_ROW).group(1),
                Rule::new(r"(?im)^[ \t]*Name[ \t]*:[ \t]*([^\n]+)$").excluding(&NOMINEE_LINE),
            ]),
            card_number: Cascade::cards(vec![
                Rule::new(&IDENTITY_ROW).group(2),
                Rule::new(&format!(r"(?i)Card[ \t]*No\.?{INLINE}({})", *MASKED_CARD)),
                Rule::new(&format!("({})", *MASKED_CARD)),
            ]),
            statement_date: Cascade::dates(vec![
                Rule::new(&SUMMARY_ROW).group(6),
                Rule::new(&format!(
                    r"(?i)Statement[ \t]*(?:Generation[ \t]*)?Date{INLINE}({})",
                    *DATE_NUMERIC
                )),
            ]),
            payment_due_date: Cascade::dates(vec![
                Rule::new(&SUMMARY_ROW).group(5),
                Rule::new(&format!(r"(?i)Payment[ \t]*Due[ \t]*Date{INLINE}({})", *DATE_NUMERIC)),
            ]),
            total_amount_due: Cascade::amounts(vec![
                Rule::new(&SUMMARY_ROW).group(1),
                Rule::new(&format!(r"(?i)Total[ \t]*Payment[ \t]*Due{INLINE}{}", *MONEY)),
            ]),
            minimum_amount_due: Cascade::amounts(vec![
                Rule::new(&SUMMARY_ROW).group(2),
                Rule::new(&format!(r"(?i)Minimum[ \t]*Payment[ \t]*Due{INLINE}{}", *MONEY)),
            ]),
            credit_limit: Cascade::amounts(vec![
                Rule::new(&LIMITS_ROW),
                Rule::new(&format!(r"(?im)^[ \t]*Credit[ \t]*Limit{INLINE}{}", *MONEY)),
            ]),
        },
        transactions: TransactionLayout::sectioned(
            r"(?i)^Transaction[ \t]+Details$",
            Some(r"(?i)^End[ \t]+of[ \t]+Statement"),
            TransactionRow::new(
                &format!(
                    r"^(?P<date>\d{{2}}/\d{{2}}/\d{{4}})[ \t]+(?P<desc>.+?)(?:[ \t]{{2,}}[A-Z][A-Z &/]*?)?[ \t]{{2,}}(?P<amount>{AMOUNT})(?:[ \t]*(?P<marker>Dr|Cr))?$"
                ),
                &["Cr"],
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statement::{FieldValue, TransactionType};
    use crate::statement::StatementExtractor;

    #[test]
    fn test_category_column_optional() {
        let text = "\
Transaction Details
10/02/2024    AMAZON    SHOPPING    100.00 Dr
11/02/2024    CASHBACK        5.00 Cr
End of Statement
";
        let rows = profile().extract_transactions(text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description, "AMAZON");
        assert_eq!(rows[1].description, "CASHBACK");
        assert_eq!(rows[1].kind, TransactionType::Credit);
    }

    #[test]
    fn test_unmarked_row_is_debit() {
        let text = "\
Transaction Details
12/02/2024    ZOMATO ONLINE ORDER    FOOD DELIVERY    650.00
18/02/2024    PAYMENT RECEIVED        10,000.00 Cr
End of Statement
";
        let rows = profile().extract_transactions(text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description, "ZOMATO ONLINE ORDER");
        assert_eq!(rows[0].amount, "₹650.00");
        assert_eq!(rows[0].kind, TransactionType::Debit);
        assert_eq!(rows[1].kind, TransactionType::Credit);
    }

    #[test]
    fn test_inline_fallbacks() {
        let text = "Statement Date : 09/03/2024\nTotal Payment Due : 500.00 Dr\n";
        let fields = profile().extract_fields(text);
        assert_eq!(fields.statement_date, FieldValue::from("09/03/2024"));
        assert_eq!(fields.total_amount_due, FieldValue::from("₹500.00"));
        assert_eq!(fields.cardholder_name, FieldValue::NotFound);
    }
}
