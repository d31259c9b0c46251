//! HDFC Bank: inline `Label : value` lines for identity and statement date,
//! header rows with the values on the following line for dues and limits.

use lazy_static::lazy_static;

use crate::models::statement::ProviderTag;
use crate::statement::rules::patterns::*;
use crate::statement::rules::{Cascade, Rule};
use crate::statement::transactions::{TransactionLayout, TransactionRow};

use super::{FieldTable, ProviderProfile};

lazy_static! {
    /// `Payment Due Date  Total Dues  Minimum Amount Due` then one value row.
    static ref DUES_TABLE: String = format!(
        r"(?i)Payment[ \t]+Due[ \t]+Date[ \t]+Total[ \t]+Dues[ \t]+Minimum[ \t]+Amount[ \t]+Due{NEXT_LINE}({})[ \t]+(?:{CURRENCY}[ \t]*)?({AMOUNT})[ \t]+(?:{CURRENCY}[ \t]*)?({AMOUNT})",
        *DATE_NUMERIC
    );

    /// `Credit Limit  Available Credit Limit  Available Cash Limit` then values.
    static ref LIMITS_TABLE: String = format!(
        r"(?i)Credit[ \t]+Limit[ \t]+Available[ \t]+Credit[ \t]+Limit[ \t]+Available[ \t]+Cash[ \t]+Limit{NEXT_LINE}(?:{CURRENCY}[ \t]*)?({AMOUNT})"
    );
}

pub(super) fn profile() -> ProviderProfile {
    ProviderProfile {
        tag: ProviderTag::Hdfc,
        fields: FieldTable {
            cardholder_name: Cascade::names(vec![
                Rule::new(r"(?m)^[ \t]*Name[ \t]*:[ \t]*([^\n]+)$"),
                Rule::new(r"(?im)^[ \t]*Card[ \t]*holder(?:[ \t]*Name)?[ \t]*:?[ \t]*([^\n]+)$")
                    .excluding(&NOMINEE_LINE),
            ]),
            card_number: Cascade::cards(vec![
                Rule::new(&format!(r"(?i)Card[ \t]*No\.?{INLINE}({})", *MASKED_CARD)),
                Rule::new(&format!("({})", *MASKED_CARD)),
            ]),
            statement_date: Cascade::dates(vec![Rule::new(&format!(
                r"(?i)Statement[ \t]*Date{INLINE}({}|{})",
                *DATE_NUMERIC, *DATE_WORDY
            ))]),
            payment_due_date: Cascade::dates(vec![
                Rule::new(&DUES_TABLE).group(1),
                Rule::new(&format!(r"(?i)Payment[ \t]*Due[ \t]*Date{INLINE}({})", *DATE_NUMERIC)),
            ]),
            total_amount_due: Cascade::amounts(vec![
                Rule::new(&DUES_TABLE).group(2),
                Rule::new(&format!(r"(?i)Total[ \t]*(?:Dues|Amount[ \t]*Due){INLINE}{}", *MONEY)),
            ]),
            minimum_amount_due: Cascade::amounts(vec![
                Rule::new(&DUES_TABLE).group(3),
                Rule::new(&format!(r"(?i)Minimum[ \t]*Amount[ \t]*Due{INLINE}{}", *MONEY)),
            ]),
            credit_limit: Cascade::amounts(vec![
                Rule::new(&LIMITS_TABLE),
                Rule::new(&format!(r"(?im)^[ \t]*Credit[ \t]*Limit{INLINE}{}", *MONEY)),
            ]),
        },
        transactions: TransactionLayout::sectioned(
            r"(?i)^(?:Domestic|International)[ \t]+Transactions",
            Some(r"(?i)^Reward[ \t]+Points"),
            TransactionRow::new(
                &format!(
                    r"^(?P<date>\d{{2}}/\d{{2}}/\d{{4}})[ \t]+(?P<desc>.+?)[ \t]+(?P<amount>{AMOUNT})(?:[ \t]+(?P<marker>Cr))?$"
                ),
                &["Cr"],
            ),
        ),
    }
}
