//! SBI Card: each label on its own line, the value on the line below.

use crate::models::statement::ProviderTag;
use crate::statement::rules::patterns::*;
use crate::statement::rules::{Cascade, Rule};
use crate::statement::transactions::{TransactionLayout, TransactionRow};

use super::{FieldTable, ProviderProfile};

fn gap() -> String {
    format!("(?:{NEXT_LINE}|{INLINE})")
}

fn labelled(label: &str, value: &str) -> Rule {
    Rule::new(&format!(r"(?im){label}{}{value}", gap()))
}

pub(super) fn profile() -> ProviderProfile {
    let date = format!("({}|{})", *DATE_WORDY, *DATE_NUMERIC);

    ProviderProfile {
        tag: ProviderTag::Sbi,
        fields: FieldTable {
            cardholder_name: Cascade::names(vec![
                labelled(r"Card[ \t]*Holder[ \t]*Name", r"([^\n]+)").excluding(&NOMINEE_LINE),
                Rule::new(r"(?m)^TRANSACTIONS[ \t]+FOR[ \t]+([^\n]+)$"),
            ]),
            card_number: Cascade::cards(vec![
                labelled(r"Card[ \t]*Number", &format!("({})", *MASKED_CARD)),
                Rule::new(&format!("({})", *MASKED_CARD)),
            ]),
            statement_date: Cascade::dates(vec![labelled(r"Statement[ \t]*Date", &date)]),
            payment_due_date: Cascade::dates(vec![labelled(r"Payment[ \t]*Due[ \t]*Date", &date)]),
            total_amount_due: Cascade::amounts(vec![labelled(
                r"Total[ \t]*Amount[ \t]*Due",
                &MONEY,
            )]),
            minimum_amount_due: Cascade::amounts(vec![labelled(
                r"Minimum[ \t]*Amount[ \t]*Due",
                &MONEY,
            )]),
            credit_limit: Cascade::amounts(vec![labelled(r"^[ \t]*Credit[ \t]*Limit", &MONEY)]),
        },
        transactions: TransactionLayout::sectioned(
            r"^TRANSACTIONS[ \t]+FOR\b",
            Some(r"(?i)^Reward"),
            TransactionRow::new(
                &format!(
                    r"^(?P<date>\d{{2}}[ \t][A-Za-z]{{3}}[ \t]\d{{2}})[ \t]+(?P<desc>.+?)[ \t]+(?P<amount>{AMOUNT})(?:[ \t]+(?P<marker>[CD]))?$"
                ),
                &["C"],
            ),
        ),
    }
}
