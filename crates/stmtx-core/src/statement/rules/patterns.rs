//! Regex building blocks shared by the provider pattern tables.
//!
//! Fragments are non-capturing; each table wraps the part it wants in a group.

use lazy_static::lazy_static;
use regex::Regex;

/// Optional currency token in front of an amount.
pub const CURRENCY: &str = r"(?:Rs\.?|INR|₹|Rupees)";

/// Indian or western grouped amount, or a plain number, with up to two decimals.
pub const AMOUNT: &str = r"(?:\d{1,3}(?:,\d{2,3})+(?:\.\d{1,2})?|\d+(?:\.\d{1,2})?)";

/// Label/value gap that stays on the current line.
pub const INLINE: &str = r"[ \t]*:?[ \t]*";

/// Line break between a label and the value printed below it.
pub const NEXT_LINE: &str = r"[ \t]*\r?\n[ \t]*";

/// Day of month, ordinal suffix allowed.
pub const DAY: &str = r"\d{1,2}(?:st|nd|rd|th)?";

pub const MONTH_NAME: &str = r"[A-Za-z]{3,9}";

/// Year, including the `XX` placeholders found on specimen statements.
pub const YEAR: &str = r"(?:\d{4}|\d{2}[Xx]{2}|\d{2}|[Xx]{2,4})";

/// Mask glyph used in place of hidden card digits.
pub const MASK: &str = r"(?:[Xx*•●■◼▪]\x{FE0E}?)";

lazy_static! {
    /// `12 March 2024`, `7th April 2024`, `01 Apr 20XX`.
    pub static ref DATE_WORDY: String = format!(r"{DAY}\s+{MONTH_NAME}\s+{YEAR}");

    /// `March 12, 2024`.
    pub static ref DATE_MONTH_FIRST: String = format!(r"{MONTH_NAME}\s+{DAY},?\s+{YEAR}");

    /// `15/03/2024`, `15-03-24`.
    pub static ref DATE_NUMERIC: String = format!(r"\d{{1,2}}[/-]\d{{1,2}}[/-]{YEAR}");

    /// `15.03.2024`.
    pub static ref DATE_DOT: String = format!(r"\d{{1,2}}\.\d{{1,2}}\.{YEAR}");

    /// `18-Mar-2024`.
    pub static ref DATE_HYPHEN_MONTH: String = format!(r"\d{{1,2}}-[A-Za-z]{{3}}-{YEAR}");

    /// Amount with an optional leading currency token; only the number is captured.
    pub static ref MONEY: String = format!(r"(?:{CURRENCY}\s*)?({AMOUNT})");

    /// Masked card number: optional visible prefix, one to three mask runs, last four digits.
    pub static ref MASKED_CARD: String =
        format!(r"(?:\d{{4,6}}[\s-]?)?(?:{MASK}{{2,}}[\s-]?){{1,3}}\d{{4}}");

    /// Lines that mention a nominee never carry the cardholder name.
    pub static ref NOMINEE_LINE: Regex = Regex::new(r"(?i)nominee").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(fragment: &str) -> Regex {
        Regex::new(&format!("^(?:{fragment})$")).unwrap()
    }

    #[test]
    fn test_amount_shapes() {
        let amount = full(AMOUNT);
        for value in ["45,230.50", "2,00,000", "920.00", "12345.5", "40000"] {
            assert!(amount.is_match(value), "{value}");
        }
        assert!(!amount.is_match("1,2"));
    }

    #[test]
    fn test_amount_prefers_grouped_run() {
        let amount = Regex::new(AMOUNT).unwrap();
        assert_eq!(amount.find("12345.00").unwrap().as_str(), "12345.00");
        assert_eq!(amount.find("1,54,769").unwrap().as_str(), "1,54,769");
    }

    #[test]
    fn test_date_shapes() {
        assert!(full(&DATE_WORDY).is_match("7th April 2024"));
        assert!(full(&DATE_WORDY).is_match("01 Apr 20XX"));
        assert!(full(&DATE_MONTH_FIRST).is_match("March 12, 2024"));
        assert!(full(&DATE_NUMERIC).is_match("15/03/2024"));
        assert!(full(&DATE_NUMERIC).is_match("15-03-XX"));
        assert!(full(&DATE_DOT).is_match("15.03.2024"));
        assert!(full(&DATE_HYPHEN_MONTH).is_match("18-Mar-2024"));
    }

    #[test]
    fn test_masked_card_glyphs() {
        let card = full(&MASKED_CARD);
        for value in [
            "XXXX XXXX XXXX 1234",
            "**** **** **** 1234",
            "•••• •••• •••• 1234",
            "4386 XXXX XXXX 1234",
            "4386XXXXXXXX1234",
            "xxxx-xxxx-xxxx-1234",
            "◼\u{FE0E}◼\u{FE0E}◼\u{FE0E}◼\u{FE0E} ◼◼◼◼ ◼◼◼◼ 1234",
        ] {
            assert!(card.is_match(value), "{value}");
        }
        assert!(!card.is_match("4386 1234"));
    }

    #[test]
    fn test_money_captures_number_only() {
        let money = Regex::new(&MONEY).unwrap();
        assert_eq!(&money.captures("Rs. 18,420.75").unwrap()[1], "18,420.75");
        assert_eq!(&money.captures("₹ 1,280.00").unwrap()[1], "1,280.00");
    }
}
