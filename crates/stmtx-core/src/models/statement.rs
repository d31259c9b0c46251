//! Statement data models and the result schema returned by the parser.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Sentinel reported for a field that was attempted but not matched.
pub const NOT_FOUND: &str = "Not Found";

/// Issuing institution whose layout a statement follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderTag {
    #[serde(rename = "HDFC")]
    Hdfc,
    #[serde(rename = "ICICI")]
    Icici,
    #[serde(rename = "AXIS")]
    Axis,
    #[serde(rename = "KOTAK")]
    Kotak,
    #[serde(rename = "SBI")]
    Sbi,
    /// Unrecognized layout, handled by the generic extractor.
    #[serde(rename = "Unknown")]
    Generic,
}

impl ProviderTag {
    /// All tags, institutions first in detection priority order.
    pub const ALL: [ProviderTag; 6] = [
        ProviderTag::Hdfc,
        ProviderTag::Icici,
        ProviderTag::Axis,
        ProviderTag::Kotak,
        ProviderTag::Sbi,
        ProviderTag::Generic,
    ];

    /// Name used in the result schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderTag::Hdfc => "HDFC",
            ProviderTag::Icici => "ICICI",
            ProviderTag::Axis => "AXIS",
            ProviderTag::Kotak => "KOTAK",
            ProviderTag::Sbi => "SBI",
            ProviderTag::Generic => "Unknown",
        }
    }
}

impl fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one field extraction.
///
/// Serialized as the bare string, with [`NOT_FOUND`] standing in for a miss.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldValue {
    Found(String),
    #[default]
    NotFound,
}

impl FieldValue {
    pub fn is_found(&self) -> bool {
        matches!(self, FieldValue::Found(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Found(value) => value,
            FieldValue::NotFound => NOT_FOUND,
        }
    }

    /// The matched value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            FieldValue::Found(value) => Some(value),
            FieldValue::NotFound => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        if value == NOT_FOUND {
            FieldValue::NotFound
        } else {
            FieldValue::Found(value)
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::from(value.to_string())
    }
}

impl From<FieldValue> for String {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Found(value) => value,
            FieldValue::NotFound => NOT_FOUND.to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of scalar fields pulled from a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub cardholder_name: FieldValue,
    /// Trailing four visible digits of the card number.
    pub card_number: FieldValue,
    pub statement_date: FieldValue,
    pub payment_due_date: FieldValue,
    pub total_amount_due: FieldValue,
    pub minimum_amount_due: FieldValue,
    pub credit_limit: FieldValue,
}

impl ExtractedFields {
    /// Number of scalar fields in the schema.
    pub const COUNT: usize = 7;

    /// Field names paired with their values, in schema order.
    pub fn entries(&self) -> [(&'static str, &FieldValue); Self::COUNT] {
        [
            ("cardholder_name", &self.cardholder_name),
            ("card_number", &self.card_number),
            ("statement_date", &self.statement_date),
            ("payment_due_date", &self.payment_due_date),
            ("total_amount_due", &self.total_amount_due),
            ("minimum_amount_due", &self.minimum_amount_due),
            ("credit_limit", &self.credit_limit),
        ]
    }

    /// Names of the fields that were not matched.
    pub fn missing(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, value)| !value.is_found())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Direction of a statement line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Debit,
    Credit,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Debit => f.write_str("Debit"),
            TransactionType::Credit => f.write_str("Credit"),
        }
    }
}

/// A single transaction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date exactly as printed on the statement.
    pub date: String,
    pub description: String,
    /// Currency-prefixed amount, separators kept as printed.
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Fields plus transactions, serialized as the `data` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementData {
    #[serde(flatten)]
    pub fields: ExtractedFields,
    pub transactions: Vec<Transaction>,
}

/// A successfully parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatement {
    pub provider: ProviderTag,
    pub data: StatementData,
    /// Completeness percentage, 0-100.
    pub confidence: u8,
}

/// Outcome of one parse call. Exactly one shape is produced per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    Success(ParsedStatement),
    Failure { error: String },
}

impl ParseResult {
    pub fn failure(error: impl Into<String>) -> Self {
        ParseResult::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(_))
    }

    pub fn statement(&self) -> Option<&ParsedStatement> {
        match self {
            ParseResult::Success(statement) => Some(statement),
            ParseResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ParseResult::Success(_) => None,
            ParseResult::Failure { error } => Some(error),
        }
    }

    /// Serialize to the compact JSON result body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for ParseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParseResult::Success(statement) => {
                let mut state = serializer.serialize_struct("ParseResult", 4)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("provider", &statement.provider)?;
                state.serialize_field("data", &statement.data)?;
                state.serialize_field("confidence", &statement.confidence)?;
                state.end()
            }
            ParseResult::Failure { error } => {
                let mut state = serializer.serialize_struct("ParseResult", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_field_value_sentinel() {
        assert_eq!(FieldValue::from("Not Found"), FieldValue::NotFound);
        assert_eq!(FieldValue::NotFound.as_str(), "Not Found");
        assert_eq!(
            serde_json::to_value(FieldValue::Found("₹1,000.00".into())).unwrap(),
            json!("₹1,000.00")
        );
    }

    #[test]
    fn test_generic_provider_serializes_as_unknown() {
        assert_eq!(serde_json::to_value(ProviderTag::Generic).unwrap(), json!("Unknown"));
        assert_eq!(serde_json::to_value(ProviderTag::Hdfc).unwrap(), json!("HDFC"));
    }

    #[test]
    fn test_success_schema() {
        let result = ParseResult::Success(ParsedStatement {
            provider: ProviderTag::Kotak,
            data: StatementData {
                fields: ExtractedFields {
                    cardholder_name: "Asha Rao".into(),
                    ..Default::default()
                },
                transactions: vec![Transaction {
                    date: "01-Mar-2024".to_string(),
                    description: "PAYMENT RECEIVED".to_string(),
                    amount: "₹500.00".to_string(),
                    kind: TransactionType::Credit,
                }],
            },
            confidence: 14,
        });

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": true,
                "provider": "KOTAK",
                "data": {
                    "cardholder_name": "Asha Rao",
                    "card_number": "Not Found",
                    "statement_date": "Not Found",
                    "payment_due_date": "Not Found",
                    "total_amount_due": "Not Found",
                    "minimum_amount_due": "Not Found",
                    "credit_limit": "Not Found",
                    "transactions": [{
                        "date": "01-Mar-2024",
                        "description": "PAYMENT RECEIVED",
                        "amount": "₹500.00",
                        "type": "Credit"
                    }]
                },
                "confidence": 14
            })
        );
    }

    #[test]
    fn test_failure_schema() {
        let result = ParseResult::failure("Could not extract text from PDF");
        assert_eq!(
            result.to_json().unwrap(),
            r#"{"success":false,"error":"Could not extract text from PDF"}"#
        );
    }

    #[test]
    fn test_missing_fields() {
        let fields = ExtractedFields {
            card_number: "1234".into(),
            ..Default::default()
        };
        assert_eq!(fields.missing().len(), ExtractedFields::COUNT - 1);
        assert!(!fields.missing().contains(&"card_number"));
    }
}
