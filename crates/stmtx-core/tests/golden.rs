//! End-to-end extraction against one fixture per statement layout.

use pretty_assertions::assert_eq;
use stmtx_core::{
    ExtractedFields, FieldValue, ParseResult, ParsedStatement, ProviderTag, StatementParser,
    Transaction, TransactionType,
};

const HDFC: &str = include_str!("fixtures/hdfc.txt");
const ICICI: &str = include_str!("fixtures/icici.txt");
const AXIS: &str = include_str!("fixtures/axis.txt");
const KOTAK: &str = include_str!("fixtures/kotak.txt");
const SBI: &str = include_str!("fixtures/sbi.txt");
const UNKNOWN: &str = include_str!("fixtures/unknown.txt");

fn parse(text: &str) -> ParsedStatement {
    match StatementParser::new().parse(text) {
        ParseResult::Success(statement) => statement,
        ParseResult::Failure { error } => panic!("parse failed: {error}"),
    }
}

fn fields(values: [&str; 7]) -> ExtractedFields {
    let [name, card, statement, due, total, minimum, limit] = values.map(FieldValue::from);
    ExtractedFields {
        cardholder_name: name,
        card_number: card,
        statement_date: statement,
        payment_due_date: due,
        total_amount_due: total,
        minimum_amount_due: minimum,
        credit_limit: limit,
    }
}

fn debit(date: &str, description: &str, amount: &str) -> Transaction {
    Transaction {
        date: date.to_string(),
        description: description.to_string(),
        amount: amount.to_string(),
        kind: TransactionType::Debit,
    }
}

fn credit(date: &str, description: &str, amount: &str) -> Transaction {
    Transaction {
        kind: TransactionType::Credit,
        ..debit(date, description, amount)
    }
}

#[test]
fn test_hdfc() {
    let statement = parse(HDFC);
    assert_eq!(statement.provider, ProviderTag::Hdfc);
    assert_eq!(
        statement.data.fields,
        fields([
            "Rahul Kumar Sharma",
            "1234",
            "15/03/2024",
            "04/04/2024",
            "₹45,230.50",
            "₹2,270.00",
            "₹2,00,000",
        ])
    );
    assert_eq!(
        statement.data.transactions,
        vec![
            debit("18/02/2024", "SWIGGY BANGALORE", "₹450.00"),
            debit("20/02/2024", "AMAZON PAY INDIA PRIVATE", "₹12,999.00"),
            credit("25/02/2024", "PAYMENT RECEIVED - THANK YOU", "₹30,000.00"),
            debit("02/03/2024", "UBER INDIA SYSTEMS", "₹320.50"),
            debit("05/03/2024", "NETFLIX.COM LOS GATOS", "₹1,499.00"),
        ]
    );
    assert_eq!(statement.confidence, 100);
}

#[test]
fn test_icici() {
    let statement = parse(ICICI);
    assert_eq!(statement.provider, ProviderTag::Icici);
    assert_eq!(
        statement.data.fields,
        fields([
            "Anil Kumar Mehta",
            "9012",
            "March 12, 2024",
            "April 1, 2024",
            "₹18,420.75",
            "₹920.00",
            "₹3,00,000.00",
        ])
    );
    assert_eq!(
        statement.data.transactions,
        vec![
            debit("14/02/2024", "FLIPKART INTERNET PVT LTD", "₹2,499.00"),
            credit("19/02/2024", "BBPS PAYMENT RECEIVED", "₹15,000.00"),
            debit("27/02/2024", "IRCTC WEB BOOKING", "₹1,845.60"),
            debit("08/03/2024", "BIGBASKET BANGALORE", "₹3,126.15"),
        ]
    );
    assert_eq!(statement.confidence, 100);
}

#[test]
fn test_axis() {
    let statement = parse(AXIS);
    assert_eq!(statement.provider, ProviderTag::Axis);
    assert_eq!(
        statement.data.fields,
        fields([
            "Neha Gupta",
            "7788",
            "09/03/2024",
            "29/03/2024",
            "₹12,345.00",
            "₹1,235.00",
            "₹1,50,000.00",
        ])
    );
    assert_eq!(
        statement.data.transactions,
        vec![
            debit("12/02/2024", "ZOMATO ONLINE ORDER", "₹650.00"),
            debit("15/02/2024", "SHELL PETROL PUMP", "₹2,000.00"),
            credit("18/02/2024", "PAYMENT RECEIVED", "₹10,000.00"),
            debit("01/03/2024", "MYNTRA DESIGNS", "₹3,499.00"),
        ]
    );
    assert_eq!(statement.confidence, 100);
}

#[test]
fn test_kotak() {
    let statement = parse(KOTAK);
    assert_eq!(statement.provider, ProviderTag::Kotak);
    assert_eq!(
        statement.data.fields,
        fields([
            "Vikram Singh Rathore",
            "4455",
            "18-Mar-2024",
            "7th April 2024",
            "₹8,765.40",
            "₹440.00",
            "₹1,00,000.00",
        ])
    );
    assert_eq!(
        statement.data.transactions,
        vec![
            debit("20-Feb-2024", "MAKEMYTRIP INDIA PVT LTD", "₹5,400.00"),
            debit("26-Feb-2024", "DMART AVENUE SUPERMARTS", "₹1,865.40"),
            credit("01-Mar-2024", "PAYMENT RECEIVED. THANK YOU", "₹7,500.00"),
            debit("09-Mar-2024", "BOOKMYSHOW MUMBAI", "₹1,500.00"),
        ]
    );
    assert_eq!(statement.confidence, 100);
}

#[test]
fn test_sbi() {
    let statement = parse(SBI);
    assert_eq!(statement.provider, ProviderTag::Sbi);
    assert_eq!(
        statement.data.fields,
        fields([
            "Suresh Babu Iyer",
            "6789",
            "12 Mar 2024",
            "01 Apr 2024",
            "₹25,600.00",
            "₹1,280.00",
            "₹2,50,000.00",
        ])
    );
    assert_eq!(
        statement.data.transactions,
        vec![
            debit("15 Feb 24", "IRCTC E-TICKETING", "₹2,340.00"),
            credit("22 Feb 24", "PAYMENT RECEIVED", "₹20,000.00"),
            debit("03 Mar 24", "AMAZON SELLER SERVICES", "₹4,150.00"),
        ]
    );
    assert_eq!(statement.confidence, 100);
}

#[test]
fn test_unknown_layout() {
    let statement = parse(UNKNOWN);
    assert_eq!(statement.provider, ProviderTag::Generic);
    assert_eq!(
        statement.data.fields,
        fields([
            "Anjali Desai",
            "5566",
            "Not Found",
            "20 March 2024",
            "₹7,890.25",
            "Not Found",
            "Not Found",
        ])
    );
    assert!(statement.data.transactions.is_empty());
    assert_eq!(statement.confidence, 57);
}

#[test]
fn test_unknown_layout_json() {
    let json: serde_json::Value =
        serde_json::from_str(&StatementParser::new().parse(UNKNOWN).to_json().unwrap()).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["provider"], "Unknown");
    assert_eq!(json["data"]["statement_date"], "Not Found");
    assert_eq!(json["data"]["transactions"], serde_json::json!([]));
    assert_eq!(json["confidence"], 57);
}

#[test]
fn test_provider_priority() {
    let text = format!("AXIS BANK\n{HDFC}");
    assert_eq!(StatementParser::new().detect(&text), ProviderTag::Hdfc);
    assert_eq!(parse(&text).provider, ProviderTag::Hdfc);
}

#[test]
fn test_mask_glyphs_give_same_card_number() {
    for glyph in ["X", "*", "•", "●"] {
        let mask = glyph.repeat(4);
        let text = HDFC.replace("XXXX XXXX", &format!("{mask} {mask}"));
        assert_eq!(
            parse(&text).data.fields.card_number,
            FieldValue::from("1234"),
            "mask glyph {glyph}"
        );
    }
}

#[test]
fn test_nominee_name_falls_through() {
    let text = HDFC.replace("Name : RAHUL KUMAR SHARMA", "Name : NOMINEE DETAILS\nCardholder : RAHUL KUMAR SHARMA");
    assert_eq!(
        parse(&text).data.fields.cardholder_name,
        FieldValue::from("Rahul Kumar Sharma")
    );
}

#[test]
fn test_empty_input() {
    let result = StatementParser::new().parse("  \n ");
    assert_eq!(
        result.to_json().unwrap(),
        r#"{"success":false,"error":"Could not extract text from PDF"}"#
    );
}

#[test]
fn test_deterministic_json() {
    let parser = StatementParser::new();
    for text in [HDFC, ICICI, AXIS, KOTAK, SBI, UNKNOWN] {
        assert_eq!(
            parser.parse(text).to_json().unwrap(),
            parser.parse(text).to_json().unwrap()
        );
    }
}

#[test]
fn test_crlf_fixtures_match_lf() {
    let parser = StatementParser::new();
    for text in [HDFC, ICICI, AXIS, KOTAK, SBI, UNKNOWN] {
        let windows = text.replace('\n', "\r\n");
        assert_eq!(parser.parse(&windows), parser.parse(text));
    }
}

#[test]
fn test_parser_shared_across_threads() {
    let parser = StatementParser::new();
    let handles: Vec<_> = [HDFC, ICICI, AXIS, KOTAK, SBI]
        .into_iter()
        .map(|text| {
            let parser = parser.clone();
            std::thread::spawn(move || parser.parse(text).statement().map(|s| s.confidence))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(100));
    }
}
