// Reference vectors taken from the legacy spreadsheet macro and the portal.

use chrono::NaiveDate;
use cie_reference::{
    build_reference, checksum, compress_amount, compress_date, infer_period_token, map_char,
    parse_due_date, verify_reference, Amount, ReferenceError, ReferenceInput, Validity,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn spreadsheet_reference_is_reproduced() {
    let input = ReferenceInput::new(
        "06",
        "2430302527",
        "2520.00".parse().unwrap(),
        parse_due_date("06/09/2025").unwrap(),
    )
    .with_plant_year(2025)
    .with_period("AGODIC24");

    let reference = build_reference(&input).unwrap();
    assert_eq!(reference.full, "20252716062430302527AGODIC2443451082");
    assert!(verify_reference(&reference.full));
}

#[test]
fn spreadsheet_pieces() {
    assert_eq!(compress_amount("2520.00".parse().unwrap()), "1");
    assert_eq!(compress_amount(Amount::ZERO), "0");
    assert_eq!(compress_date(ymd(2025, 9, 6)).unwrap(), "4345");
    assert_eq!(infer_period_token(ymd(2024, 9, 6)), "AGODIC24");
    assert_eq!(checksum("20252716062430302527AGODIC24434510"), "82");
}

#[test]
fn macro_input_with_all_defaults() {
    // 06/09/2024, no plant year and no period: both come from the due date
    let input = ReferenceInput::new(
        "06",
        "2430302527",
        "2520.00".parse().unwrap(),
        parse_due_date("06/09/2024").unwrap(),
    );
    let reference = build_reference(&input).unwrap();
    assert_eq!(reference.full, "20242716062430302527AGODIC2439731027");
}

#[test]
fn character_table_spot_checks() {
    let expected = [('A', 1), ('I', 9), ('J', 1), ('R', 9), ('S', 2), ('Z', 9), ('5', 5)];
    for (c, digit) in expected {
        assert_eq!(map_char(c), digit, "mapping of {}", c);
    }
}

#[test]
fn advisory_gating() {
    let amount: Amount = "250.00".parse().unwrap();

    let advisory = ReferenceInput::new("04", "2430302527", amount, ymd(2025, 5, 15));
    assert!(matches!(
        build_reference(&advisory),
        Err(ReferenceError::MissingSubjectCode { .. })
    ));

    let general = ReferenceInput::new("01", "2430302527", amount, ymd(2025, 5, 15));
    let reference = build_reference(&general).unwrap();
    assert!(reference.full.contains("FEBJUL25"));
}

#[test]
fn stored_reference_validation_and_validity() {
    let input = ReferenceInput::new("01", "2430302527", "100".parse().unwrap(), ymd(2025, 5, 15));
    let reference = build_reference(&input).unwrap();

    assert!(verify_reference(&reference.full));
    let mut tampered = reference.full.clone();
    tampered.replace_range(4..8, "2717");
    assert!(!verify_reference(&tampered));

    let validity = Validity::evaluate(input.due_date, ymd(2025, 5, 1));
    assert_eq!(validity.days_remaining, 14);
    assert!(validity.is_payable());
}
