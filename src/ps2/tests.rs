//! Encoder validation and serialization tests.

use super::{encode, Ps2Batch, Ps2EncodeError, Ps2Entry};
use rstest::{fixture, rstest};

const COMPANY_ACCOUNT: &str = "123456789012345678901";
const ENTRY_ACCOUNT: &str = "998877665544332211009";

#[fixture]
fn batch() -> Ps2Batch {
    Ps2Batch::new(COMPANY_ACCOUNT, "20250115", "BATCH01")
        .with_entries(vec![Ps2Entry::new(ENTRY_ACCOUNT, 1500, "Test")])
}

#[rstest]
fn every_line_is_eighty_characters(batch: Ps2Batch) {
    let payload = encode(&batch).expect("valid batch should encode");
    for line in payload.lines() {
        assert_eq!(line.chars().count(), 80, "line: {line}");
    }
}

#[rstest]
fn header_matches_fixed_layout(batch: Ps2Batch) {
    let payload = encode(&batch).expect("valid batch should encode");
    let header = payload.lines().next().expect("payload has a header");
    assert!(header.starts_with("PS2112000123456789012345678901CVE20250115BATCH01"));
    assert!(header.ends_with('0'));
}

#[rstest]
fn detail_carries_zero_padded_amount(batch: Ps2Batch) {
    let payload = encode(&batch).expect("valid batch should encode");
    let detail = payload.lines().nth(1).expect("payload has a detail line");
    assert!(detail.starts_with("PS22"));
    assert!(detail.contains("0000000150000"));
    assert!(detail.contains("Test"));
}

#[rstest]
fn footer_totals_count_and_amounts(batch: Ps2Batch) {
    let extended = batch.with_entries(vec![
        Ps2Entry::new(ENTRY_ACCOUNT, 1500, "First"),
        Ps2Entry::new(COMPANY_ACCOUNT, 2500, "Second"),
        Ps2Entry::new(ENTRY_ACCOUNT, 1, "Third"),
    ]);
    let payload = encode(&extended).expect("valid batch should encode");
    let footer = payload.lines().last().expect("payload has a footer");
    assert!(footer.starts_with("PS290000000000000300000004001"));
}

#[rstest]
fn single_entry_footer_matches_reference_scenario(batch: Ps2Batch) {
    let payload = encode(&batch).expect("valid batch should encode");
    let footer = payload.lines().last().expect("payload has a footer");
    assert!(footer.starts_with("PS290000000000000100000001500"));
}

#[rstest]
#[case::too_short("12345")]
#[case::too_long("1234567890123456789012")]
#[case::non_numeric("12345678901234567890x")]
fn rejects_malformed_company_account(batch: Ps2Batch, #[case] account: &str) {
    let invalid = Ps2Batch::new(account, "20250115", "BATCH01")
        .with_entries(batch.entries().to_vec());
    assert_eq!(encode(&invalid), Err(Ps2EncodeError::InvalidCompanyAccount));
}

#[rstest]
#[case::dashed("2025-01-15")]
#[case::short("202501")]
fn rejects_malformed_processing_date(batch: Ps2Batch, #[case] date: &str) {
    let invalid = Ps2Batch::new(COMPANY_ACCOUNT, date, "BATCH01")
        .with_entries(batch.entries().to_vec());
    assert_eq!(encode(&invalid), Err(Ps2EncodeError::InvalidProcessingDate));
}

#[rstest]
#[case::empty("")]
#[case::blank("   ")]
fn rejects_blank_reference(batch: Ps2Batch, #[case] reference: &str) {
    let invalid = Ps2Batch::new(COMPANY_ACCOUNT, "20250115", reference)
        .with_entries(batch.entries().to_vec());
    assert_eq!(encode(&invalid), Err(Ps2EncodeError::MissingReference));
}

#[rstest]
fn rejects_invalid_account_with_one_based_row(batch: Ps2Batch) {
    let invalid = batch.with_entries(vec![
        Ps2Entry::new(ENTRY_ACCOUNT, 100, "Fine"),
        Ps2Entry::new("not-numeric", 200, "Broken"),
    ]);
    assert_eq!(
        encode(&invalid),
        Err(Ps2EncodeError::InvalidAccountNumber { row: 2 })
    );
}

#[rstest]
fn oversized_amount_fails_length_check_not_emission(batch: Ps2Batch) {
    let invalid = batch.with_entries(vec![Ps2Entry::new(
        ENTRY_ACCOUNT,
        999_999_999_999,
        "Whale",
    )]);
    assert!(matches!(
        encode(&invalid),
        Err(Ps2EncodeError::RecordLengthMismatch { row: 1, .. })
    ));
}

#[rstest]
fn long_reference_is_truncated_to_field_width(batch: Ps2Batch) {
    let long = Ps2Batch::new(
        COMPANY_ACCOUNT,
        "20250115",
        "REFERENCE-LONGER-THAN-TWENTY",
    )
    .with_entries(batch.entries().to_vec());
    let payload = encode(&long).expect("valid batch should encode");
    let header = payload.lines().next().expect("payload has a header");
    assert_eq!(header.chars().count(), 80);
    assert!(header.contains("REFERENCE-LONGER-THA"));
    assert!(!header.contains("REFERENCE-LONGER-THAN"));
}

#[rstest]
fn long_payee_name_is_truncated_to_field_width(batch: Ps2Batch) {
    let name = "A".repeat(50);
    let long = batch.with_entries(vec![Ps2Entry::new(ENTRY_ACCOUNT, 10, name)]);
    let payload = encode(&long).expect("valid batch should encode");
    let detail = payload.lines().nth(1).expect("payload has a detail line");
    assert_eq!(detail.chars().count(), 80);
}

#[test]
fn empty_batch_still_emits_header_and_footer() {
    let empty = Ps2Batch::new(COMPANY_ACCOUNT, "20250115", "BATCH01");
    let payload = encode(&empty).expect("empty batch should encode");
    let lines: Vec<&str> = payload.lines().collect();
    assert_eq!(lines.len(), 2);
    let footer = lines.last().expect("payload has a footer");
    assert!(footer.starts_with("PS290000000000000000000000000"));
}
