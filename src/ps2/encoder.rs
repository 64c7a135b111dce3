//! PS2 batch validation and fixed-width serialization.

use super::{Ps2Batch, Ps2EncodeError, Ps2Entry};

/// Width of every PS2 record.
const RECORD_LEN: usize = 80;
/// Width of account number fields.
const ACCOUNT_LEN: usize = 21;
/// Width of the processing-date field.
const DATE_LEN: usize = 8;
/// Width of the sender-reference field.
const REFERENCE_LEN: usize = 20;
/// Width of the payee-name field.
const PAYEE_NAME_LEN: usize = 35;
/// Digits in the integer part of an amount field.
const AMOUNT_DIGITS: usize = 11;
/// Digits in the footer entry-count field.
const COUNT_DIGITS: usize = 14;

/// Header record type plus its fixed layout code.
const HEADER_PREFIX: &str = "PS2112000";
/// Detail record type.
const DETAIL_PREFIX: &str = "PS22";
/// Footer record type.
const FOOTER_PREFIX: &str = "PS29";
/// Currency code the format hard-wires.
const CURRENCY: &str = "CVE";
/// Fixed decimal field; amounts are whole currency units.
const DECIMAL_SUFFIX: &str = "00";
/// Fixed filler completing a detail record to the record width.
const DETAIL_FILLER: &str = "0000000";

/// Validates a batch and serializes it to the PS2 fixed-width format.
///
/// Produces one 80-character header, one 80-character detail record per
/// entry in input order, and one 80-character footer carrying the entry
/// count and the amount total, joined by newlines.
///
/// # Errors
///
/// Returns the specific [`Ps2EncodeError`] for the first failing field or
/// row; no partial file is ever produced.
pub fn encode(batch: &Ps2Batch) -> Result<String, Ps2EncodeError> {
    if !is_exact_digits(batch.company_account(), ACCOUNT_LEN) {
        return Err(Ps2EncodeError::InvalidCompanyAccount);
    }
    if !is_exact_digits(batch.processing_date(), DATE_LEN) {
        return Err(Ps2EncodeError::InvalidProcessingDate);
    }
    let reference = batch.sender_reference().trim();
    if reference.is_empty() {
        return Err(Ps2EncodeError::MissingReference);
    }

    let mut lines = Vec::with_capacity(batch.entries().len() + 2);
    lines.push(header_record(batch, reference));

    let mut total: u64 = 0;
    for (index, entry) in batch.entries().iter().enumerate() {
        let row = index + 1;
        lines.push(detail_record(entry, row)?);
        total = total.saturating_add(entry.amount());
    }

    lines.push(footer_record(batch.entries().len(), total));
    Ok(lines.join("\n"))
}

fn header_record(batch: &Ps2Batch, reference: &str) -> String {
    let line = format!(
        "{HEADER_PREFIX}{}{CURRENCY}{}{}",
        batch.company_account(),
        batch.processing_date(),
        pad_text(reference, REFERENCE_LEN),
    );
    pad_record(line)
}

fn detail_record(entry: &Ps2Entry, row: usize) -> Result<String, Ps2EncodeError> {
    if !is_exact_digits(entry.account_number(), ACCOUNT_LEN) {
        return Err(Ps2EncodeError::InvalidAccountNumber { row });
    }

    let line = format!(
        "{DETAIL_PREFIX}{}{:0AMOUNT_DIGITS$}{DECIMAL_SUFFIX}{}{DETAIL_FILLER}",
        entry.account_number(),
        entry.amount(),
        pad_text(entry.payee_name(), PAYEE_NAME_LEN),
    );

    // Oversized amounts overflow the fixed zero-padding; catch them here
    // rather than emit a malformed record.
    let length = line.chars().count();
    if length != RECORD_LEN {
        return Err(Ps2EncodeError::RecordLengthMismatch { row, length });
    }
    Ok(line)
}

fn footer_record(entry_count: usize, total: u64) -> String {
    pad_record(format!(
        "{FOOTER_PREFIX}{entry_count:0COUNT_DIGITS$}{total:0AMOUNT_DIGITS$}"
    ))
}

/// Returns whether the value is exactly `len` ASCII digits.
fn is_exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Right-pads with spaces, truncating when longer than `len`.
fn pad_text(value: &str, len: usize) -> String {
    let mut padded: String = value.chars().take(len).collect();
    while padded.chars().count() < len {
        padded.push(' ');
    }
    padded
}

/// Right-pads a record with `0` to the fixed record width.
fn pad_record(mut line: String) -> String {
    while line.chars().count() < RECORD_LEN {
        line.push('0');
    }
    line
}
