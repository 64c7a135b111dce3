//! PS2 batch input model.
//!
//! Transient: a batch exists only to produce a file and is never
//! persisted.

/// One payment entry of a PS2 batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ps2Entry {
    account_number: String,
    amount: u64,
    payee_name: String,
}

impl Ps2Entry {
    /// Creates a payment entry.
    ///
    /// `amount` is a non-negative integer-valued currency amount; the
    /// format's 2-digit decimal field is a fixed convention the encoder
    /// fills in.
    #[must_use]
    pub fn new(account_number: impl Into<String>, amount: u64, payee_name: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            amount,
            payee_name: payee_name.into(),
        }
    }

    /// Returns the destination account number.
    #[must_use]
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Returns the payment amount in integer currency units.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.amount
    }

    /// Returns the payee name.
    #[must_use]
    pub fn payee_name(&self) -> &str {
        &self.payee_name
    }
}

/// Input for one PS2 file generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ps2Batch {
    company_account: String,
    processing_date: String,
    sender_reference: String,
    entries: Vec<Ps2Entry>,
}

impl Ps2Batch {
    /// Creates a batch with header metadata and no entries.
    #[must_use]
    pub fn new(
        company_account: impl Into<String>,
        processing_date: impl Into<String>,
        sender_reference: impl Into<String>,
    ) -> Self {
        Self {
            company_account: company_account.into(),
            processing_date: processing_date.into(),
            sender_reference: sender_reference.into(),
            entries: Vec::new(),
        }
    }

    /// Sets the payment entries, replacing any existing ones.
    #[must_use]
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = Ps2Entry>) -> Self {
        self.entries = entries.into_iter().collect();
        self
    }

    /// Appends one payment entry.
    pub fn push_entry(&mut self, entry: Ps2Entry) {
        self.entries.push(entry);
    }

    /// Returns the ordering company account.
    #[must_use]
    pub fn company_account(&self) -> &str {
        &self.company_account
    }

    /// Returns the processing date (`YYYYMMDD`).
    #[must_use]
    pub fn processing_date(&self) -> &str {
        &self.processing_date
    }

    /// Returns the free-text sender reference.
    #[must_use]
    pub fn sender_reference(&self) -> &str {
        &self.sender_reference
    }

    /// Returns the payment entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[Ps2Entry] {
        &self.entries
    }
}
