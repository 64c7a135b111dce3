//! Fixed-width PS2 payment-file encoding.
//!
//! The PS2 format is the legacy fixed-width file the operations centre
//! hands to the payment system: a header record, one detail record per
//! payment entry, and a footer with totals, every record exactly 80
//! characters. Encoding is all-or-nothing: any validation failure aborts
//! the whole batch with the specific failing field or row.

mod batch;
mod encoder;
mod error;

pub use batch::{Ps2Batch, Ps2Entry};
pub use encoder::encode;
pub use error::Ps2EncodeError;

#[cfg(test)]
mod tests;
