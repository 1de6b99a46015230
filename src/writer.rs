use std::io::Write;

use csv::WriterBuilder;

use crate::errors::ConvertResult;
use crate::types::{HEADER, Transaction};

/// Write `transactions` as comma separated records below the canonical header.
///
/// The header is written even when there is nothing else to write.
pub fn write_transactions<W: Write>(output: W, transactions: &[Transaction]) -> ConvertResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    writer.write_record(HEADER)?;
    for transaction in transactions {
        writer.serialize(transaction)?;
    }
    writer.flush()?;
    Ok(())
}
