//! ShopKeep CSV writer.

use std::io::Write;

use csv::{Terminator, Writer, WriterBuilder};
use pos_model::{ShopkeepField, ShopkeepRow};

use crate::error::Result;

/// Streams ShopKeep import rows to a writer.
///
/// The header row is written on construction, so even a run that converts
/// nothing produces a valid (header-only) import. Records end with CRLF, the
/// spreadsheet dialect ShopKeep imports are exchanged in.
pub struct ShopkeepWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> ShopkeepWriter<W> {
    /// Wraps `inner` and writes the ShopKeep header row.
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(inner);
        writer.write_record(ShopkeepField::header())?;
        Ok(Self { writer })
    }

    /// Appends one row in ShopKeep column order.
    pub fn write_row(&mut self, row: &ShopkeepRow) -> Result<()> {
        self.writer.write_record(row.values())?;
        Ok(())
    }

    /// Flushes buffered output and returns the inner writer.
    pub fn finish(self) -> Result<W> {
        let inner = self
            .writer
            .into_inner()
            .map_err(|err| err.into_error())?;
        Ok(inner)
    }
}
