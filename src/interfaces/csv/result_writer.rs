use crate::domain::tip::{TipRequest, TipResult};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// One calculated row of batch output.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct TipRecord {
    pub bill: Decimal,
    pub tip_percent: Decimal,
    pub round_up: bool,
    pub tip: String,
}

impl TipRecord {
    pub fn new(request: &TipRequest, result: TipResult) -> Self {
        Self {
            bill: request.bill_amount.normalize(),
            tip_percent: request.tip_percent.normalize(),
            round_up: request.round_up,
            tip: result.into(),
        }
    }
}

/// Writes calculated rows as CSV with a `bill,tip_percent,round_up,tip` header.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_records(&mut self, records: impl IntoIterator<Item = TipRecord>) -> Result<()> {
        for record in records {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes calculated rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut sink: W, records: &[TipRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, records)?;
    writeln!(sink)?;
    Ok(())
}
