use crate::domain::tip::TipRequest;
use crate::error::{Result, TipError};
use crate::interfaces::input::{parse_number, parse_toggle};
use serde::Deserialize;
use std::io::Read;

/// One batch row as written by the user, before any coercion.
///
/// Every column is optional so that short records and empty cells are read
/// rather than rejected.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(default)]
pub struct RawTipRow {
    pub bill: Option<String>,
    pub tip: Option<String>,
    pub round_up: Option<String>,
}

impl RawTipRow {
    /// Coerces the row into a request.
    ///
    /// A missing or empty `tip` cell means the percentage was omitted, so the
    /// default applies; text that is present but unparseable counts as zero.
    pub fn into_request(self) -> TipRequest {
        TipRequest::new(
            parse_number(self.bill.as_deref().unwrap_or_default()),
            self.tip.as_deref().map(parse_number),
            self.round_up.as_deref().is_some_and(parse_toggle),
        )
    }
}

/// Reads tip requests from a CSV source with a `bill,tip,round_up` header.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<RawTipRow>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes rows.
    pub fn rows(self) -> impl Iterator<Item = Result<RawTipRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(TipError::from))
    }
}
