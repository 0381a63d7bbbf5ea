use crate::domain::ports::{CurrencyFormatter, CurrencyFormatterBox};
use crate::domain::tip::{TipRequest, TipResult};
use rust_decimal::Decimal;

/// Computes a tip and formats it in one step.
///
/// `tip_percent` of `None` applies the 15 % default. With `round_up` the tip
/// is raised to the next whole currency unit before formatting.
pub fn calculate_tip(
    bill_amount: Decimal,
    tip_percent: Option<Decimal>,
    round_up: bool,
    formatter: &dyn CurrencyFormatter,
) -> String {
    let request = TipRequest::new(bill_amount, tip_percent, round_up);
    formatter.format(request.tip_amount())
}

/// The main entry point for tip calculations.
///
/// `TipEngine` owns the currency formatter and turns each [`TipRequest`] into
/// a freshly formatted [`TipResult`]. It keeps no state between calls.
pub struct TipEngine {
    formatter: CurrencyFormatterBox,
}

impl TipEngine {
    /// Creates a new `TipEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `formatter` - Renders the computed tip for display.
    pub fn new(formatter: CurrencyFormatterBox) -> Self {
        Self { formatter }
    }

    /// Calculates and formats the tip for a request.
    pub fn calculate(&self, request: &TipRequest) -> TipResult {
        TipResult(self.formatter.format(request.tip_amount()))
    }
}
