use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Percentage applied when the caller does not supply one.
pub const DEFAULT_TIP_PERCENT: Decimal = dec!(15.0);

/// How the raw tip is turned into the amount that gets formatted.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum RoundingPolicy {
    /// Keep the raw tip; the formatter rounds it to its own precision.
    #[default]
    Exact,
    /// Ceiling to the next whole currency unit.
    WholeUnitUp,
}

impl From<bool> for RoundingPolicy {
    fn from(round_up: bool) -> Self {
        if round_up {
            Self::WholeUnitUp
        } else {
            Self::Exact
        }
    }
}

/// A single, immutable tip calculation input.
///
/// Negative bills and percentages are accepted as-is and produce a negative
/// (or zero) tip through the same formula.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TipRequest {
    pub bill_amount: Decimal,
    pub tip_percent: Decimal,
    pub round_up: bool,
}

impl TipRequest {
    /// Builds a request, falling back to [`DEFAULT_TIP_PERCENT`] when
    /// `tip_percent` is `None`.
    pub fn new(bill_amount: Decimal, tip_percent: Option<Decimal>, round_up: bool) -> Self {
        Self {
            bill_amount,
            tip_percent: tip_percent.unwrap_or(DEFAULT_TIP_PERCENT),
            round_up,
        }
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.round_up.into()
    }

    /// The amount handed to the currency formatter.
    ///
    /// A product beyond the `Decimal` range is clamped to `Decimal::MAX` or
    /// `Decimal::MIN` and reported as a warning.
    pub(crate) fn tip_amount(&self) -> Decimal {
        let rate = self.tip_percent / Decimal::ONE_HUNDRED;
        let raw = rate.checked_mul(self.bill_amount).unwrap_or_else(|| {
            let clamped = saturate(rate.is_sign_negative() != self.bill_amount.is_sign_negative());
            tracing::warn!(
                bill = %self.bill_amount,
                percent = %self.tip_percent,
                %clamped,
                "Tip exceeds the representable range, clamped"
            );
            clamped
        });

        match self.rounding() {
            RoundingPolicy::Exact => raw,
            RoundingPolicy::WholeUnitUp => raw.ceil(),
        }
    }
}

fn saturate(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// The formatted tip, exactly as it should be displayed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TipResult(pub String);

impl TipResult {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TipResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TipResult> for String {
    fn from(result: TipResult) -> Self {
        result.0
    }
}
