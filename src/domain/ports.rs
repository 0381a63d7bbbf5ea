use rust_decimal::Decimal;

/// Renders a monetary amount as display text.
///
/// Implementations hold no mutable state; the same amount always yields the
/// same string.
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, amount: Decimal) -> String;
}

pub type CurrencyFormatterBox = Box<dyn CurrencyFormatter>;
