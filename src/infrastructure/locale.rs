use crate::domain::currency::{CurrencyStyle, Locale, SymbolPosition};
use crate::domain::ports::CurrencyFormatter;
use rust_decimal::{Decimal, RoundingStrategy};

const NO_BREAK_SPACE: char = '\u{00A0}';

/// Formats amounts following the monetary conventions of a [`Locale`].
///
/// Amounts are rounded half-to-even to the locale's fraction digits, so
/// `0.125` renders as `$0.12` and `0.135` as `$0.14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleCurrencyFormatter {
    locale: Locale,
    style: CurrencyStyle,
}

impl LocaleCurrencyFormatter {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            style: locale.currency_style(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn style(&self) -> &CurrencyStyle {
        &self.style
    }

    fn digits(&self, magnitude: Decimal) -> String {
        let text = magnitude.to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let mut out = group_thousands(integer, self.style.grouping_separator);
        let width = self.style.fraction_digits as usize;
        if width > 0 {
            out.push(self.style.decimal_separator);
            out.push_str(fraction);
            out.extend(std::iter::repeat_n('0', width.saturating_sub(fraction.len())));
        }
        out
    }
}

impl Default for LocaleCurrencyFormatter {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format(&self, amount: Decimal) -> String {
        let rounded = amount
            .round_dp_with_strategy(self.style.fraction_digits, RoundingStrategy::MidpointNearestEven);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = self.digits(rounded.abs());

        let sign = if negative { "-" } else { "" };
        match self.style.position {
            SymbolPosition::Prefix => format!("{sign}{}{digits}", self.style.symbol),
            SymbolPosition::Suffix => {
                format!("{sign}{digits}{NO_BREAK_SPACE}{}", self.style.symbol)
            }
        }
    }
}

fn group_thousands(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}
