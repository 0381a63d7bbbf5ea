use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::str::FromStr;
use thiserror::Error;

/// Why free text could not be used as a number as-is.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum NumberError {
    #[error("empty input")]
    Empty,
    #[error("not a number")]
    Unparseable,
    /// A valid floating-point literal whose magnitude `Decimal` cannot hold.
    #[error("out of range, clamped to {clamped}")]
    OutOfRange { clamped: Decimal },
}

/// Parses free text into a number.
///
/// Only text that is a valid floating-point literal is accepted: plain
/// decimals (`10`, `10.5`, `.5`, `5.`, `-3`, `+3`) and scientific notation
/// (`1e2`). Underscore or comma separators are rejected. Infinities and
/// literals beyond the `Decimal` range come back as [`NumberError::OutOfRange`]
/// carrying the nearest representable value; `NaN` is unparseable.
pub fn try_parse_number(text: &str) -> Result<Decimal, NumberError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NumberError::Empty);
    }

    let float = text.parse::<f64>().map_err(|_| NumberError::Unparseable)?;
    if float.is_nan() {
        return Err(NumberError::Unparseable);
    }

    let exact = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .or_else(|| Decimal::from_f64(float));
    match exact {
        Some(value) => Ok(value),
        // Below the smallest representable step
        None if float.abs() < 1.0 => Ok(Decimal::ZERO),
        None if float.is_sign_negative() => Err(NumberError::OutOfRange {
            clamped: Decimal::MIN,
        }),
        None => Err(NumberError::OutOfRange {
            clamped: Decimal::MAX,
        }),
    }
}

/// Parses free text into a number, treating empty or unparseable text as zero.
///
/// Out-of-range literals are clamped; both fallbacks are logged.
pub fn parse_number(text: &str) -> Decimal {
    match try_parse_number(text) {
        Ok(value) => value,
        Err(NumberError::Empty) => Decimal::ZERO,
        Err(NumberError::Unparseable) => {
            tracing::warn!(text, "Unparseable number treated as zero");
            Decimal::ZERO
        }
        Err(NumberError::OutOfRange { clamped }) => {
            tracing::warn!(text, %clamped, "Number out of range, clamped");
            clamped
        }
    }
}

/// Parses a toggle value. Only `true`, `yes`, `y`, `on` and `1` (any case)
/// switch it on.
pub fn parse_toggle(text: &str) -> bool {
    matches!(
        text.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "on" | "1"
    )
}
