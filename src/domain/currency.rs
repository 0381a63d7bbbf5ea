use crate::error::TipError;
use std::fmt;
use std::str::FromStr;

/// Where the currency symbol goes relative to the digits.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SymbolPosition {
    /// `$1.00`
    Prefix,
    /// `1,00 €`, separated by a no-break space.
    Suffix,
}

/// Monetary display conventions for a single locale.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CurrencyStyle {
    pub symbol: &'static str,
    pub position: SymbolPosition,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub fraction_digits: u32,
}

/// The locales a formatter can be built for.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    FrFr,
    JaJp,
}

impl Locale {
    pub const ALL: [Locale; 5] = [
        Locale::EnUs,
        Locale::EnGb,
        Locale::DeDe,
        Locale::FrFr,
        Locale::JaJp,
    ];

    /// Environment variables consulted by [`Locale::from_env`], in order.
    const ENV_VARS: [&'static str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::JaJp => "ja-JP",
        }
    }

    pub fn currency_style(&self) -> CurrencyStyle {
        match self {
            Locale::EnUs => CurrencyStyle {
                symbol: "$",
                position: SymbolPosition::Prefix,
                decimal_separator: '.',
                grouping_separator: ',',
                fraction_digits: 2,
            },
            Locale::EnGb => CurrencyStyle {
                symbol: "£",
                position: SymbolPosition::Prefix,
                decimal_separator: '.',
                grouping_separator: ',',
                fraction_digits: 2,
            },
            Locale::DeDe => CurrencyStyle {
                symbol: "€",
                position: SymbolPosition::Suffix,
                decimal_separator: ',',
                grouping_separator: '.',
                fraction_digits: 2,
            },
            Locale::FrFr => CurrencyStyle {
                symbol: "€",
                position: SymbolPosition::Suffix,
                decimal_separator: ',',
                grouping_separator: '\u{202F}',
                fraction_digits: 2,
            },
            Locale::JaJp => CurrencyStyle {
                symbol: "￥",
                position: SymbolPosition::Prefix,
                decimal_separator: '.',
                grouping_separator: ',',
                fraction_digits: 0,
            },
        }
    }

    /// Resolves the host locale from `LC_ALL`, `LC_MONETARY` and `LANG`.
    ///
    /// The first non-empty variable decides; anything unsupported falls back
    /// to `en-US`.
    pub fn from_env() -> Self {
        let value = Self::ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty());

        match value {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::debug!(%value, "Unsupported host locale, using en-US");
                Locale::default()
            }),
            None => Locale::default(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = TipError;

    /// Accepts `en-US`, `en_us`, and POSIX forms such as `de_DE.UTF-8` or
    /// `fr_FR@euro`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('_', "-");

        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&tag))
            .ok_or_else(|| TipError::UnknownLocale(s.to_string()))
    }
}
