use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum TipError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown locale: {0}")]
    #[diagnostic(
        code(tipcalc::unknown_locale),
        help("supported locales: en-US, en-GB, de-DE, fr-FR, ja-JP")
    )]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, TipError>;
