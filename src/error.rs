
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("integer parse failed for {text:?}: {source}")]
    Int {
        text: String,
        source: std::num::ParseIntError,
    },
    #[error("number parse failed for {text:?}: {source}")]
    Number {
        text: String,
        source: std::num::ParseFloatError,
    },
    #[error("date parse failed for {text:?} with pattern {pattern:?}: {source}")]
    Date {
        text: String,
        pattern: String,
        source: chrono::ParseError,
    },
    #[error("unsupported pattern symbol {symbol:?} in {pattern:?}")]
    Pattern { symbol: char, pattern: String },
    #[error("split pattern error: {0}")]
    Split(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
