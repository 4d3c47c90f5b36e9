use thiserror::Error;

pub type NavResult<T> = Result<T, NavError>;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("malformed date string: {0}")]
    MalformedDate(String),

    #[error("unrecognized duration unit: {0}")]
    UnknownUnit(String),

    #[error("unrecognized month name: {0}")]
    UnknownMonth(String),

    #[error("date out of representable range: {0}")]
    DateOutOfRange(String),

    #[error("invalid geometry: width={width}, height={height}")]
    InvalidGeometry { width: f64, height: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
