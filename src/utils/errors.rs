use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit string cannot be empty")]
    EmptyDigitString,
    #[error("Digit string must contain only digits: {0}")]
    InvalidDigitString(String),
    #[error("Expected exactly {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}
