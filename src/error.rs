use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseBitsError {
    #[error("invalid bit {found:?} at index {index}, expected '0' or '1'")]
    InvalidDigit { index: usize, found: char },
}
