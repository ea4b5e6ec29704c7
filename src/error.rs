//! Error types shared by the algorithm modules.

use thiserror::Error;

/// Error variants for algorithm inputs and streams.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input was empty where at least one element is required.
    #[error("input is empty")]
    EmptyInput,

    /// A symbol outside the codebook's alphabet was encountered.
    #[error("symbol {0:?} is not in the codebook")]
    UnknownSymbol(char),

    /// A bit stream ended in the middle of a code word.
    #[error("bit stream ends inside a code word")]
    TruncatedBits,

    /// An item has zero weight, so its value-per-weight ratio is undefined.
    #[error("item {0} has zero weight")]
    ZeroWeight(usize),
}

/// A specialized Result type for algorithm operations.
pub type Result<T> = std::result::Result<T, Error>;
