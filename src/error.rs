//! Error types for card construction.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when building a card from name and suit tokens.
///
/// Construction is the only fallible operation in the crate; every
/// operation on a successfully built card is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The rank-name token is not a rank catalog key.
    #[error("invalid card name: {name}")]
    InvalidName {
        /// The rejected token.
        name: String,
    },
    /// The suit token is not one of the five valid suit names.
    #[error("invalid suit: {suit}")]
    InvalidSuit {
        /// The rejected token.
        suit: String,
    },
}
