//! A trump-suit card ranking engine with optional `no_std` support.
//!
//! The crate provides a [`Card`] type for Pitch-style trick-taking games
//! with variable trump: given a card's name and suit, it computes the
//! card's effective rank, point value, and trump status under any
//! declared trump suit, including the off-jack and joker conventions.
//!
//! # Example
//!
//! ```
//! use pitchrs::{Card, Suit};
//!
//! let mut ace = Card::new("Ace", "Spades")?;
//! let mut king = Card::new("King", "Hearts")?;
//! assert!(ace > king);
//!
//! // Hearts trump demotes the ace and promotes the king.
//! ace.set_trump(Some(Suit::Hearts));
//! king.set_trump(Some(Suit::Hearts));
//! assert!(ace < king);
//! # Ok::<(), pitchrs::ParseCardError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod catalog;
pub mod error;

// Re-export main types
pub use card::{Card, Suit, TrumpView, base_symbol};
pub use catalog::{RankEntry, Symbol};
pub use error::ParseCardError;
