//! Card identity, trump resolution, and ordering.

extern crate alloc;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use alloc::string::{String, ToString};

use crate::catalog::Symbol;
use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Joker. Cards of this suit are trump under any declaration.
    Joker,
}

impl Suit {
    /// Parses a suit from its full name, e.g. `"Spades"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Spades" => Some(Self::Spades),
            "Diamonds" => Some(Self::Diamonds),
            "Clubs" => Some(Self::Clubs),
            "Hearts" => Some(Self::Hearts),
            "Joker" => Some(Self::Joker),
            _ => None,
        }
    }

    /// Returns the full suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Joker => "Joker",
        }
    }

    /// Returns the one-character display glyph.
    ///
    /// The joker suit has no pip glyph and renders as the letter `J`.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Joker => 'J',
        }
    }

    /// Returns the same-color partner suit, if any.
    ///
    /// The pairing drives the off-jack rule: when a suit is declared
    /// trump, the jack of its partner suit is trump as well.
    #[must_use]
    pub const fn color_partner(self) -> Option<Self> {
        match self {
            Self::Spades => Some(Self::Clubs),
            Self::Clubs => Some(Self::Spades),
            Self::Diamonds => Some(Self::Hearts),
            Self::Hearts => Some(Self::Diamonds),
            Self::Joker => None,
        }
    }
}

/// Derives the rank-lookup token from a long card name.
///
/// `"10"` maps to itself; every other name maps to its first character
/// (`"Ace"` to `"A"`, `"Big"` to `"B"`).
#[must_use]
pub fn base_symbol(name: &str) -> &str {
    if name == "10" {
        name
    } else {
        let end = name.chars().next().map_or(0, char::len_utf8);
        &name[..end]
    }
}

/// A snapshot of a card's derived state under one trump declaration.
///
/// Views are produced whole by [`Card::set_trump`]; the fields are never
/// updated piecemeal, so `rank` and `points` always agree with `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrumpView {
    /// The effective rank symbol under this declaration.
    pub symbol: Symbol,
    /// Total-order value; higher wins.
    pub rank: u8,
    /// Points awarded when the card is captured; zero unless trump.
    pub points: u8,
    /// The declaration this view was derived under, if any.
    pub trump_suit: Option<Suit>,
}

/// A playing card: immutable identity plus the derived view for the
/// currently declared trump suit.
///
/// Identity (name, suit, short name) is fixed at construction. Rank and
/// points are context-dependent and rederived by [`Card::set_trump`]:
/// the same pair of cards can order differently before and after a trump
/// declaration. Equality ignores trump state entirely.
#[derive(Debug, Clone)]
pub struct Card {
    /// Canonical long name, e.g. `"Ace"`.
    name: &'static str,
    /// The card's own suit.
    suit: Suit,
    /// Display string: base symbol token plus suit glyph, e.g. `"A♠"`.
    short_name: String,
    /// Base rank symbol derived from the name.
    base: Symbol,
    /// Derived state for the current trump declaration.
    view: TrumpView,
}

impl Card {
    /// Creates a new card from a rank-name token and a suit name.
    ///
    /// `name` may be any rank catalog key: a long name (`"Ace"`,
    /// `"Big"`), a one-letter alias (`"A"`, `"B"`), or a digit
    /// (`"2"`..`"10"`). The card starts in the untrumped baseline state.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCardError::InvalidName`] if `name` is not a
    /// catalog key, or [`ParseCardError::InvalidSuit`] if `suit` is not
    /// one of the five suit names.
    pub fn new(name: &str, suit: &str) -> Result<Self, ParseCardError> {
        let base = Symbol::parse(name).ok_or_else(|| ParseCardError::InvalidName {
            name: name.to_string(),
        })?;
        let suit = Suit::from_name(suit).ok_or_else(|| ParseCardError::InvalidSuit {
            suit: suit.to_string(),
        })?;

        let mut short_name = String::from(base.token());
        short_name.push(suit.glyph());

        Ok(Self {
            name: base.name(),
            suit,
            short_name,
            base,
            view: baseline_view(base),
        })
    }

    /// Returns the canonical long name, e.g. `"Ace"` for a card built
    /// from `"A"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the card's own suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the display short name, e.g. `"A♠"`, `"10♦"`, `"BJ"`.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Returns the effective rank symbol under the current declaration.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.view.symbol
    }

    /// Returns the current rank. Higher wins; context-dependent.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.view.rank
    }

    /// Returns the current point value. Zero unless the card is
    /// currently classified as trump.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.view.points
    }

    /// Returns the trump suit currently declared for this card, if any.
    #[must_use]
    pub const fn trump_suit(&self) -> Option<Suit> {
        self.view.trump_suit
    }

    /// Returns the full derived snapshot for the current declaration.
    #[must_use]
    pub const fn view(&self) -> TrumpView {
        self.view
    }

    /// Returns the catalog description for the current effective symbol,
    /// e.g. `"Off"` for a card demoted by a trump declaration.
    #[must_use]
    pub const fn desc(&self) -> &'static str {
        self.view.symbol.desc()
    }

    /// Returns whether this card counts as trump under `trump`.
    ///
    /// Jokers are always trump, whatever the declaration. A jack is also
    /// trump when its suit is the same-color partner of the declared
    /// suit (the off-jack rule). Every other card is trump only in its
    /// own suit. With no declaration, only jokers are trump.
    #[must_use]
    pub fn is_trump_under(&self, trump: Option<Suit>) -> bool {
        if self.suit == Suit::Joker {
            return true;
        }
        trump.is_some_and(|trump| {
            self.suit == trump
                || (self.base == Symbol::Jack && self.suit.color_partner() == Some(trump))
        })
    }

    /// Returns whether this card is trump under its current declaration.
    #[must_use]
    pub fn is_trump(&self) -> bool {
        self.is_trump_under(self.view.trump_suit)
    }

    /// Negation of [`Card::is_trump_under`].
    #[must_use]
    pub fn is_nontrump_under(&self, trump: Option<Suit>) -> bool {
        !self.is_trump_under(trump)
    }

    /// Negation of [`Card::is_trump`].
    #[must_use]
    pub fn is_nontrump(&self) -> bool {
        !self.is_trump()
    }

    /// Computes the effective rank symbol under a declared trump suit.
    ///
    /// Non-trump cards demote to [`Symbol::Off`]. The same-color jack
    /// becomes [`Symbol::OffJack`], ranking just below the declared
    /// suit's own jack. Every other trump card keeps its base symbol.
    #[must_use]
    pub fn trump_symbol(&self, trump: Suit) -> Symbol {
        if !self.is_trump_under(Some(trump)) {
            Symbol::Off
        } else if self.base == Symbol::Jack && self.suit != trump {
            Symbol::OffJack
        } else {
            self.base
        }
    }

    /// Declares (or clears) the trump suit for this card and rederives
    /// its effective symbol, rank, and points.
    ///
    /// Passing `None` restores the exact construction baseline.
    /// Idempotent: repeated calls with the same argument are no-ops.
    pub fn set_trump(&mut self, trump: Option<Suit>) {
        self.view = match trump {
            None => baseline_view(self.base),
            Some(suit) => {
                let symbol = self.trump_symbol(suit);
                TrumpView {
                    symbol,
                    rank: symbol.rank(),
                    points: symbol.points(),
                    trump_suit: Some(suit),
                }
            }
        };
    }
}

/// The untrumped derived state: base symbol, base rank, no points.
const fn baseline_view(base: Symbol) -> TrumpView {
    TrumpView {
        symbol: base,
        rank: base.rank(),
        points: 0,
        trump_suit: None,
    }
}

impl fmt::Display for Card {
    /// Right-pads the short name to 3 columns, e.g. `" A♠"`, `"10♦"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}", self.short_name)
    }
}

// Equality is card identity (same base symbol and suit) and ignores
// trump state. Ordering compares the current derived rank only, so it
// changes with the declaration; both cards must carry the same
// declaration for a comparison to be meaningful within one trick.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.short_name == other.short_name
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.short_name.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.view.rank.cmp(&other.view.rank))
    }
}
