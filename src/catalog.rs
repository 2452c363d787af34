//! The static rank catalog shared by every card.
//!
//! The catalog is the closed set of rank symbols a card can take on,
//! together with each symbol's base rank, trump point value, and
//! description. Because [`Symbol`] is an enum, lookups are total: the
//! synthesized trump symbols ([`Symbol::Off`], [`Symbol::OffJack`]) are
//! always defined and no post-construction lookup can fail.

/// A single row of the rank catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankEntry {
    /// Total-order value; higher wins a trick.
    pub rank: u8,
    /// Points awarded when the card is captured while classified as trump.
    pub points: u8,
    /// Human-readable description.
    pub desc: &'static str,
}

/// A rank symbol: the lookup key for a card's rank and points.
///
/// A card's *base* symbol is derived from its name at construction.
/// Declaring a trump suit can substitute an *effective* symbol instead:
/// [`Symbol::Off`] for any demoted non-trump card, or [`Symbol::OffJack`]
/// for the same-color jack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Ace, the highest ordinary card.
    Ace,
    /// King.
    King,
    /// Queen.
    Queen,
    /// Jack of the trump suit itself.
    Jack,
    /// Off jack: the jack of the trump suit's same-color partner.
    OffJack,
    /// Big joker.
    Big,
    /// Little joker.
    Little,
    /// 10.
    Ten,
    /// 9.
    Nine,
    /// 8.
    Eight,
    /// 7.
    Seven,
    /// 6.
    Six,
    /// 5.
    Five,
    /// 4.
    Four,
    /// 3, worth three points when trump.
    Three,
    /// 2.
    Two,
    /// A non-trump card demoted by a trump declaration.
    Off,
    /// Reserved "no play" sentinel, below every playable card.
    NoPlay,
}

impl Symbol {
    /// Parses a catalog token.
    ///
    /// Accepts long names (`"Ace"`, `"Big"`), one-letter aliases
    /// (`"A"`, `"B"`, `"X"`, `"N"`, `"_"`), and digits (`"2"`..`"10"`,
    /// with `"1"` as a legacy alias for `"10"`). Returns `None` for any
    /// token outside the catalog.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let symbol = match token {
            "Ace" | "A" => Self::Ace,
            "King" | "K" => Self::King,
            "Queen" | "Q" => Self::Queen,
            "Jack" | "J" => Self::Jack,
            "X" => Self::OffJack,
            "Big" | "B" => Self::Big,
            "Little" | "L" => Self::Little,
            "10" | "1" => Self::Ten,
            "9" => Self::Nine,
            "8" => Self::Eight,
            "7" => Self::Seven,
            "6" => Self::Six,
            "5" => Self::Five,
            "4" => Self::Four,
            "3" => Self::Three,
            "2" => Self::Two,
            "N" => Self::Off,
            "_" => Self::NoPlay,
            _ => return None,
        };
        Some(symbol)
    }

    /// Returns the canonical long name for this symbol.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::King => "King",
            Self::Queen => "Queen",
            Self::Jack => "Jack",
            Self::OffJack => "X",
            Self::Big => "Big",
            Self::Little => "Little",
            Self::Ten => "10",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
            Self::Off => "N",
            Self::NoPlay => "_",
        }
    }

    /// Returns the short token used in display strings.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::King => "K",
            Self::Queen => "Q",
            Self::Jack => "J",
            Self::OffJack => "X",
            Self::Big => "B",
            Self::Little => "L",
            Self::Ten => "10",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
            Self::Off => "N",
            Self::NoPlay => "_",
        }
    }

    /// Returns the catalog row for this symbol.
    #[must_use]
    pub const fn entry(self) -> RankEntry {
        match self {
            Self::Ace => RankEntry { rank: 17, points: 1, desc: "Ace" },
            Self::King => RankEntry { rank: 16, points: 0, desc: "King" },
            Self::Queen => RankEntry { rank: 15, points: 0, desc: "Queen" },
            Self::Jack => RankEntry { rank: 14, points: 1, desc: "Jack" },
            Self::OffJack => RankEntry { rank: 13, points: 1, desc: "Off Jack" },
            Self::Big => RankEntry { rank: 12, points: 1, desc: "Big Joker" },
            Self::Little => RankEntry { rank: 11, points: 1, desc: "Little Joker" },
            Self::Ten => RankEntry { rank: 10, points: 1, desc: "10" },
            Self::Nine => RankEntry { rank: 9, points: 0, desc: "9" },
            Self::Eight => RankEntry { rank: 8, points: 0, desc: "8" },
            Self::Seven => RankEntry { rank: 7, points: 0, desc: "7" },
            Self::Six => RankEntry { rank: 6, points: 0, desc: "6" },
            Self::Five => RankEntry { rank: 5, points: 0, desc: "5" },
            Self::Four => RankEntry { rank: 4, points: 0, desc: "4" },
            Self::Three => RankEntry { rank: 3, points: 3, desc: "3" },
            Self::Two => RankEntry { rank: 2, points: 1, desc: "2" },
            Self::Off => RankEntry { rank: 1, points: 0, desc: "Off" },
            Self::NoPlay => RankEntry { rank: 0, points: 0, desc: "No play" },
        }
    }

    /// Returns the base rank for this symbol.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.entry().rank
    }

    /// Returns the trump point value for this symbol.
    #[must_use]
    pub const fn points(self) -> u8 {
        self.entry().points
    }

    /// Returns the description for this symbol.
    #[must_use]
    pub const fn desc(self) -> &'static str {
        self.entry().desc
    }
}
