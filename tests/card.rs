//! Card integration tests.

use pitchrs::{Card, ParseCardError, Suit, Symbol, base_symbol};

fn card(name: &str, suit: &str) -> Card {
    Card::new(name, suit).unwrap()
}

#[test]
fn construction_baseline() {
    let ace = card("Ace", "Spades");
    assert_eq!(ace.name(), "Ace");
    assert_eq!(ace.suit(), Suit::Spades);
    assert_eq!(ace.short_name(), "A♠");
    assert_eq!(ace.symbol(), Symbol::Ace);
    assert_eq!(ace.rank(), 17);
    assert_eq!(ace.points(), 0);
    assert_eq!(ace.trump_suit(), None);
}

#[test]
fn short_aliases_canonicalize() {
    let ace = card("A", "Hearts");
    assert_eq!(ace.name(), "Ace");
    assert_eq!(ace.short_name(), "A♥");

    let king = card("K", "Diamonds");
    assert_eq!(king.name(), "King");
    assert_eq!(king.short_name(), "K♦");

    // Legacy alias for 10.
    let ten = card("1", "Diamonds");
    assert_eq!(ten.name(), "10");
    assert_eq!(ten.short_name(), "10♦");
    assert_eq!(ten.rank(), 10);
}

#[test]
fn construction_errors_are_distinguishable() {
    assert_eq!(
        Card::new("Invalid", "Spades").unwrap_err(),
        ParseCardError::InvalidName {
            name: "Invalid".into()
        }
    );
    assert_eq!(
        Card::new("Ace", "InvalidSuit").unwrap_err(),
        ParseCardError::InvalidSuit {
            suit: "InvalidSuit".into()
        }
    );
}

#[test]
fn synthesized_tokens_are_valid_names() {
    // X, N, and _ are catalog keys in their own right.
    assert_eq!(card("X", "Spades").rank(), 13);
    assert_eq!(card("N", "Spades").rank(), 1);
    assert_eq!(card("_", "Spades").rank(), 0);
}

#[test]
fn display_pads_to_three_columns() {
    assert_eq!(format!("{}", card("Ace", "Spades")), " A♠");
    assert_eq!(format!("{}", card("King", "Hearts")), " K♥");
    assert_eq!(format!("{}", card("10", "Diamonds")), "10♦");
    assert_eq!(format!("{}", card("Big", "Joker")), " BJ");
    assert_eq!(format!("{}", card("Little", "Joker")), " LJ");
}

#[test]
fn base_symbol_rules() {
    assert_eq!(base_symbol("Ace"), "A");
    assert_eq!(base_symbol("King"), "K");
    assert_eq!(base_symbol("Queen"), "Q");
    assert_eq!(base_symbol("Jack"), "J");
    assert_eq!(base_symbol("10"), "10");
    assert_eq!(base_symbol("9"), "9");
}

#[test]
fn descriptions_follow_effective_symbol() {
    let mut ace = card("Ace", "Spades");
    assert_eq!(ace.desc(), "Ace");
    assert_eq!(card("Big", "Joker").desc(), "Big Joker");
    assert_eq!(card("Little", "Joker").desc(), "Little Joker");
    assert_eq!(card("10", "Diamonds").desc(), "10");

    ace.set_trump(Some(Suit::Hearts));
    assert_eq!(ace.desc(), "Off");
}

#[test]
fn jokers_are_always_trump() {
    let big = card("Big", "Joker");
    let little = card("Little", "Joker");
    for suit in [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts] {
        assert!(big.is_trump_under(Some(suit)));
        assert!(little.is_trump_under(Some(suit)));
    }
    assert!(big.is_trump_under(None));
}

#[test]
fn nothing_but_jokers_is_trump_without_a_declaration() {
    assert!(!card("Ace", "Spades").is_trump());
    assert!(card("Ace", "Spades").is_nontrump());
    assert!(!card("Jack", "Clubs").is_trump_under(None));
}

#[test]
fn off_jack_color_pairing() {
    let pairs = [
        ("Clubs", Suit::Spades),
        ("Spades", Suit::Clubs),
        ("Hearts", Suit::Diamonds),
        ("Diamonds", Suit::Hearts),
    ];
    for (own, trump) in pairs {
        let jack = card("Jack", own);
        assert!(jack.is_trump_under(Some(trump)), "Jack of {own}");
        assert_eq!(jack.trump_symbol(trump), Symbol::OffJack, "Jack of {own}");
    }

    // The declared suit's own jack stays a regular jack.
    assert_eq!(card("Jack", "Spades").trump_symbol(Suit::Spades), Symbol::Jack);
    // An off-color jack is not trump at all.
    assert!(!card("Jack", "Hearts").is_trump_under(Some(Suit::Spades)));
    assert_eq!(card("Jack", "Hearts").trump_symbol(Suit::Spades), Symbol::Off);
}

#[test]
fn off_jack_ranks_below_regular_jack() {
    let mut regular = card("Jack", "Spades");
    let mut off = card("Jack", "Clubs");
    regular.set_trump(Some(Suit::Spades));
    off.set_trump(Some(Suit::Spades));

    assert_eq!(regular.rank(), 14);
    assert_eq!(off.rank(), 13);
    assert!(regular > off);
    assert_eq!(off.symbol(), Symbol::OffJack);
    assert_eq!(off.desc(), "Off Jack");
    assert_eq!(off.points(), 1);
}

#[test]
fn non_trump_cards_are_demoted() {
    let mut ace = card("Ace", "Spades");
    ace.set_trump(Some(Suit::Hearts));
    assert_eq!(ace.symbol(), Symbol::Off);
    assert_eq!(ace.rank(), 1);
    assert_eq!(ace.points(), 0);
    assert_eq!(ace.trump_suit(), Some(Suit::Hearts));
}

#[test]
fn ordering_depends_on_trump_context() {
    let mut ace = card("Ace", "Spades");
    let mut king = card("King", "Hearts");
    assert!(ace > king);

    ace.set_trump(Some(Suit::Hearts));
    king.set_trump(Some(Suit::Hearts));
    assert_eq!(king.rank(), 16);
    assert!(ace < king);
}

#[test]
fn equality_ignores_trump_state() {
    let plain = card("Ace", "Spades");
    let mut trumped = card("Ace", "Spades");
    trumped.set_trump(Some(Suit::Hearts));
    assert_eq!(plain, trumped);

    assert_ne!(card("Jack", "Clubs"), card("Jack", "Diamonds"));
    assert_ne!(card("Jack", "Clubs"), card("10", "Diamonds"));
}

#[test]
fn set_trump_resets_and_is_idempotent() {
    let mut three = card("3", "Spades");
    let baseline = three.view();
    assert_eq!(three.rank(), 3);
    assert_eq!(three.points(), 0);

    three.set_trump(Some(Suit::Spades));
    assert_eq!(three.rank(), 3);
    assert_eq!(three.points(), 3);

    let trumped = three.view();
    three.set_trump(Some(Suit::Spades));
    assert_eq!(three.view(), trumped);

    // Clearing restores the exact baseline regardless of history.
    three.set_trump(Some(Suit::Hearts));
    three.set_trump(None);
    assert_eq!(three.view(), baseline);
}

#[test]
fn trump_points_come_from_the_catalog() {
    let mut ten = card("10", "Diamonds");
    ten.set_trump(Some(Suit::Diamonds));
    assert_eq!(ten.points(), 1);

    let mut king = card("King", "Spades");
    king.set_trump(Some(Suit::Spades));
    assert_eq!(king.points(), 0);

    let mut two = card("2", "Hearts");
    two.set_trump(Some(Suit::Hearts));
    assert_eq!(two.points(), 1);
}

#[test]
fn joker_trump_state_follows_declaration() {
    let mut big = card("Big", "Joker");
    assert!(big.is_trump());
    big.set_trump(Some(Suit::Spades));
    assert!(big.is_trump());
    assert_eq!(big.symbol(), Symbol::Big);
    assert_eq!(big.rank(), 12);
    assert_eq!(big.points(), 1);
}

#[test]
fn suit_glyphs_and_partners() {
    assert_eq!(Suit::Spades.glyph(), '♠');
    assert_eq!(Suit::Joker.glyph(), 'J');
    assert_eq!(Suit::Spades.color_partner(), Some(Suit::Clubs));
    assert_eq!(Suit::Hearts.color_partner(), Some(Suit::Diamonds));
    assert_eq!(Suit::Joker.color_partner(), None);
}
