//! Pitch trump demo.
//!
//! Builds a sample hand, cycles the trump declaration through Spades,
//! Hearts, and no trump, and prints each card's trump status along with
//! a set of rank comparisons.

#![allow(clippy::missing_docs_in_private_items)]

use pitchrs::{Card, ParseCardError, Suit};

fn main() -> Result<(), ParseCardError> {
    let mut hand = vec![
        Card::new("Ace", "Spades")?,
        Card::new("King", "Hearts")?,
        Card::new("10", "Diamonds")?,
        Card::new("Jack", "Clubs")?,
        Card::new("Jack", "Diamonds")?,
        Card::new("Big", "Joker")?,
        Card::new("4", "Clubs")?,
        Card::new("Jack", "Spades")?,
        Card::new("3", "Spades")?,
    ];

    println!("Hand of cards:");
    for card in &hand {
        println!("{card}  {:?}", card.view());
    }

    for trump in [Some(Suit::Spades), Some(Suit::Hearts), None] {
        println!("{}", "-".repeat(40));
        match trump {
            Some(suit) => println!("Trump suit: {}", suit.name()),
            None => println!("Trump suit: none"),
        }

        for card in &mut hand {
            card.set_trump(trump);
        }
        for card in &hand {
            println!("{card} is trump: {}", card.is_trump());
        }

        println!();
        println!("Comparisons:");
        compare(&hand[0], &hand[1]);
        compare(&hand[2], &hand[1]);
        compare(&hand[3], &hand[7]);
        compare(&hand[3], &hand[4]);
        compare(&hand[3], &hand[5]);
        compare(&hand[5], &hand[8]);
    }

    Ok(())
}

fn compare(a: &Card, b: &Card) {
    println!("Is {a} ({}) < {b} ({})? {}", a.desc(), b.desc(), a < b);
    println!("Is {a} ({}) > {b} ({})? {}", a.desc(), b.desc(), a > b);
}
