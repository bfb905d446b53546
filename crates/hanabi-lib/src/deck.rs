use std::collections::{BTreeMap, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{Card, Color, Rank};
use crate::hand::Hand;
use crate::options::ConfigError;
use crate::PlayerId;

/// Undealt cards. Draws come off the front.
pub type Deck = VecDeque<Card>;

/// Every color paired with every entry of `ranks`, in random order.
pub fn build_deck(colors: &[Color], ranks: &[Rank], rng: &mut impl Rng) -> Deck {
    let mut cards: Vec<Card> = colors
        .iter()
        .flat_map(|&color| ranks.iter().map(move |&rank| Card::new(color, rank)))
        .collect();
    cards.shuffle(rng);
    cards.into()
}

/// # Errors
///
/// Returns [`ConfigError::PlayerCount`] for player counts outside of `2..=6`.
pub fn cards_per_hand(player_count: usize) -> Result<usize, ConfigError> {
    match player_count {
        2 | 3 => Ok(5),
        4 | 5 => Ok(4),
        6 => Ok(3),
        n => Err(ConfigError::PlayerCount(n)),
    }
}

/// Deal a contiguous chunk off the front of `deck` to each of players `1..=player_count`.
///
/// # Errors
///
/// Fails for an unsupported player count or when `deck` can't cover every hand.
pub fn deal(
    mut deck: Deck,
    player_count: usize,
) -> Result<(BTreeMap<PlayerId, Hand>, Deck), ConfigError> {
    let hand_size = cards_per_hand(player_count)?;
    let needed = hand_size * player_count;
    if deck.len() < needed {
        return Err(ConfigError::DeckTooSmall {
            deck: deck.len(),
            needed,
        });
    }

    let hands = (0..player_count)
        .map(|seat| {
            let cards = deck.drain(..hand_size).collect();
            (PlayerId::from_seat(seat), Hand::new(cards))
        })
        .collect();
    Ok((hands, deck))
}
