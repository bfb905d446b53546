use serde::{Deserialize, Serialize};

use crate::card::{Card, Color, Info, Rank};

/// A player's cards along with what they've been told about each of them.
///
/// `info[i]` always describes `cards[i]`, the two are only ever modified together.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
    info: Vec<Info>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        let info = vec![Info::default(); cards.len()];
        Self { cards, info }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn info(&self) -> &[Info] {
        &self.info
    }

    /// Adds a freshly drawn card to the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.info.push(Info::default());
    }

    /// Removes the card at `index` along with its info slot.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        if index >= self.cards.len() {
            return None;
        }
        self.info.remove(index);
        Some(self.cards.remove(index))
    }

    /// Reveal `color` on every matching card. Returns the touched slots.
    pub fn reveal_color(&mut self, color: Color) -> Vec<usize> {
        self.reveal(|card| card.color == color, |info| info.color = Some(color))
    }

    /// Reveal `rank` on every matching card. Returns the touched slots.
    pub fn reveal_rank(&mut self, rank: Rank) -> Vec<usize> {
        self.reveal(|card| card.rank == rank, |info| info.rank = Some(rank))
    }

    fn reveal(
        &mut self,
        matches: impl Fn(&Card) -> bool,
        update: impl Fn(&mut Info),
    ) -> Vec<usize> {
        let mut touched = Vec::new();
        for (i, (card, info)) in self.cards.iter().zip(self.info.iter_mut()).enumerate() {
            if matches(card) {
                update(info);
                touched.push(i);
            }
        }
        touched
    }
}
