//! Per-player views of a [`GameState`].
//!
//! In Hanabi you hold your cards facing away from you. A [`Projection`] therefore shows a
//! recipient every other hand in full, but only the clue overlay of their own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Color, Info};
use crate::game::{Action, GameState, GameStatus, Outcome};
use crate::PlayerId;

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum ProjectionTag {
    /// The recipient is expected to act next.
    Turn,
    Info,
}

/// One card slot as seen by the recipient. `card` is `None` for the recipient's own cards.
#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub card: Option<Card>,
    pub info: Info,
}

pub type HandView = Vec<SlotView>;

/// The most recently accepted action and what came of it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub action: Action,
    pub outcome: Outcome,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Projection {
    pub tag: ProjectionTag,
    pub play_piles: BTreeMap<Color, u8>,
    pub discard_pile: Vec<Card>,
    pub deck_count: usize,
    pub hands: BTreeMap<PlayerId, HandView>,
    pub hints: u8,
    pub bombs: u8,
    pub current_player: Option<PlayerId>,
    pub last_turn: Option<TurnRecord>,
    pub status: GameStatus,
}

impl Projection {
    /// Build the view of `game` that `recipient` is allowed to see.
    ///
    /// `on_turn` is the player whose action is expected next, if any.
    pub fn new(
        game: &GameState,
        recipient: PlayerId,
        on_turn: Option<PlayerId>,
        last_turn: Option<&TurnRecord>,
    ) -> Self {
        let hands = game
            .hands()
            .iter()
            .map(|(&owner, hand)| {
                let view = hand
                    .cards()
                    .iter()
                    .zip(hand.info())
                    .map(|(&card, &info)| SlotView {
                        card: (owner != recipient).then_some(card),
                        info,
                    })
                    .collect();
                (owner, view)
            })
            .collect();

        Self {
            tag: if on_turn == Some(recipient) {
                ProjectionTag::Turn
            } else {
                ProjectionTag::Info
            },
            play_piles: game.play_piles().clone(),
            discard_pile: game.discard_pile().to_vec(),
            deck_count: game.deck_len(),
            hands,
            hints: game.hints(),
            bombs: game.bombs(),
            current_player: on_turn,
            last_turn: last_turn.cloned(),
            status: game.status(),
        }
    }
}
