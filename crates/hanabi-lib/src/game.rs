//! The rules of the game.
//!
//! [`GameState`] owns every card in play and is the only thing that decides whether an action is
//! legal. Each operation either fails without touching the state, or applies the whole action and
//! reports an [`Outcome`].

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::card::{Card, Color, Rank};
use crate::deck::{self, Deck};
use crate::hand::Hand;
use crate::options::{ConfigError, GameOptions};
use crate::PlayerId;

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    ColorClue { target: PlayerId, color: Color },
    RankClue { target: PlayerId, rank: Rank },
    Play { card_index: usize },
    Discard { card_index: usize },
}

impl Action {
    /// The player receiving a clue, if this action is a clue.
    pub fn target(&self) -> Option<PlayerId> {
        match *self {
            Action::ColorClue { target, .. } | Action::RankClue { target, .. } => Some(target),
            Action::Play { .. } | Action::Discard { .. } => None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A clue was given, touching `slots` of the target's hand.
    Clued { target: PlayerId, slots: Vec<usize> },
    Played { card: Card },
    /// The card could not extend its pile and was discarded instead.
    Bombed { card: Card },
    Discarded { card: Card },
}

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Players can't give clues to themselves")]
    SelfClue,
    #[error("Player {0} is not part of this game")]
    UnknownPlayer(PlayerId),
    #[error("No hint tokens remain")]
    HintsExhausted,
    #[error("Card index {index} is out of bounds for a hand of {len}")]
    InvalidCardIndex { index: usize, len: usize },
    #[error("The game is already over")]
    GameOver,
}

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum EndReason {
    /// Every pile was completed.
    Perfect,
    /// The bomb limit was reached.
    Bombed,
    /// The final round after the last draw has been played out.
    DeckExhausted,
}

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(EndReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    play_piles: BTreeMap<Color, u8>,
    discard: Vec<Card>,
    deck: Deck,
    hands: BTreeMap<PlayerId, Hand>,
    hints: u8,
    bombs: u8,
    max_hints: u8,
    max_bombs: u8,
    top_rank: u8,
    status: GameStatus,
    /// Turns left once the deck has run dry.
    final_turns: Option<usize>,
}

impl GameState {
    /// Shuffle a fresh deck for `options` and deal it.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` doesn't describe a playable game.
    pub fn new(options: &GameOptions, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        options.validate()?;
        let deck = deck::build_deck(&options.colors, &options.rank_distribution, rng);
        Self::from_deck(options, deck)
    }

    /// Deal `deck` as-is, without shuffling.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported player count or if `deck` is too small to deal.
    pub fn from_deck(options: &GameOptions, deck: Deck) -> Result<Self, ConfigError> {
        let (hands, deck) = deck::deal(deck, options.player_count)?;
        // A deal that empties the deck starts the final round straight away
        let final_turns = deck.is_empty().then_some(options.player_count);
        Ok(Self {
            play_piles: options.colors.iter().map(|&c| (c, 0)).collect(),
            discard: Vec::new(),
            deck,
            hands,
            hints: options.max_hints,
            bombs: 0,
            max_hints: options.max_hints,
            max_bombs: options.max_bombs,
            top_rank: options.top_rank(),
            status: GameStatus::InProgress,
            final_turns,
        })
    }

    pub fn play_piles(&self) -> &BTreeMap<Color, u8> {
        &self.play_piles
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn hands(&self) -> &BTreeMap<PlayerId, Hand> {
        &self.hands
    }

    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.hands.get(&player)
    }

    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    pub fn hints(&self) -> u8 {
        self.hints
    }

    pub fn bombs(&self) -> u8 {
        self.bombs
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    /// Turns remaining in the final round, once the deck is empty.
    pub fn final_turns(&self) -> Option<usize> {
        self.final_turns
    }

    pub fn score(&self) -> u32 {
        self.play_piles.values().map(|&h| u32::from(h)).sum()
    }

    /// Perform `action` on behalf of `player`.
    pub fn apply(&mut self, player: PlayerId, action: Action) -> EngineResult<Outcome> {
        match action {
            Action::ColorClue { target, color } => self.give_color_clue(player, target, color),
            Action::RankClue { target, rank } => self.give_rank_clue(player, target, rank),
            Action::Play { card_index } => self.play(player, card_index),
            Action::Discard { card_index } => self.discard(player, card_index),
        }
    }

    pub fn give_color_clue(
        &mut self,
        giver: PlayerId,
        target: PlayerId,
        color: Color,
    ) -> EngineResult<Outcome> {
        self.check_clue(giver, target)?;
        let slots = self.hand_mut(target)?.reveal_color(color);
        Ok(self.spend_hint(target, slots))
    }

    pub fn give_rank_clue(
        &mut self,
        giver: PlayerId,
        target: PlayerId,
        rank: Rank,
    ) -> EngineResult<Outcome> {
        self.check_clue(giver, target)?;
        let slots = self.hand_mut(target)?.reveal_rank(rank);
        Ok(self.spend_hint(target, slots))
    }

    /// Attempt to extend a pile with the card at `card_index`. A card that doesn't fit is
    /// discarded and costs a bomb; this is a legal move, not an error.
    pub fn play(&mut self, player: PlayerId, card_index: usize) -> EngineResult<Outcome> {
        self.ensure_in_progress()?;
        let card = self.take_card(player, card_index)?;

        let top_rank = self.top_rank;
        let pile = self.play_piles.entry(card.color).or_insert(0);
        let outcome = if *pile + 1 == card.rank.get() {
            *pile = card.rank.get();
            if *pile == top_rank {
                self.hints = self.hints.saturating_add(1).min(self.max_hints);
            }
            Outcome::Played { card }
        } else {
            self.discard.push(card);
            self.bombs += 1;
            Outcome::Bombed { card }
        };

        self.draw(player);
        self.end_turn();
        Ok(outcome)
    }

    /// Discard the card at `card_index` to regain a hint. At the hint cap the discard still goes
    /// through and the hint count stays put.
    pub fn discard(&mut self, player: PlayerId, card_index: usize) -> EngineResult<Outcome> {
        self.ensure_in_progress()?;
        let card = self.take_card(player, card_index)?;
        self.discard.push(card);
        self.hints = self.hints.saturating_add(1).min(self.max_hints);

        self.draw(player);
        self.end_turn();
        Ok(Outcome::Discarded { card })
    }

    fn ensure_in_progress(&self) -> EngineResult<()> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::Finished(_) => Err(EngineError::GameOver),
        }
    }

    fn check_clue(&self, giver: PlayerId, target: PlayerId) -> EngineResult<()> {
        if giver == target {
            return Err(EngineError::SelfClue);
        }
        self.ensure_in_progress()?;
        for player in [giver, target] {
            if !self.hands.contains_key(&player) {
                return Err(EngineError::UnknownPlayer(player));
            }
        }
        if self.hints == 0 {
            return Err(EngineError::HintsExhausted);
        }
        Ok(())
    }

    fn spend_hint(&mut self, target: PlayerId, slots: Vec<usize>) -> Outcome {
        self.hints -= 1;
        self.end_turn();
        Outcome::Clued { target, slots }
    }

    fn hand_mut(&mut self, player: PlayerId) -> EngineResult<&mut Hand> {
        self.hands
            .get_mut(&player)
            .ok_or(EngineError::UnknownPlayer(player))
    }

    fn take_card(&mut self, player: PlayerId, index: usize) -> EngineResult<Card> {
        let hand = self.hand_mut(player)?;
        let len = hand.len();
        hand.take(index)
            .ok_or(EngineError::InvalidCardIndex { index, len })
    }

    fn draw(&mut self, player: PlayerId) {
        let Some(card) = self.deck.pop_front() else {
            return;
        };
        if let Some(hand) = self.hands.get_mut(&player) {
            hand.push(card);
        }
    }

    fn end_turn(&mut self) {
        if self.bombs >= self.max_bombs {
            self.status = GameStatus::Finished(EndReason::Bombed);
            return;
        }
        let top_rank = self.top_rank;
        if self.play_piles.values().all(|&h| h == top_rank) {
            self.status = GameStatus::Finished(EndReason::Perfect);
            return;
        }

        if let Some(left) = self.final_turns {
            let left = left.saturating_sub(1);
            self.final_turns = Some(left);
            if left == 0 {
                self.status = GameStatus::Finished(EndReason::DeckExhausted);
            }
        } else if self.deck.is_empty() {
            // Everyone, including whoever drew the last card, gets one more turn
            self.final_turns = Some(self.hands.len());
            tracing::debug!("Deck exhausted, starting the final round");
        }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{Action, EndReason, EngineError, GameState, GameStatus, Outcome};
    use crate::card::{Card, Color, Rank};
    use crate::deck::{self, Deck};
    use crate::options::GameOptions;
    use crate::PlayerId;

    pub(crate) fn card(color: Color, rank: u8) -> Card {
        Card::new(color, Rank::new(rank).unwrap())
    }

    /// A deck whose first cards are `front`, followed by the rest of a seeded deck.
    pub(crate) fn stacked(front: &[Card]) -> Deck {
        let options = GameOptions::default();
        let filler = deck::build_deck(
            &options.colors,
            &options.rank_distribution,
            &mut StdRng::seed_from_u64(0),
        );
        front.iter().copied().chain(filler).take(50).collect()
    }

    /// P1 is dealt R1 B3 G1 W2 Y5 and P2 R2 R1 B1 G2 Y1, with W4 on top of the rest.
    fn two_player_deck() -> Deck {
        let front = [
            card(Color::Red, 1),
            card(Color::Blue, 3),
            card(Color::Green, 1),
            card(Color::White, 2),
            card(Color::Yellow, 5),
            card(Color::Red, 2),
            card(Color::Red, 1),
            card(Color::Blue, 1),
            card(Color::Green, 2),
            card(Color::Yellow, 1),
            card(Color::White, 4),
        ];
        stacked(&front)
    }

    /// Two player game where P1 holds R1 B3 G1 W2 Y5 and P2 holds R2 R1 B1 G2 Y1.
    pub(crate) fn two_player() -> GameState {
        GameState::from_deck(&GameOptions::default(), two_player_deck()).unwrap()
    }

    const P1: PlayerId = PlayerId(1);
    const P2: PlayerId = PlayerId(2);

    #[test]
    fn new_game() {
        let game = GameState::new(&GameOptions::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(game.player_count(), 2);
        assert_eq!(game.deck_len(), 40);
        assert_eq!(game.hints(), 8);
        assert_eq!(game.bombs(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.play_piles().len(), 5);
        assert!(game.play_piles().values().all(|&h| h == 0));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn play_legal_card() {
        let mut game = two_player();
        let outcome = game.play(P1, 0).unwrap();

        assert_eq!(
            outcome,
            Outcome::Played {
                card: card(Color::Red, 1)
            }
        );
        assert_eq!(game.play_piles()[&Color::Red], 1);
        let hand = game.hand(P1).unwrap();
        assert_eq!(hand.len(), 5);
        // The replacement is drawn to the end of the hand
        assert_eq!(hand.cards()[4], card(Color::White, 4));
        assert!(hand.info()[4].is_unknown());
        assert_eq!(game.deck_len(), 39);
        assert_eq!(game.bombs(), 0);
    }

    #[test]
    fn play_illegal_card_bombs() {
        let mut game = two_player();
        let outcome = game.play(P1, 1).unwrap();

        assert_eq!(
            outcome,
            Outcome::Bombed {
                card: card(Color::Blue, 3)
            }
        );
        assert_eq!(game.bombs(), 1);
        assert_eq!(game.play_piles()[&Color::Blue], 0);
        assert_eq!(game.discard_pile(), &[card(Color::Blue, 3)]);
        assert_eq!(game.hand(P1).unwrap().len(), 5);
    }

    #[test]
    fn play_invalid_index() {
        let mut game = two_player();
        let before = game.clone();
        assert_eq!(
            game.play(P1, 5),
            Err(EngineError::InvalidCardIndex { index: 5, len: 5 })
        );
        assert_eq!(
            game.discard(P1, 99),
            Err(EngineError::InvalidCardIndex { index: 99, len: 5 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn color_clue() {
        let mut game = two_player();
        let outcome = game.give_color_clue(P1, P2, Color::Red).unwrap();

        assert_eq!(
            outcome,
            Outcome::Clued {
                target: P2,
                slots: vec![0, 1]
            }
        );
        assert_eq!(game.hints(), 7);
        let info = game.hand(P2).unwrap().info();
        assert_eq!(info[0].color, Some(Color::Red));
        assert_eq!(info[0].rank, None);
        assert_eq!(info[1].color, Some(Color::Red));
        assert!(info[2].is_unknown());
    }

    #[test]
    fn rank_clue() {
        let mut game = two_player();
        let one = Rank::new(1).unwrap();
        let outcome = game.give_rank_clue(P2, P1, one).unwrap();

        assert_eq!(
            outcome,
            Outcome::Clued {
                target: P1,
                slots: vec![0, 2]
            }
        );
        let info = game.hand(P1).unwrap().info();
        assert_eq!(info[0].rank, Some(one));
        assert_eq!(info[0].color, None);
        assert_eq!(info[2].rank, Some(one));
        assert!(info[1].is_unknown());
    }

    #[test]
    fn empty_clue_still_costs_a_hint() {
        let mut game = two_player();
        let outcome = game.give_color_clue(P1, P2, Color::White).unwrap();
        assert_eq!(
            outcome,
            Outcome::Clued {
                target: P2,
                slots: vec![]
            }
        );
        assert_eq!(game.hints(), 7);
    }

    #[test]
    fn self_clue_rejected() {
        let mut game = two_player();
        let before = game.clone();
        assert_eq!(
            game.give_color_clue(P1, P1, Color::Red),
            Err(EngineError::SelfClue)
        );
        assert_eq!(
            game.give_rank_clue(P2, P2, Rank::new(2).unwrap()),
            Err(EngineError::SelfClue)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn clue_unknown_player() {
        let mut game = two_player();
        assert_eq!(
            game.give_color_clue(P1, PlayerId(5), Color::Red),
            Err(EngineError::UnknownPlayer(PlayerId(5)))
        );
    }

    #[test]
    fn hints_exhausted() {
        let mut game = two_player();
        for _ in 0..8 {
            game.give_color_clue(P1, P2, Color::Red).unwrap();
        }
        assert_eq!(game.hints(), 0);

        let before = game.clone();
        assert_eq!(
            game.give_color_clue(P1, P2, Color::Red),
            Err(EngineError::HintsExhausted)
        );
        assert_eq!(
            game.give_rank_clue(P2, P1, Rank::new(1).unwrap()),
            Err(EngineError::HintsExhausted)
        );
        assert_eq!(game.hints(), 0);
        assert_eq!(game, before);
    }

    #[test]
    fn discard_regains_hint() {
        let mut game = two_player();
        game.give_color_clue(P1, P2, Color::Red).unwrap();
        let outcome = game.discard(P2, 3).unwrap();

        assert_eq!(
            outcome,
            Outcome::Discarded {
                card: card(Color::Green, 2)
            }
        );
        assert_eq!(game.hints(), 8);
        assert_eq!(game.discard_pile(), &[card(Color::Green, 2)]);
        assert_eq!(game.hand(P2).unwrap().len(), 5);
    }

    #[test]
    fn discard_at_cap_saturates() {
        let mut game = two_player();
        assert_eq!(game.hints(), 8);
        assert!(game.discard(P1, 0).is_ok());
        assert_eq!(game.hints(), 8);
    }

    #[test]
    fn completing_a_pile_returns_a_hint() {
        let options = GameOptions {
            colors: vec![Color::Red, Color::Blue],
            ..Default::default()
        };
        let front = [
            card(Color::Red, 1),
            card(Color::Red, 2),
            card(Color::Red, 3),
            card(Color::Red, 4),
            card(Color::Red, 5),
        ];
        let mut game = GameState::from_deck(&options, stacked(&front)).unwrap();
        game.give_color_clue(P1, P2, Color::Red).unwrap();
        assert_eq!(game.hints(), 7);

        for _ in 0..5 {
            // The hand shifts down after every play so the next card is always first
            assert!(matches!(game.play(P1, 0), Ok(Outcome::Played { .. })));
        }
        assert_eq!(game.play_piles()[&Color::Red], 5);
        assert_eq!(game.hints(), 8);
        assert_eq!(game.score(), 5);
    }

    #[test]
    fn perfect_game_ends() {
        let options = GameOptions {
            colors: vec![Color::Green],
            rank_distribution: (1..=5)
                .cycle()
                .take(15)
                .map(|r| Rank::new(r).unwrap())
                .collect(),
            ..Default::default()
        };
        let mut game = GameState::from_deck(&options, options_deck(&options)).unwrap();
        for _ in 0..5 {
            game.play(P1, 0).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Finished(EndReason::Perfect));
        assert_eq!(game.score(), options.perfect_score());
        assert_eq!(game.play(P2, 0), Err(EngineError::GameOver));
    }

    fn options_deck(options: &GameOptions) -> Deck {
        options
            .colors
            .iter()
            .flat_map(|&c| options.rank_distribution.iter().map(move |&r| Card::new(c, r)))
            .collect()
    }

    #[test]
    fn three_bombs_ends_game() {
        let mut game = two_player();
        // B3, W2 and Y5 all bomb on empty piles
        game.play(P1, 1).unwrap();
        game.play(P1, 2).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        game.play(P1, 2).unwrap();

        assert_eq!(game.bombs(), 3);
        assert_eq!(game.status(), GameStatus::Finished(EndReason::Bombed));
        assert!(game.is_over());

        let before = game.clone();
        assert_eq!(game.discard(P2, 0), Err(EngineError::GameOver));
        assert_eq!(
            game.give_color_clue(P2, P1, Color::Red),
            Err(EngineError::GameOver)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn final_round_after_last_draw() {
        let options = GameOptions {
            player_count: 3,
            colors: vec![Color::White],
            rank_distribution: vec![Rank::new(1).unwrap(); 16],
            max_bombs: 10,
            ..Default::default()
        };
        let mut game = GameState::from_deck(&options, options_deck(&options)).unwrap();
        assert_eq!(game.deck_len(), 1);

        // P1 draws the last card, then everyone gets one more turn
        game.discard(PlayerId(1), 0).unwrap();
        assert_eq!(game.deck_len(), 0);
        assert_eq!(game.final_turns(), Some(3));

        game.discard(PlayerId(2), 0).unwrap();
        assert_eq!(game.hand(PlayerId(2)).unwrap().len(), 4);
        game.discard(PlayerId(3), 0).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        game.discard(PlayerId(1), 0).unwrap();
        assert_eq!(game.status(), GameStatus::Finished(EndReason::DeckExhausted));
    }

    #[test]
    fn final_round_when_deal_empties_deck() {
        let options = GameOptions {
            colors: vec![Color::Red],
            ..Default::default()
        };
        let mut game = GameState::from_deck(&options, options_deck(&options)).unwrap();
        assert_eq!(game.deck_len(), 0);
        assert_eq!(game.final_turns(), Some(2));

        game.discard(P1, 0).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        game.discard(P2, 0).unwrap();
        assert_eq!(game.status(), GameStatus::Finished(EndReason::DeckExhausted));
        assert_eq!(game.discard(P1, 0), Err(EngineError::GameOver));
    }

    #[test]
    fn hint_cap_at_u8_max() {
        let options = GameOptions {
            max_hints: u8::MAX,
            ..Default::default()
        };
        assert_eq!(options.validate(), Ok(()));
        let mut game = GameState::from_deck(&options, two_player_deck()).unwrap();
        assert_eq!(game.hints(), u8::MAX);

        assert!(game.discard(P1, 1).is_ok());
        assert_eq!(game.hints(), u8::MAX);
    }

    #[test]
    fn apply_dispatches() {
        let mut game = two_player();
        let action = Action::RankClue {
            target: P2,
            rank: Rank::new(1).unwrap(),
        };
        assert!(matches!(
            game.apply(P1, action),
            Ok(Outcome::Clued { target: P2, .. })
        ));
        assert!(matches!(
            game.apply(P2, Action::Play { card_index: 4 }),
            Ok(Outcome::Played { .. })
        ));
        assert!(matches!(
            game.apply(P1, Action::Discard { card_index: 0 }),
            Ok(Outcome::Discarded { .. })
        ));
        assert_eq!(game.play_piles()[&Color::Yellow], 1);
    }

    pub(crate) fn any_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (1u32..=6, 0usize..5).prop_map(|(t, c)| Action::ColorClue {
                target: PlayerId(t),
                color: Color::ALL[c],
            }),
            (1u32..=6, 1u8..=5).prop_map(|(t, r)| Action::RankClue {
                target: PlayerId(t),
                rank: Rank::new(r).unwrap(),
            }),
            (0usize..6).prop_map(|card_index| Action::Play { card_index }),
            (0usize..6).prop_map(|card_index| Action::Discard { card_index }),
        ]
    }

    fn total_cards(game: &GameState) -> usize {
        game.deck_len()
            + game.discard_pile().len()
            + game.hands().values().map(|h| h.len()).sum::<usize>()
            + game.play_piles().values().map(|&h| usize::from(h)).sum::<usize>()
    }

    proptest! {
        #[test]
        fn invariants_hold(
            seed in any::<u64>(),
            players in 2usize..=6,
            actions in prop::collection::vec(any_action(), 0..150),
        ) {
            let options = GameOptions::with_players(players);
            let mut game = GameState::new(&options, &mut StdRng::seed_from_u64(seed)).unwrap();
            let mut turn = 0;

            for action in actions {
                let player = PlayerId::from_seat(turn);
                let before = game.clone();
                match game.apply(player, action) {
                    Ok(outcome) => {
                        turn = (turn + 1) % players;
                        for (color, &height) in game.play_piles() {
                            let old = before.play_piles()[color];
                            let played = matches!(outcome, Outcome::Played { card } if card.color == *color);
                            prop_assert_eq!(height, if played { old + 1 } else { old });
                        }
                        let bombed = matches!(outcome, Outcome::Bombed { .. });
                        prop_assert_eq!(game.bombs(), before.bombs() + u8::from(bombed));
                    }
                    Err(_) => prop_assert_eq!(&game, &before),
                }

                for hand in game.hands().values() {
                    prop_assert_eq!(hand.cards().len(), hand.info().len());
                }
                prop_assert!(game.hints() <= 8);
                prop_assert!(game.bombs() <= 3);
                prop_assert_eq!(total_cards(&game), 50);
            }
        }
    }
}
