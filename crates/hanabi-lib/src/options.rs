use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::card::{Color, Rank};
use crate::deck::cards_per_hand;

/// Canonical count of each rank per color.
pub const RANK_DISTRIBUTION: [u8; 10] = [1, 1, 1, 2, 2, 3, 3, 4, 4, 5];
pub const MAX_HINTS: u8 = 8;
pub const MAX_BOMBS: u8 = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Player count {0} is not supported, expected {min}..={max}", min = crate::MIN_PLAYERS, max = crate::MAX_PLAYERS)]
    PlayerCount(usize),
    #[error("The color palette is empty")]
    EmptyPalette,
    #[error("Color {0} appears more than once in the palette")]
    DuplicateColor(Color),
    #[error("The rank distribution is empty")]
    EmptyRanks,
    #[error("A deck of {deck} cards cannot deal {needed} cards")]
    DeckTooSmall { deck: usize, needed: usize },
    #[error("Max hints must be at least 1")]
    NoHints,
    #[error("Max bombs must be at least 1")]
    NoBombs,
}

/// Everything about a game that is decided before the first card is dealt.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GameOptions {
    pub player_count: usize,
    pub colors: Vec<Color>,
    pub rank_distribution: Vec<Rank>,
    pub max_hints: u8,
    pub max_bombs: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_count: 2,
            colors: Color::ALL.to_vec(),
            rank_distribution: RANK_DISTRIBUTION
                .into_iter()
                .filter_map(|r| Rank::new(r).ok())
                .collect(),
            max_hints: MAX_HINTS,
            max_bombs: MAX_BOMBS,
        }
    }
}

impl GameOptions {
    pub fn with_players(player_count: usize) -> Self {
        Self {
            player_count,
            ..Default::default()
        }
    }

    pub fn deck_size(&self) -> usize {
        self.colors.len() * self.rank_distribution.len()
    }

    /// Height at which a pile is complete.
    pub fn top_rank(&self) -> u8 {
        self.rank_distribution
            .iter()
            .map(|r| r.get())
            .max()
            .unwrap_or(Rank::MAX)
    }

    /// Best score reachable with these options.
    pub fn perfect_score(&self) -> u32 {
        self.colors.len() as u32 * u32::from(self.top_rank())
    }

    /// # Errors
    ///
    /// Returns the first problem that would prevent a game from being dealt with these options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hand_size = cards_per_hand(self.player_count)?;
        if self.colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let mut seen = BTreeSet::new();
        if let Some(&dup) = self.colors.iter().find(|&&c| !seen.insert(c)) {
            return Err(ConfigError::DuplicateColor(dup));
        }
        if self.rank_distribution.is_empty() {
            return Err(ConfigError::EmptyRanks);
        }
        if self.max_hints == 0 {
            return Err(ConfigError::NoHints);
        }
        if self.max_bombs == 0 {
            return Err(ConfigError::NoBombs);
        }

        let needed = hand_size * self.player_count;
        if self.deck_size() < needed {
            return Err(ConfigError::DeckTooSmall {
                deck: self.deck_size(),
                needed,
            });
        }
        Ok(())
    }
}
