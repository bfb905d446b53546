use anyhow::Context;
use hanabi_lib::card::{Color, Rank};
use hanabi_lib::options::GameOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const DEFAULT_PORT: u16 = 42933;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub options: GameOptions,
    /// Fixes the shuffle when set.
    pub seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from whatever `var` returns for each setting. Unset settings keep their
    /// defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match var("PORT") {
            Some(p) => p.parse().with_context(|| format!("Invalid PORT '{p}'"))?,
            None => DEFAULT_PORT,
        };

        let mut options = GameOptions::default();
        if let Some(players) = var("HANABI_PLAYERS") {
            options.player_count = players
                .parse()
                .with_context(|| format!("Invalid HANABI_PLAYERS '{players}'"))?;
        }
        if let Some(colors) = var("HANABI_COLORS") {
            options.colors = colors
                .split(',')
                .map(str::parse::<Color>)
                .collect::<Result<_, _>>()
                .context("Invalid HANABI_COLORS")?;
        }
        if let Some(ranks) = var("HANABI_RANKS") {
            options.rank_distribution = ranks
                .split(',')
                .map(|r| -> anyhow::Result<Rank> {
                    let value = r.trim().parse::<u8>()?;
                    Ok(Rank::new(value)?)
                })
                .collect::<anyhow::Result<_>>()
                .context("Invalid HANABI_RANKS")?;
        }
        options.validate().context("Invalid game options")?;

        let seed = var("HANABI_SEED")
            .map(|s| s.parse::<u64>())
            .transpose()
            .context("Invalid HANABI_SEED")?;

        Ok(Self {
            port,
            options,
            seed,
        })
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
