use hanabi_lib::game::Action;
use hanabi_lib::net::{ProtocolError, RejectReason};
use hanabi_lib::options::{ConfigError, GameOptions};
use hanabi_lib::ConnectionId;
use rand::rngs::StdRng;
use thiserror::Error;
use tokio::sync::mpsc;

use self::{table_actor::TableActor, table_handle::TableHandleProvider};

mod table_actor;
pub mod table_handle;

pub use table_actor::Seating;

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Attempted to seat a player at a full table")]
    TableFull,
    #[error("The game at this table has already started")]
    GameStarted,
    #[error("Connection {0} already has a seat")]
    AlreadySeated(ConnectionId),
    #[error(transparent)]
    Rejected(#[from] RejectReason),
    #[error("The Table Handle is no longer connected to a table.")]
    HandleInvalid,
}

impl From<TableError> for ProtocolError {
    fn from(v: TableError) -> Self {
        Self::Message(v.to_string())
    }
}

pub type TableResult<T> = Result<T, TableError>;

/// What a client sent in place of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Action(Action),
    /// The frame didn't decode into an [`Action`].
    Malformed,
}

impl From<Action> for Submission {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

/// Deal a game for `options` and spawn the actor that will referee it.
///
/// # Errors
///
/// Returns an error when `options` don't describe a playable game.
pub fn start_new_table(
    options: GameOptions,
    rng: StdRng,
) -> Result<TableHandleProvider, ConfigError> {
    let (sender, receiver) = mpsc::channel(64);
    let actor = TableActor::new(receiver, options, rng)?;
    tokio::spawn(actor.run());

    Ok(TableHandleProvider { sender })
}
