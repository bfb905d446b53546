use serde::{Deserialize, Serialize};

use crate::game::{Action, EndReason};
use crate::projection::Projection;
use crate::{ConnectionId, PlayerId};

use super::{ProtocolError, RejectReason};

// TODO: Split into separate client and server message types
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub enum Message {
    Error { error: ProtocolError },
    Version { version: String },
    ConnectionAccept { connection_id: ConnectionId },
    SeatAssigned { player_id: PlayerId, player_count: usize },
    Action(Action),
    Projection(Box<Projection>),
    Invalid { reason: RejectReason },
    PlayerDeparted { player_id: PlayerId },
    GameEnd { reason: EndReason, score: u32 },
}

impl From<Action> for Message {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Projection> for Message {
    fn from(projection: Projection) -> Self {
        Self::Projection(Box::new(projection))
    }
}
