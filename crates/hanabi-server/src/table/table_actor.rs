use std::collections::BTreeMap;

use hanabi_lib::game::{GameState, GameStatus};
use hanabi_lib::net::{Message, RejectReason};
use hanabi_lib::options::{ConfigError, GameOptions};
use hanabi_lib::projection::{Projection, TurnRecord};
use hanabi_lib::{ConnectionId, PlayerId};
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

use super::{Submission, TableError, TableResult};

/// Referee for a single game.
///
/// The actor is the only owner of the [`GameState`] and of the turn pointer. Every request from
/// every client passes through its one inbox and is fully validated, applied and dispatched before
/// the next one is looked at, so at most one action is ever in flight. Actions sent out of turn
/// are rejected immediately rather than queued.
///
/// There is no turn timer. A player who never acts holds up the table until they disconnect,
/// which abandons the game.
pub struct TableActor {
    receiver: mpsc::Receiver<TableAction>,
    options: GameOptions,
    seats: BTreeMap<PlayerId, Seat>,
    phase: TablePhase,
    game: GameState,
    /// Seat index of the player expected to act next.
    turn: usize,
    last_turn: Option<TurnRecord>,
}

#[derive(Debug)]
pub enum TableAction {
    Join {
        respond_to: oneshot::Sender<TableResult<Seating>>,
        conn: ConnectionId,
    },
    Leave {
        conn: ConnectionId,
    },
    Act {
        respond_to: oneshot::Sender<TableResult<()>>,
        conn: ConnectionId,
        submission: Submission,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TablePhase {
    Seating,
    Playing,
    Finished,
    /// A player left mid-game.
    Abandoned,
}

/// Handed to a client once they've been given a seat.
#[derive(Debug)]
pub struct Seating {
    pub player_id: PlayerId,
    pub player_count: usize,
    /// Every message the table sends to this player.
    pub outbox: mpsc::UnboundedReceiver<Message>,
}

#[derive(Debug)]
struct Seat {
    conn: ConnectionId,
    outbox: mpsc::UnboundedSender<Message>,
}

impl Seat {
    fn send(&self, msg: Message) {
        if self.outbox.send(msg).is_err() {
            tracing::warn!(conn = %self.conn, "Dropped message for a disconnected player");
        }
    }
}

impl TableActor {
    pub fn new(
        receiver: mpsc::Receiver<TableAction>,
        options: GameOptions,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        let game = GameState::new(&options, &mut rng)?;
        Ok(Self {
            receiver,
            options,
            seats: BTreeMap::new(),
            phase: TablePhase::Seating,
            game,
            turn: 0,
            last_turn: None,
        })
    }

    #[instrument(skip_all)]
    pub async fn run(mut self) {
        tracing::info!(players = self.options.player_count, "Table opened");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TableAction::Join { respond_to, conn } => {
                    let _ = respond_to.send(self.add_player(conn));
                }
                TableAction::Leave { conn } => self.rem_player(conn),
                TableAction::Act {
                    respond_to,
                    conn,
                    submission,
                } => {
                    let _ = respond_to.send(self.take_turn(conn, submission));
                }
            }
        }
        tracing::info!("Closing table");
    }

    fn on_turn(&self) -> Option<PlayerId> {
        (self.phase == TablePhase::Playing).then(|| PlayerId::from_seat(self.turn))
    }

    /// Send every seated player their own view of the game.
    fn dispatch(&self) {
        let on_turn = self.on_turn();
        for (&player_id, seat) in &self.seats {
            let projection =
                Projection::new(&self.game, player_id, on_turn, self.last_turn.as_ref());
            seat.send(projection.into());
        }
    }

    fn broadcast(&self, msg: &Message) {
        for seat in self.seats.values() {
            seat.send(msg.clone());
        }
    }
}

// ----------------------------------------------------------------------------
// Message Handlers
// ----------------------------------------------------------------------------
impl TableActor {
    /// Seats a new player in the lowest free seat. Once every seat is filled the game begins.
    ///
    /// # Errors
    ///
    /// Fails once the game has started or if `conn` is already seated.
    #[instrument(skip(self))]
    fn add_player(&mut self, conn: ConnectionId) -> TableResult<Seating> {
        if self.phase != TablePhase::Seating {
            return Err(TableError::GameStarted);
        }
        if self.seats.values().any(|s| s.conn == conn) {
            return Err(TableError::AlreadySeated(conn));
        }

        let player_count = self.options.player_count;
        let player_id = (0..player_count)
            .map(PlayerId::from_seat)
            .find(|id| !self.seats.contains_key(id))
            .ok_or(TableError::TableFull)?;

        let (outbox, receiver) = mpsc::unbounded_channel();
        self.seats.insert(player_id, Seat { conn, outbox });
        tracing::info!("Connection seated as {player_id}");

        if self.seats.len() == player_count {
            self.start_game();
        }

        Ok(Seating {
            player_id,
            player_count,
            outbox: receiver,
        })
    }

    fn start_game(&mut self) {
        self.phase = TablePhase::Playing;
        self.turn = 0;
        tracing::info!("All seats filled, starting game");
        self.dispatch();
    }

    /// Frees the seat held by `conn`. Leaving mid-game abandons it for everyone.
    #[instrument(skip(self))]
    fn rem_player(&mut self, conn: ConnectionId) {
        let Some(player_id) = self
            .seats
            .iter()
            .find(|(_, seat)| seat.conn == conn)
            .map(|(&id, _)| id)
        else {
            tracing::debug!("Connection left without a seat");
            return;
        };
        self.seats.remove(&player_id);
        tracing::info!("{player_id} left the table");

        if self.phase == TablePhase::Playing {
            self.phase = TablePhase::Abandoned;
            tracing::warn!("Game abandoned after {player_id} disconnected");
            self.broadcast(&Message::PlayerDeparted { player_id });
        }

        // Nothing is left to do once the game is over and everyone has gone.
        // Closing the receiver lets the run loop drain and exit.
        if self.seats.is_empty()
            && matches!(self.phase, TablePhase::Finished | TablePhase::Abandoned)
        {
            self.receiver.close();
        }
    }

    /// Validate and apply one action. A rejection leaves the game and turn pointer untouched.
    #[instrument(skip(self, submission))]
    fn take_turn(&mut self, conn: ConnectionId, submission: Submission) -> TableResult<()> {
        match self.phase {
            TablePhase::Playing => {}
            TablePhase::Seating => return Err(RejectReason::GameNotStarted.into()),
            TablePhase::Finished | TablePhase::Abandoned => {
                return Err(RejectReason::GameOver.into())
            }
        }

        let player = PlayerId::from_seat(self.turn);
        if self.seats.get(&player).map(|s| s.conn) != Some(conn) {
            return Err(RejectReason::NotYourTurn.into());
        }

        let Submission::Action(action) = submission else {
            return Err(RejectReason::MalformedAction.into());
        };
        if let Some(target) = action.target() {
            if target == player {
                return Err(RejectReason::SelfClue.into());
            }
            if self.game.hand(target).is_none() {
                return Err(RejectReason::MalformedAction.into());
            }
        }

        let outcome = self
            .game
            .apply(player, action)
            .map_err(RejectReason::from)?;
        tracing::info!(?action, ?outcome, "{player} took their turn");

        self.last_turn = Some(TurnRecord {
            player,
            action,
            outcome,
        });
        self.turn = (self.turn + 1) % self.options.player_count;

        let status = self.game.status();
        if let GameStatus::Finished(reason) = status {
            self.phase = TablePhase::Finished;
            self.dispatch();
            let score = self.game.score();
            tracing::info!(
                ?reason,
                score,
                perfect = self.options.perfect_score(),
                "Game over"
            );
            self.broadcast(&Message::GameEnd { reason, score });
        } else {
            self.dispatch();
        }
        Ok(())
    }
}
