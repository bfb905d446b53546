use hanabi_lib::net::connection::{self, ConnectionRx, ConnectionTx};
use hanabi_lib::net::{FrameError, Message, ProtocolError};
use hanabi_lib::{ConnectionId, PlayerId};
use tokio::net::TcpStream;
use tokio::select;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::instrument;

use crate::state::{OwnedId, ServerState};
use crate::table::table_handle::TableHandle;
use crate::table::{Seating, Submission, TableError};

/// Take a socket for a newly connected client and begin serving it.
pub async fn handle_new_connection(state: ServerState, socket: TcpStream) {
    let client = match ConnectingClient::new(state, socket).handshake().await {
        Some(c) => c,
        None => return,
    };
    client.run().await;
}

/// Represents a client who just connected and still needs to be seated.
struct ConnectingClient {
    state: ServerState,
    connection_id: OwnedId<ConnectionId>,
    conn_tx: ConnectionTx,
    conn_rx: ConnectionRx,
}

impl ConnectingClient {
    fn new(state: ServerState, socket: TcpStream) -> Self {
        let connection_id = state.add_connection();
        let (conn_tx, conn_rx) = connection::from_socket(socket);
        Self {
            state,
            connection_id,
            conn_tx,
            conn_rx,
        }
    }

    #[instrument(skip_all, fields(connection_id = %self.connection_id))]
    async fn handshake(mut self) -> Option<SeatedClient> {
        match self.try_handshake().await {
            Ok((table, seating)) => Some(SeatedClient::from_connecting(self, table, seating)),
            Err(error) => {
                tracing::error!(%error);
                let _ = self.conn_tx.write_frame(Message::Error { error }).await;
                None
            }
        }
    }

    async fn try_handshake(&mut self) -> Result<(TableHandle, Seating), ProtocolError> {
        let version = match self.conn_rx.read_frame().await? {
            Some(Message::Version { version }) => version,
            Some(_) => return Err(ProtocolError::InvalidMessage),
            None => return Err(ProtocolError::Disconnected),
        };

        if version != crate::VERSION {
            return Err(ProtocolError::VersionMismatch(
                version,
                crate::VERSION.to_owned(),
            ));
        }

        self.conn_tx
            .write_frame(Message::ConnectionAccept {
                connection_id: *self.connection_id,
            })
            .await?;
        tracing::info!("New connection opened");

        let table = self.state.table().handle(*self.connection_id);
        let seating = table.join_table().await?;

        // Sent directly so it arrives ahead of anything queued in the table's outbox
        self.conn_tx
            .write_frame(Message::SeatAssigned {
                player_id: seating.player_id,
                player_count: seating.player_count,
            })
            .await?;
        Ok((table, seating))
    }
}

async fn send_task(
    mut conn_tx: ConnectionTx,
    mut table_rx: mpsc::UnboundedReceiver<Message>,
    mut local_rx: mpsc::Receiver<Message>,
) {
    loop {
        let m = select! {
            Some(m) = table_rx.recv() => m,
            Some(m) = local_rx.recv() => m,
            else => return,
        };

        if conn_tx.write_frame(m).await.is_err() {
            return;
        }
    }
}

/// Used to represent a client who holds a seat at the table.
struct SeatedClient {
    // Held so the id stays registered for as long as the client is connected
    connection_id: OwnedId<ConnectionId>,
    player_id: PlayerId,
    conn_rx: ConnectionRx,
    local_tx: mpsc::Sender<Message>,
    task_handle: JoinHandle<()>,
    table: TableHandle,
}

impl SeatedClient {
    fn from_connecting(client: ConnectingClient, table: TableHandle, seating: Seating) -> Self {
        let (tx, rx) = mpsc::channel(64);
        let task_handle = tokio::spawn(send_task(client.conn_tx, seating.outbox, rx));

        Self {
            connection_id: client.connection_id,
            player_id: seating.player_id,
            conn_rx: client.conn_rx,
            local_tx: tx,
            task_handle,
            table,
        }
    }

    /// Takes ownership of self to guarantee that client will be dropped when it's
    /// message loop ends
    #[instrument(skip_all, fields(connection_id = %self.connection_id, player_id = %self.player_id))]
    async fn run(mut self) {
        loop {
            let submission = match self.conn_rx.read_frame().await {
                Ok(Some(Message::Action(action))) => Submission::Action(action),
                Ok(Some(m)) => {
                    tracing::warn!("Expected an action, received: {m:?}");
                    Submission::Malformed
                }
                Err(FrameError::Bincode(e)) => {
                    tracing::warn!("Undecodable frame received: {e}");
                    Submission::Malformed
                }
                Ok(None) => {
                    break;
                }
                Err(e) => {
                    tracing::error!("Error reading message, Closing connection\n{e:?}");
                    break;
                }
            };

            tracing::debug!("Received submission: {submission:?}");
            let reply = match self.table.act(submission).await {
                Ok(()) => continue,
                Err(TableError::Rejected(reason)) => {
                    tracing::info!(%reason, "Action rejected");
                    Message::Invalid { reason }
                }
                Err(e) => {
                    tracing::error!("Encountered error processing action: {e:?}");
                    Message::Error { error: e.into() }
                }
            };
            if self.local_tx.send(reply).await.is_err() {
                break;
            }
        }
        tracing::info!("Player disconnected");
    }
}

impl Drop for SeatedClient {
    fn drop(&mut self) {
        // The table handle gives up our seat as it drops
        self.task_handle.abort();
    }
}
