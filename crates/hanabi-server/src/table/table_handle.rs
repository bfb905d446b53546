use hanabi_lib::ConnectionId;
use tokio::sync::{mpsc, oneshot};

use super::table_actor::{Seating, TableAction};
use super::{Submission, TableError, TableResult};

#[derive(Clone, Debug)]
pub struct TableHandleProvider {
    pub(crate) sender: mpsc::Sender<TableAction>,
}

impl TableHandleProvider {
    pub fn handle(&self, conn: impl Into<ConnectionId>) -> TableHandle {
        TableHandle {
            sender: self.sender.clone(),
            conn: conn.into(),
        }
    }

    /// Resolves once the table has shut down.
    pub async fn closed(&self) {
        self.sender.closed().await
    }
}

/// A single connection's line to the table. Dropping it gives up that connection's seat.
#[derive(Debug)]
pub struct TableHandle {
    pub(super) sender: mpsc::Sender<TableAction>,
    pub(super) conn: ConnectionId,
}

impl TableHandle {
    async fn execute<T>(
        &self,
        msg: TableAction,
        rx: oneshot::Receiver<Result<T, TableError>>,
    ) -> Result<T, TableError> {
        // Ignore first error, if there is an error, rx.await will fail as well since it's sender
        // will have been dropped
        let _ = self.sender.send(msg).await;
        rx.await.unwrap_or(Err(TableError::HandleInvalid))
    }

    pub async fn join_table(&self) -> TableResult<Seating> {
        let (tx, rx) = oneshot::channel();
        let msg = TableAction::Join {
            respond_to: tx,
            conn: self.conn,
        };
        self.execute(msg, rx).await
    }

    pub async fn act(&self, submission: impl Into<Submission>) -> TableResult<()> {
        let (tx, rx) = oneshot::channel();
        let msg = TableAction::Act {
            respond_to: tx,
            conn: self.conn,
            submission: submission.into(),
        };
        self.execute(msg, rx).await
    }
}

impl Drop for TableHandle {
    fn drop(&mut self) {
        let tx = self.sender.clone();
        let conn = self.conn;
        tokio::spawn(async move {
            if let Err(e) = tx.send(TableAction::Leave { conn }).await {
                tracing::warn!(%e, "Failed to remove player from their table.");
            }
        });
    }
}
