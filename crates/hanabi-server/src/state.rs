use hanabi_lib::ConnectionId;
use rand::{thread_rng, Rng};
use std::collections::HashSet;
use std::fmt::Display;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::table::table_handle::TableHandleProvider;

#[derive(Clone, Debug)]
pub struct ServerState {
    connections: Arc<Mutex<HashSet<ConnectionId>>>,
    table: TableHandleProvider,
}

impl ServerState {
    pub fn new(table: TableHandleProvider) -> Self {
        Self {
            connections: Default::default(),
            table,
        }
    }

    /// Register a newly accepted socket under a fresh [`ConnectionId`].
    ///
    /// The id is released when the returned [`OwnedId`] is dropped.
    pub fn add_connection(&self) -> OwnedId<ConnectionId> {
        let mut connections = self.connections();
        let connection_id = loop {
            let id = thread_rng().gen::<u32>().into();
            if connections.insert(id) {
                break id;
            }
        };
        OwnedId::<ConnectionId>::new(self.clone(), connection_id)
    }

    pub fn table(&self) -> &TableHandleProvider {
        &self.table
    }

    pub fn connection_count(&self) -> usize {
        self.connections().len()
    }

    fn connections(&self) -> MutexGuard<HashSet<ConnectionId>> {
        // The set stays consistent even if a holder panicked
        self.connections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Wrapper around Id types that is handed out when an Id is stored in the state
/// and when dropped will remove that id from the state.
#[derive(Debug)]
pub struct OwnedId<Id: Copy> {
    state: ServerState,
    id: Id,
    cleanup: fn(&ServerState, Id),
}

impl<Id: Display + Copy> Display for OwnedId<Id> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.id.fmt(f)
    }
}

impl OwnedId<ConnectionId> {
    fn new(state: ServerState, id: ConnectionId) -> Self {
        Self {
            state,
            id,
            cleanup: |state, id| {
                tracing::debug!("Releasing connection id {id}");
                state.connections().remove(&id);
            },
        }
    }
}

impl<Id: Copy> Deref for OwnedId<Id> {
    type Target = Id;

    fn deref(&self) -> &Self::Target {
        &self.id
    }
}

impl<Id: Copy> Drop for OwnedId<Id> {
    fn drop(&mut self) {
        (self.cleanup)(&self.state, self.id);
    }
}
