//! Events flowing from the backend worker back to the UI thread.

use client_core::ReloadTicket;
use shared::protocol::Contact;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

pub enum UiEvent {
    BackendReady,
    ContactsLoaded {
        ticket: ReloadTicket,
        result: Result<Vec<Contact>, String>,
    },
    MutationFinished {
        kind: MutationKind,
        result: Result<(), String>,
    },
}
