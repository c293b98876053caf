//! Backend commands queued from UI to backend worker.

use client_core::ReloadTicket;
use shared::{domain::ContactId, protocol::ContactFields};

pub enum BackendCommand {
    LoadContacts {
        ticket: ReloadTicket,
    },
    CreateContact {
        draft: ContactFields,
    },
    UpdateContact {
        id: ContactId,
        draft: ContactFields,
    },
    DeleteContact {
        id: ContactId,
    },
}
