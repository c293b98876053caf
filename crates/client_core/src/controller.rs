use shared::{
    domain::ContactId,
    protocol::{Contact, ContactFields},
};
use tracing::{debug, warn};

use crate::{
    error::{StoreError, SubmitError},
    store::ContactStore,
};

/// Which view the UI renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Form(FormMode),
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Handle for one issued reload. A snapshot is applied only while its ticket
/// is the latest issued, so responses arriving out of order never overwrite
/// newer data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTicket(u64);

/// A validated submit, ready to run against the store. Produced by
/// [`ViewController::submit_target`] so front ends that execute network
/// calls on another thread can build the request without holding the
/// controller across it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create(ContactFields),
    Update(ContactId, ContactFields),
}

/// The view controller: one owned state struct holding the current view,
/// the form draft, the selection, the last accepted snapshot, reload
/// bookkeeping, and the last failure notice.
///
/// The displayed list is always the full snapshot last accepted from the
/// store; every mutation triggers a full re-fetch and nothing is merged or
/// patched locally.
#[derive(Debug, Default)]
pub struct ViewController {
    view: View,
    draft: ContactFields,
    selection: Option<Contact>,
    contacts: Vec<Contact>,
    issued_seq: u64,
    completed_seq: u64,
    notice: Option<String>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn selection(&self) -> Option<&Contact> {
        self.selection.as_ref()
    }

    pub fn draft(&self) -> &ContactFields {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ContactFields {
        &mut self.draft
    }

    /// True while any issued reload has not completed; the list view renders
    /// a loading indicator instead of the table.
    pub fn is_loading(&self) -> bool {
        self.completed_seq < self.issued_seq
    }

    /// Last recorded failure notice, if the UI has not cleared it yet.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn set_notice(&mut self, message: String) {
        self.notice = Some(message);
    }

    /// "View contacts" navigation: any state back to the list, draft reset,
    /// selection cleared. Also serves as the detail view's "back".
    pub fn show_list(&mut self) {
        self.view = View::List;
        self.draft.clear();
        self.selection = None;
    }

    pub fn start_add(&mut self) {
        self.view = View::Form(FormMode::Add);
        self.draft.clear();
        self.selection = None;
    }

    /// Enter edit mode for a row: draft seeded from its fields, selection
    /// set to a full copy.
    pub fn start_edit(&mut self, contact: Contact) {
        self.draft = contact.fields();
        self.selection = Some(contact);
        self.view = View::Form(FormMode::Edit);
    }

    pub fn show_detail(&mut self, contact: Contact) {
        self.selection = Some(contact);
        self.view = View::Detail;
    }

    /// Issue a reload ticket. The caller fetches the collection and hands
    /// the outcome back through [`apply_snapshot`](Self::apply_snapshot) or
    /// [`reload_failed`](Self::reload_failed).
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.issued_seq += 1;
        ReloadTicket(self.issued_seq)
    }

    /// Replace the snapshot wholesale if the ticket is still the latest
    /// issued. Returns whether the snapshot was applied.
    pub fn apply_snapshot(&mut self, ticket: ReloadTicket, contacts: Vec<Contact>) -> bool {
        self.complete(ticket);
        if ticket.0 != self.issued_seq {
            debug!(
                ticket = ticket.0,
                latest = self.issued_seq,
                "discarding stale contact snapshot"
            );
            return false;
        }
        self.contacts = contacts;
        true
    }

    /// Record a failed reload. The previous snapshot stays untouched; the
    /// failure is logged and, when current, surfaced as a notice.
    pub fn reload_failed(&mut self, ticket: ReloadTicket, message: &str) {
        self.complete(ticket);
        warn!(ticket = ticket.0, "contact reload failed: {message}");
        if ticket.0 == self.issued_seq {
            self.set_notice(format!("Could not load contacts: {message}"));
        }
    }

    fn complete(&mut self, ticket: ReloadTicket) {
        self.completed_seq = self.completed_seq.max(ticket.0);
    }

    /// Fetch the full collection and replace the in-memory list.
    pub async fn reload(&mut self, store: &dyn ContactStore) -> Result<(), StoreError> {
        let ticket = self.begin_reload();
        match store.list().await {
            Ok(contacts) => {
                self.apply_snapshot(ticket, contacts);
                Ok(())
            }
            Err(err) => {
                self.reload_failed(ticket, &err.to_string());
                Err(err)
            }
        }
    }

    /// Validate the draft against the current view and produce the store
    /// call a submit should make.
    pub fn submit_target(&self) -> Result<SubmitTarget, SubmitError> {
        let mode = match self.view {
            View::Form(mode) => mode,
            _ => return Err(SubmitError::NotInForm),
        };
        if self.draft.name.trim().is_empty() {
            return Err(SubmitError::BlankName);
        }
        match mode {
            FormMode::Add => Ok(SubmitTarget::Create(self.draft.clone())),
            FormMode::Edit => {
                let selected = self.selection.as_ref().ok_or(SubmitError::NoSelection)?;
                Ok(SubmitTarget::Update(selected.id.clone(), self.draft.clone()))
            }
        }
    }

    /// The store accepted the draft: reset it and return to the list.
    pub fn submit_succeeded(&mut self) {
        self.show_list();
    }

    /// The store rejected the draft: stay in the form with the draft intact
    /// so the user can retry, and surface a notice.
    pub fn submit_failed(&mut self, message: &str) {
        warn!("contact submit failed: {message}");
        self.set_notice(format!("Could not save contact: {message}"));
    }

    /// Record a delete failure reported by a front end that runs its store
    /// calls elsewhere. The row stays in the snapshot until the follow-up
    /// reload lands.
    pub fn delete_failed(&mut self, message: &str) {
        warn!("contact delete failed: {message}");
        self.set_notice(format!("Could not delete contact: {message}"));
    }

    /// Submit the current draft: create in add mode, update the selected
    /// identifier in edit mode. On success the list is re-fetched wholesale
    /// and the view returns to the list.
    pub async fn submit(&mut self, store: &dyn ContactStore) -> Result<(), SubmitError> {
        let outcome = match self.submit_target()? {
            SubmitTarget::Create(fields) => store.create(&fields).await,
            SubmitTarget::Update(id, fields) => store.update(&id, &fields).await,
        };
        match outcome {
            Ok(()) => {
                self.submit_succeeded();
                if let Err(err) = self.reload(store).await {
                    debug!("post-submit reload failed: {err}");
                }
                Ok(())
            }
            Err(err) => {
                self.submit_failed(&err.to_string());
                Err(err.into())
            }
        }
    }

    /// Delete by identifier, then re-fetch. There is no optimistic removal:
    /// the row stays in the snapshot until the reload lands. A failed delete
    /// (including an identifier that no longer exists) is surfaced as a
    /// notice and returned, and the reload still runs so the snapshot stays
    /// authoritative.
    pub async fn delete_contact(
        &mut self,
        store: &dyn ContactStore,
        id: &ContactId,
    ) -> Result<(), StoreError> {
        let outcome = store.delete(id).await;
        if let Err(err) = &outcome {
            self.delete_failed(&format!("{err} (id {id})"));
        }
        if let Err(err) = self.reload(store).await {
            debug!("post-delete reload failed: {err}");
        }
        outcome
    }
}
