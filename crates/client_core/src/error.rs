use thiserror::Error;

/// Failure talking to the remote contact store. One taxonomy kind:
/// connectivity errors, non-success HTTP statuses, and malformed response
/// bodies all surface as a transport failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("contact store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Why a form submit was rejected or failed. Precondition variants are
/// returned before any network call is made.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("nothing to submit outside the contact form")]
    NotInForm,
    #[error("contact name must not be empty")]
    BlankName,
    #[error("no contact selected for editing")]
    NoSelection,
    #[error(transparent)]
    Store(#[from] StoreError),
}
