pub mod controller;
pub mod error;
pub mod store;

pub use controller::{FormMode, ReloadTicket, SubmitTarget, View, ViewController};
pub use error::{StoreError, SubmitError};
pub use store::{ContactStore, HttpContactStore};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
