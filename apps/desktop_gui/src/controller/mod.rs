//! Controller-facing event types for the GUI shell.

pub mod events;
