//! Domain logic for the campus administration surface.
//!
//! Everything here is pure and synchronous: identifiers, the error type,
//! the active/disabled status, form validation, the classroom filter, and
//! the headless screen view-model. Storage lives in `campus-db`.

pub mod error;
pub mod filter;
pub mod forms;
pub mod screen;
pub mod status;
pub mod types;
pub mod validation;
