//! Entity structs.
//!
//! Each submodule contains a `Serialize` entity struct and a conversion
//! back into the editable form buffer used to pre-fill edit modals. The
//! create/update payloads are the `campus_core::forms` buffers.

pub mod campus;
pub mod classroom;
