//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument. A method holds the store lock
//! for its whole body, so each call is atomic. There is no delete.

pub mod campus_repo;
pub mod classroom_repo;

pub use campus_repo::CampusRepo;
pub use classroom_repo::ClassroomRepo;
