//! In-memory storage for campuses and classrooms.
//!
//! [`Store`] owns both collections. Handlers share it through a [`DbPool`]
//! and go through the zero-sized repositories in [`repositories`].

use std::sync::Arc;

use tokio::sync::RwLock;

pub mod models;
pub mod repositories;
pub mod seed;
mod store;

pub use store::Store;

pub type DbPool = Arc<RwLock<Store>>;

/// Wrap a store in a shareable pool handle.
pub fn create_pool(store: Store) -> DbPool {
    Arc::new(RwLock::new(store))
}
