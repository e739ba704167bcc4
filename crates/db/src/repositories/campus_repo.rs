//! Repository for the campus collection.

use campus_core::forms::CampusInput;
use campus_core::status::EntityStatus;
use campus_core::types::DbId;
use chrono::Utc;

use crate::models::campus::Campus;
use crate::DbPool;

/// Provides create, read, update, and status operations for campuses.
pub struct CampusRepo;

impl CampusRepo {
    /// Insert a new campus, returning the created entity.
    pub async fn create(pool: &DbPool, input: &CampusInput) -> Campus {
        pool.write().await.insert_campus(input)
    }

    /// Find a campus by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<Campus> {
        pool.read().await.campus(id).cloned()
    }

    /// List campuses in id order, optionally restricted to one status.
    pub async fn list(pool: &DbPool, status: Option<EntityStatus>) -> Vec<Campus> {
        pool.read()
            .await
            .campuses
            .iter()
            .filter(|c| status.is_none() || status == Some(c.status))
            .cloned()
            .collect()
    }

    /// Overwrite a campus's editable fields.
    ///
    /// The stored status is kept when `input.status` is `None`. A rename is
    /// copied onto every classroom of the campus. Returns `None` if no campus
    /// with the given `id` exists.
    pub async fn update(pool: &DbPool, id: DbId, input: &CampusInput) -> Option<Campus> {
        let mut store = pool.write().await;
        let campus = store.campus_mut(id)?;
        let renamed = campus.name != input.name;

        campus.name = input.name.clone();
        campus.province = input.province.clone();
        campus.city = input.city.clone();
        campus.district = input.district.clone();
        campus.detail_address = input.detail_address.clone();
        if let Some(status) = input.status {
            campus.status = status;
        }
        campus.updated_at = Utc::now();
        let updated = campus.clone();

        if renamed {
            for classroom in store.classrooms.iter_mut().filter(|c| c.campus_id == id) {
                classroom.campus_name = updated.name.clone();
            }
        }
        Some(updated)
    }

    /// Flip active/disabled. Classrooms of the campus are not affected.
    pub async fn toggle_status(pool: &DbPool, id: DbId) -> Option<Campus> {
        let mut store = pool.write().await;
        let campus = store.campus_mut(id)?;
        campus.status = campus.status.toggled();
        campus.updated_at = Utc::now();
        Some(campus.clone())
    }

    /// Set an explicit status.
    pub async fn set_status(pool: &DbPool, id: DbId, status: EntityStatus) -> Option<Campus> {
        let mut store = pool.write().await;
        let campus = store.campus_mut(id)?;
        if campus.status != status {
            campus.status = status;
            campus.updated_at = Utc::now();
        }
        Some(campus.clone())
    }
}
