//! Repository for the classroom collection.

use campus_core::error::CoreError;
use campus_core::filter::ClassroomFilter;
use campus_core::forms::ClassroomInput;
use campus_core::status::EntityStatus;
use campus_core::types::DbId;
use chrono::Utc;

use crate::models::classroom::Classroom;
use crate::DbPool;

/// Provides create, read, update, and status operations for classrooms.
pub struct ClassroomRepo;

impl ClassroomRepo {
    /// Insert a new classroom and bump its campus's `classroom_count`.
    ///
    /// Fails with [`CoreError::Validation`] when the campus does not exist.
    pub async fn create(pool: &DbPool, input: &ClassroomInput) -> Result<Classroom, CoreError> {
        pool.write().await.insert_classroom(input)
    }

    /// Find a classroom by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<Classroom> {
        pool.read().await.classroom(id).cloned()
    }

    /// List classrooms in id order that satisfy `filter`.
    pub async fn list(pool: &DbPool, filter: &ClassroomFilter) -> Vec<Classroom> {
        pool.read()
            .await
            .classrooms
            .iter()
            .filter(|c| filter.matches(&c.name, c.campus_id, c.status))
            .cloned()
            .collect()
    }

    /// Overwrite a classroom's editable fields.
    ///
    /// The stored status is kept when `input.status` is `None`. The campus
    /// reference is re-resolved and `campus_name` refreshed. When
    /// the classroom moves to another campus both counts are recomputed.
    /// Returns `Ok(None)` if no classroom with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &ClassroomInput,
    ) -> Result<Option<Classroom>, CoreError> {
        let mut store = pool.write().await;
        let Some(previous_campus) = store.classroom(id).map(|c| c.campus_id) else {
            return Ok(None);
        };
        let campus_name = store.resolve_campus_name(input.campus_id)?;

        let Some(classroom) = store.classroom_mut(id) else {
            return Ok(None);
        };
        classroom.name = input.name.clone();
        classroom.campus_id = input.campus_id;
        classroom.campus_name = campus_name;
        classroom.capacity = input.capacity;
        classroom.detail_address = input.detail_address.clone();
        if let Some(status) = input.status {
            classroom.status = status;
        }
        classroom.updated_at = Utc::now();
        let updated = classroom.clone();

        if previous_campus != input.campus_id {
            store.recount(previous_campus);
            store.recount(input.campus_id);
            tracing::debug!(
                classroom_id = id,
                from_campus = previous_campus,
                to_campus = input.campus_id,
                "Classroom moved between campuses",
            );
        }
        Ok(Some(updated))
    }

    /// Flip active/disabled. The campus's count is not affected.
    pub async fn toggle_status(pool: &DbPool, id: DbId) -> Option<Classroom> {
        let mut store = pool.write().await;
        let classroom = store.classroom_mut(id)?;
        classroom.status = classroom.status.toggled();
        classroom.updated_at = Utc::now();
        Some(classroom.clone())
    }

    /// Set an explicit status.
    pub async fn set_status(pool: &DbPool, id: DbId, status: EntityStatus) -> Option<Classroom> {
        let mut store = pool.write().await;
        let classroom = store.classroom_mut(id)?;
        if classroom.status != status {
            classroom.status = status;
            classroom.updated_at = Utc::now();
        }
        Some(classroom.clone())
    }
}
