use campus_core::error::CoreError;
use campus_core::forms::{CampusInput, ClassroomInput};
use campus_core::types::DbId;
use chrono::Utc;

use crate::models::campus::Campus;
use crate::models::classroom::Classroom;

/// Both collections, kept in id order, plus their id sequences.
#[derive(Debug, Default)]
pub struct Store {
    pub(crate) campuses: Vec<Campus>,
    pub(crate) classrooms: Vec<Classroom>,
    last_campus_id: DbId,
    last_classroom_id: DbId,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn campus_len(&self) -> usize {
        self.campuses.len()
    }

    pub fn classroom_len(&self) -> usize {
        self.classrooms.len()
    }

    pub(crate) fn campus(&self, id: DbId) -> Option<&Campus> {
        self.campuses.iter().find(|c| c.id == id)
    }

    pub(crate) fn campus_mut(&mut self, id: DbId) -> Option<&mut Campus> {
        self.campuses.iter_mut().find(|c| c.id == id)
    }

    pub(crate) fn classroom(&self, id: DbId) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == id)
    }

    pub(crate) fn classroom_mut(&mut self, id: DbId) -> Option<&mut Classroom> {
        self.classrooms.iter_mut().find(|c| c.id == id)
    }

    /// Append a new campus with no classrooms.
    pub fn insert_campus(&mut self, input: &CampusInput) -> Campus {
        self.last_campus_id += 1;
        let now = Utc::now();
        let campus = Campus {
            id: self.last_campus_id,
            name: input.name.clone(),
            province: input.province.clone(),
            city: input.city.clone(),
            district: input.district.clone(),
            detail_address: input.detail_address.clone(),
            status: input.status.unwrap_or_default(),
            classroom_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.campuses.push(campus.clone());
        campus
    }

    /// Append a new classroom under an existing campus.
    ///
    /// Fails with a validation error when `input.campus_id` is unknown.
    pub fn insert_classroom(&mut self, input: &ClassroomInput) -> Result<Classroom, CoreError> {
        let campus_name = self.resolve_campus_name(input.campus_id)?;
        self.last_classroom_id += 1;
        let now = Utc::now();
        let classroom = Classroom {
            id: self.last_classroom_id,
            name: input.name.clone(),
            campus_id: input.campus_id,
            campus_name,
            capacity: input.capacity,
            detail_address: input.detail_address.clone(),
            status: input.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.classrooms.push(classroom.clone());
        self.recount(input.campus_id);
        Ok(classroom)
    }

    /// Look up the name to denormalize onto a classroom.
    pub(crate) fn resolve_campus_name(&self, campus_id: DbId) -> Result<String, CoreError> {
        self.campus(campus_id)
            .map(|c| c.name.clone())
            .ok_or_else(|| {
                CoreError::Validation(format!("Campus with id {campus_id} does not exist"))
            })
    }

    /// Recompute `classroom_count` for one campus from the classroom list.
    pub(crate) fn recount(&mut self, campus_id: DbId) {
        let count = self
            .classrooms
            .iter()
            .filter(|c| c.campus_id == campus_id)
            .count();
        if let Some(campus) = self.campus_mut(campus_id) {
            campus.classroom_count = u32::try_from(count).unwrap_or(u32::MAX);
        }
    }
}
