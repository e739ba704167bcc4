//! Headless view-model of the campus administration screen.
//!
//! Tracks which table is shown, the classroom filter fields, and the
//! create/edit modal with its form buffer. It never touches storage:
//! [`AdminScreen::submit`] hands back a validated [`Submission`] for the
//! caller to apply through the repositories.

use crate::error::CoreError;
use crate::filter::ClassroomFilter;
use crate::forms::{CampusForm, CampusInput, ClassroomForm, ClassroomInput};
use crate::types::DbId;

/// Which collection the screen is displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Campuses,
    Classrooms,
}

/// Modal visibility plus the buffer being edited.
///
/// `target` is `None` for a create form and the entity id for an edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Campus {
        target: Option<DbId>,
        form: CampusForm,
    },
    Classroom {
        target: Option<DbId>,
        form: ClassroomForm,
    },
}

/// A confirmed, validated save ready to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    CreateCampus(CampusInput),
    UpdateCampus { id: DbId, input: CampusInput },
    CreateClassroom(ClassroomInput),
    UpdateClassroom { id: DbId, input: ClassroomInput },
}

#[derive(Debug, Clone, Default)]
pub struct AdminScreen {
    tab: Tab,
    filter: ClassroomFilter,
    modal: Modal,
}

impl AdminScreen {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Tabs --

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Show another table. Filter fields do not survive a tab switch.
    ///
    /// Returns `false` when `tab` was already active.
    pub fn switch_tab(&mut self, tab: Tab) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        self.filter = ClassroomFilter::default();
        true
    }

    // -- Filter --

    pub fn filter(&self) -> &ClassroomFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut ClassroomFilter {
        &mut self.filter
    }

    pub fn reset_filter(&mut self) {
        self.filter = ClassroomFilter::default();
    }

    // -- Modal --

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal != Modal::Closed
    }

    /// Id of the entity being edited, if an edit form is open.
    pub fn edit_target(&self) -> Option<DbId> {
        match &self.modal {
            Modal::Closed => None,
            Modal::Campus { target, .. } | Modal::Classroom { target, .. } => *target,
        }
    }

    pub fn open_create_campus(&mut self) {
        self.modal = Modal::Campus {
            target: None,
            form: CampusForm::default(),
        };
    }

    /// Open the campus edit form pre-filled with the entity's current values.
    pub fn open_edit_campus(&mut self, id: DbId, current: CampusForm) {
        self.modal = Modal::Campus {
            target: Some(id),
            form: current,
        };
    }

    pub fn open_create_classroom(&mut self) {
        self.modal = Modal::Classroom {
            target: None,
            form: ClassroomForm::default(),
        };
    }

    pub fn open_edit_classroom(&mut self, id: DbId, current: ClassroomForm) {
        self.modal = Modal::Classroom {
            target: Some(id),
            form: current,
        };
    }

    /// Mutable access to the open campus buffer.
    pub fn campus_form_mut(&mut self) -> Option<&mut CampusForm> {
        match &mut self.modal {
            Modal::Campus { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Mutable access to the open classroom buffer.
    pub fn classroom_form_mut(&mut self) -> Option<&mut ClassroomForm> {
        match &mut self.modal {
            Modal::Classroom { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Close the modal and drop its buffer.
    pub fn cancel(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Validate the open buffer.
    ///
    /// On success the modal closes and the save is returned. On failure the
    /// modal and its buffer are left untouched so the user can correct it.
    pub fn submit(&mut self) -> Result<Submission, CoreError> {
        let submission = match &self.modal {
            Modal::Closed => {
                return Err(CoreError::Conflict("No form is open".to_string()));
            }
            Modal::Campus { target, form } => {
                let input = form.validate()?;
                match target {
                    Some(id) => Submission::UpdateCampus { id: *id, input },
                    None => Submission::CreateCampus(input),
                }
            }
            Modal::Classroom { target, form } => {
                let input = form.validate()?;
                match target {
                    Some(id) => Submission::UpdateClassroom { id: *id, input },
                    None => Submission::CreateClassroom(input),
                }
            }
        };
        self.modal = Modal::Closed;
        Ok(submission)
    }
}
