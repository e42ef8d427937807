//! Core data model for the tour.
//!
//! Phases and their static configuration, plus the seed data the mock
//! screens render. Pure data — all behavior lives in the controller.

mod demo;
mod phase;

pub use demo::{
    CLIENTS, CREW, DATE_OPTIONS, DEFAULT_TASK_COLOR, Project, STATUS_COLUMNS, Status, TASK_TYPES,
    TaskType, sample_projects, task_type_color,
};
pub use phase::{ORDER, Phase, PhaseConfig};
