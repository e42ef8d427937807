//! Mock screens: presentation only.
//!
//! Each screen reads tour state and renders; completed gestures are
//! routed back through the shell, never handled here.

pub mod calendar;
pub mod fab;
pub mod job_board;
pub mod project_form;
pub mod tab_bar;
pub mod task_form;
pub mod tooltip;
