//! Phase types: the unit of progression through the tour.
//!
//! The phase set is closed and totally ordered. `ORDER` is the single
//! source of truth for the sequence; `config` is an exhaustive match, so
//! adding a phase without copy is a compile error, not a runtime gap.

use std::time::Duration;

/// One discrete named step of the scripted tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Job board visible behind a scrim, FAB pulsing.
    JobBoardIntro,

    /// FAB menu open, waiting for "Create Project".
    FabTap,

    /// Project form: pick a client from the dropdown.
    ProjectFormClient,

    /// Project form: type a project name.
    ProjectFormName,

    /// Project form: tap "ADD TASK".
    ProjectFormAddTask,

    /// Task form: pick a task type.
    TaskFormType,

    /// Task form: assign a crew member.
    TaskFormCrew,

    /// Task form: set the date.
    TaskFormDate,

    /// Task form: tap "DONE" to save the task.
    TaskFormDone,

    /// Project form: tap "CREATE" to save the project.
    ProjectFormComplete,

    /// Demo: the new card is dragged to the Accepted column.
    DragToAccepted,

    /// Demo: the card hops through statuses on its own.
    ProjectListStatusDemo,

    /// Demo: the card is swiped off the board to close it.
    ProjectListSwipe,

    /// Demo: the board scrolls down to the Closed column.
    ClosedProjectsScroll,

    /// Calendar in week view.
    CalendarWeek,

    /// Calendar waiting for the "Month" tab tap.
    CalendarMonthPrompt,

    /// Calendar in month view, last interactive step.
    CalendarMonth,

    /// Terminal. The shell reports completion and tears down.
    Completed,
}

/// The fixed tour sequence. Index 0 is the entry phase.
pub const ORDER: [Phase; 18] = [
    Phase::JobBoardIntro,
    Phase::FabTap,
    Phase::ProjectFormClient,
    Phase::ProjectFormName,
    Phase::ProjectFormAddTask,
    Phase::TaskFormType,
    Phase::TaskFormCrew,
    Phase::TaskFormDate,
    Phase::TaskFormDone,
    Phase::ProjectFormComplete,
    Phase::DragToAccepted,
    Phase::ProjectListStatusDemo,
    Phase::ProjectListSwipe,
    Phase::ClosedProjectsScroll,
    Phase::CalendarWeek,
    Phase::CalendarMonthPrompt,
    Phase::CalendarMonth,
    Phase::Completed,
];

/// Static per-phase copy and transition hints.
#[derive(Debug, Clone, Copy)]
pub struct PhaseConfig {
    /// Tooltip headline, all-caps instruction.
    pub tooltip_title: &'static str,

    /// Tooltip body copy.
    pub tooltip_body: &'static str,

    /// Whether a manual continue control is the way out of this phase.
    pub show_continue: bool,

    /// Override label for the continue control.
    pub continue_label: Option<&'static str>,

    /// If set, the phase self-advances after this delay with no input.
    pub auto_advance_after: Option<Duration>,
}

impl Phase {
    /// Position of this phase in the catalog order.
    pub fn index(self) -> usize {
        ORDER
            .iter()
            .position(|&p| p == self)
            .expect("every phase appears in ORDER")
    }

    /// The catalog entry immediately following this one, if any.
    pub fn next(self) -> Option<Phase> {
        ORDER.get(self.index() + 1).copied()
    }

    /// The static configuration for this phase.
    pub fn config(self) -> PhaseConfig {
        const NO_AUTO: PhaseConfig = PhaseConfig {
            tooltip_title: "",
            tooltip_body: "",
            show_continue: false,
            continue_label: None,
            auto_advance_after: None,
        };

        match self {
            Phase::JobBoardIntro => PhaseConfig {
                tooltip_title: "TAP THE + BUTTON",
                tooltip_body: "This is where you create projects, tasks, clients, and more.",
                ..NO_AUTO
            },
            Phase::FabTap => PhaseConfig {
                tooltip_title: "TAP \"CREATE PROJECT\"",
                tooltip_body: "This starts a new job.",
                ..NO_AUTO
            },
            Phase::ProjectFormClient => PhaseConfig {
                tooltip_title: "SELECT A CLIENT",
                tooltip_body:
                    "These are sample clients. Pick any one\u{2014}this is just for practice.",
                ..NO_AUTO
            },
            Phase::ProjectFormName => PhaseConfig {
                tooltip_title: "ENTER A PROJECT NAME",
                tooltip_body: "Type anything. Try \"Test Project\" or make one up.",
                ..NO_AUTO
            },
            Phase::ProjectFormAddTask => PhaseConfig {
                tooltip_title: "NOW ADD A TASK",
                tooltip_body: "Tasks are the individual pieces of work\u{2014}like \"Install outlets\" or \"Paint bedroom.\"",
                ..NO_AUTO
            },
            Phase::TaskFormType => PhaseConfig {
                tooltip_title: "SELECT A TASK TYPE",
                tooltip_body:
                    "Pick any one for now. Types help you organize different kinds of work.",
                ..NO_AUTO
            },
            Phase::TaskFormCrew => PhaseConfig {
                tooltip_title: "ASSIGN A CREW MEMBER",
                tooltip_body: "These are sample crew members. People you assign will see this on their schedule.",
                ..NO_AUTO
            },
            Phase::TaskFormDate => PhaseConfig {
                tooltip_title: "SET THE DATE",
                tooltip_body: "Pick any date. This is when the task should be done.",
                ..NO_AUTO
            },
            Phase::TaskFormDone => PhaseConfig {
                tooltip_title: "TAP \"DONE\"",
                tooltip_body: "This saves the task to your project.",
                ..NO_AUTO
            },
            Phase::ProjectFormComplete => PhaseConfig {
                tooltip_title: "TAP \"CREATE\"",
                tooltip_body: "Your project is ready. This saves it to your job board.",
                ..NO_AUTO
            },
            Phase::DragToAccepted => PhaseConfig {
                tooltip_title: "DRAG RIGHT TO ACCEPTED",
                tooltip_body: "Drag it to the \"Accepted\" column. This is how you move jobs between stages.",
                auto_advance_after: Some(Duration::from_millis(3500)),
                ..NO_AUTO
            },
            Phase::ProjectListStatusDemo => PhaseConfig {
                tooltip_title: "WATCH THE STATUS UPDATE",
                tooltip_body: "As your crew starts work and completes tasks, the status updates automatically...",
                auto_advance_after: Some(Duration::from_millis(6000)),
                ..NO_AUTO
            },
            Phase::ProjectListSwipe => PhaseConfig {
                tooltip_title: "SWIPE THE CARD RIGHT TO CLOSE",
                tooltip_body: "Swipe right to advance status, left to go back...",
                ..NO_AUTO
            },
            Phase::ClosedProjectsScroll => PhaseConfig {
                tooltip_title: "COMPLETE. SCROLL DOWN TO FIND IT.",
                tooltip_body: "Finished jobs move to the bottom so active work stays on top.",
                auto_advance_after: Some(Duration::from_millis(3000)),
                ..NO_AUTO
            },
            Phase::CalendarWeek => PhaseConfig {
                tooltip_title: "THIS IS YOUR WEEK VIEW",
                tooltip_body: "Your scheduled tasks appear by day. Swipe left or right to see other weeks.",
                show_continue: true,
                continue_label: Some("CONTINUE"),
                ..NO_AUTO
            },
            Phase::CalendarMonthPrompt => PhaseConfig {
                tooltip_title: "TAP \"MONTH\"",
                tooltip_body: "Switch to month view to see the bigger picture.",
                ..NO_AUTO
            },
            Phase::CalendarMonth => PhaseConfig {
                tooltip_title: "PINCH OUTWARD TO EXPAND",
                tooltip_body: "This shows more detail for each day. Pinch inward to shrink it back.",
                show_continue: true,
                continue_label: Some("DONE"),
                ..NO_AUTO
            },
            Phase::Completed => NO_AUTO,
        }
    }

    // ── Predicates ──
    //
    // Pure membership tests over the closed phase set. The shell decides
    // layer visibility from these without enumerating phases itself.

    /// Phases inside the project-creation form flow (task sub-form included).
    pub fn is_form_phase(self) -> bool {
        matches!(
            self,
            Phase::ProjectFormClient
                | Phase::ProjectFormName
                | Phase::ProjectFormAddTask
                | Phase::TaskFormType
                | Phase::TaskFormCrew
                | Phase::TaskFormDate
                | Phase::TaskFormDone
                | Phase::ProjectFormComplete
        )
    }

    /// Phases inside the task sub-form. Always a subset of [`Self::is_form_phase`].
    pub fn is_task_form_phase(self) -> bool {
        matches!(
            self,
            Phase::TaskFormType | Phase::TaskFormCrew | Phase::TaskFormDate | Phase::TaskFormDone
        )
    }

    /// Phases that render the calendar mock instead of the job board.
    pub fn is_calendar_phase(self) -> bool {
        matches!(
            self,
            Phase::CalendarWeek | Phase::CalendarMonthPrompt | Phase::CalendarMonth
        )
    }

    /// The full-screen blocking scrim, shown only before the FAB is tapped.
    pub fn shows_blocking_scrim(self) -> bool {
        self == Phase::JobBoardIntro
    }

    /// Whether the floating action button (or its open menu) is mounted.
    pub fn shows_fab(self) -> bool {
        matches!(self, Phase::JobBoardIntro | Phase::FabTap)
    }

    /// Phases that autoplay a scripted animation on the job board.
    pub fn is_demo_phase(self) -> bool {
        matches!(
            self,
            Phase::DragToAccepted
                | Phase::ProjectListStatusDemo
                | Phase::ProjectListSwipe
                | Phase::ClosedProjectsScroll
        )
    }

    /// Stable identifier used in the `phases` listing and the report.
    pub fn name(self) -> &'static str {
        match self {
            Phase::JobBoardIntro => "jobBoardIntro",
            Phase::FabTap => "fabTap",
            Phase::ProjectFormClient => "projectFormClient",
            Phase::ProjectFormName => "projectFormName",
            Phase::ProjectFormAddTask => "projectFormAddTask",
            Phase::TaskFormType => "taskFormType",
            Phase::TaskFormCrew => "taskFormCrew",
            Phase::TaskFormDate => "taskFormDate",
            Phase::TaskFormDone => "taskFormDone",
            Phase::ProjectFormComplete => "projectFormComplete",
            Phase::DragToAccepted => "dragToAccepted",
            Phase::ProjectListStatusDemo => "projectListStatusDemo",
            Phase::ProjectListSwipe => "projectListSwipe",
            Phase::ClosedProjectsScroll => "closedProjectsScroll",
            Phase::CalendarWeek => "calendarWeek",
            Phase::CalendarMonthPrompt => "calendarMonthPrompt",
            Phase::CalendarMonth => "calendarMonth",
            Phase::Completed => "completed",
        }
    }
}
