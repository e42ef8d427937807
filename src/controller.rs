//! Tour controller: single owner of tour state.
//!
//! All phase transitions happen here, through [`Tour::advance`]. Delayed
//! transitions (field debounces, per-phase auto-advance) are explicit
//! tasks tagged with the phase they were armed in; [`Tour::tick`] fires
//! the due ones and drops any whose phase has since changed. Every phase
//! change also clears all pending timers, so a user racing ahead of a
//! debounce can never be advanced twice.
//!
//! Everything time-sensitive takes `now` as a parameter, which keeps the
//! whole machine deterministic under test.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::model::{DEFAULT_TASK_COLOR, Phase, Project, Status, task_type_color};

/// Debounce after picking a client, task type, crew member, or date —
/// long enough for the selection highlight to register.
const SELECT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounce after typing a qualifying project name. Longer than the
/// select debounce so late edits land before the phase commits.
const NAME_DEBOUNCE: Duration = Duration::from_millis(800);

/// Minimum project-name length before the name phase will advance.
const MIN_NAME_LEN: usize = 3;

/// A delayed advance, tagged with the phase it was armed in.
///
/// At fire time the tag is compared against the current phase; a mismatch
/// means the user already left by another path, and the timer is dropped
/// without effect.
#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    armed_in: Phase,
    due: Instant,
}

/// The running tour: current phase, collected field values, timers.
pub struct Tour {
    phase: Phase,
    selected_client: Option<String>,
    project_name: String,
    selected_task_type: Option<String>,
    selected_crew: Option<String>,
    selected_date: Option<String>,
    started: Instant,
    pending: Vec<PendingAdvance>,
    completion: Option<u64>,
}

impl Tour {
    /// Starts a tour at the entry phase.
    pub fn new(now: Instant) -> Self {
        let mut tour = Self {
            phase: crate::model::ORDER[0],
            selected_client: None,
            project_name: String::new(),
            selected_task_type: None,
            selected_crew: None,
            selected_date: None,
            started: now,
            pending: Vec::new(),
            completion: None,
        };
        tour.arm_auto_advance(now);
        tour
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_client(&self) -> Option<&str> {
        self.selected_client.as_deref()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn selected_task_type(&self) -> Option<&str> {
        self.selected_task_type.as_deref()
    }

    pub fn selected_crew(&self) -> Option<&str> {
        self.selected_crew.as_deref()
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    /// Whether the task sub-form has been fully filled in.
    pub fn has_task(&self) -> bool {
        self.selected_task_type.is_some()
            && self.selected_crew.is_some()
            && self.selected_date.is_some()
    }

    /// Wall-clock seconds since the tour started.
    pub fn elapsed_seconds(&self, now: Instant) -> u64 {
        now.duration_since(self.started).as_secs()
    }

    /// The completion report, consumable exactly once after the terminal
    /// phase is reached.
    pub fn take_completion(&mut self) -> Option<u64> {
        self.completion.take()
    }

    /// The project the user has assembled so far, for the mock screens.
    ///
    /// Recomputed from field state on every call; `None` until the user
    /// has picked a client or typed a name.
    pub fn user_project(&self) -> Option<Project> {
        if self.selected_client.is_none() && self.project_name.is_empty() {
            return None;
        }
        let task_type = self
            .selected_task_type
            .clone()
            .unwrap_or_else(|| "General".to_string());
        let task_type_color = self
            .selected_task_type
            .as_deref()
            .map_or(DEFAULT_TASK_COLOR, task_type_color);
        Some(Project {
            name: if self.project_name.is_empty() {
                "New Project".to_string()
            } else {
                self.project_name.clone()
            },
            client: self
                .selected_client
                .clone()
                .unwrap_or_else(|| "Client".to_string()),
            task_type,
            task_type_color,
            crew: self.selected_crew.clone(),
            status: Status::New,
        })
    }

    // ── Transitions ──

    /// Moves to the next phase in catalog order.
    ///
    /// The only way the phase changes after initialization. Silent no-op
    /// at the terminal phase. Clears all pending timers, then arms the new
    /// phase's auto-advance if it has one.
    pub fn advance(&mut self, now: Instant) {
        let Some(next) = self.phase.next() else {
            return;
        };
        self.phase = next;
        self.pending.clear();
        self.arm_auto_advance(now);

        if next == Phase::Completed && self.completion.is_none() {
            self.completion = Some(self.elapsed_seconds(now));
        }
    }

    /// Fires due timers. Stale timers — armed in a phase that is no longer
    /// current — are dropped silently; that is the expected race, not an
    /// error.
    pub fn tick(&mut self, now: Instant) {
        while let Some(pos) = self.pending.iter().position(|t| t.due <= now) {
            let timer = self.pending.swap_remove(pos);
            if timer.armed_in == self.phase {
                self.advance(now);
            }
        }
    }

    // ── Field setters ──
    //
    // Each setter records the value unconditionally and arms a guarded
    // debounce only while its own phase is current, so stray events from
    // other phases never schedule a transition.

    pub fn select_client(&mut self, name: &str, now: Instant) {
        self.selected_client = Some(name.to_string());
        if self.phase == Phase::ProjectFormClient {
            self.arm_debounce(SELECT_DEBOUNCE, now);
        }
    }

    pub fn set_project_name(&mut self, name: &str, now: Instant) {
        self.project_name = name.to_string();
        if self.phase == Phase::ProjectFormName {
            if self.project_name.trim().chars().count() >= MIN_NAME_LEN {
                self.arm_debounce(NAME_DEBOUNCE, now);
            } else {
                // Back under the threshold: a previously armed advance no
                // longer qualifies.
                self.pending.retain(|t| t.armed_in != self.phase);
            }
        }
    }

    pub fn select_task_type(&mut self, task_type: &str, now: Instant) {
        self.selected_task_type = Some(task_type.to_string());
        if self.phase == Phase::TaskFormType {
            self.arm_debounce(SELECT_DEBOUNCE, now);
        }
    }

    pub fn select_crew(&mut self, crew: &str, now: Instant) {
        self.selected_crew = Some(crew.to_string());
        if self.phase == Phase::TaskFormCrew {
            self.arm_debounce(SELECT_DEBOUNCE, now);
        }
    }

    pub fn select_date(&mut self, date: &str, now: Instant) {
        self.selected_date = Some(date.to_string());
        if self.phase == Phase::TaskFormDate {
            self.arm_debounce(SELECT_DEBOUNCE, now);
        }
    }

    /// Arms (or re-arms) the debounced advance for the current phase.
    /// Re-arming replaces the previous timer — classic debounce.
    fn arm_debounce(&mut self, delay: Duration, now: Instant) {
        let phase = self.phase;
        self.pending.retain(|t| t.armed_in != phase);
        self.pending.push(PendingAdvance {
            armed_in: phase,
            due: now + delay,
        });
    }

    fn arm_auto_advance(&mut self, now: Instant) {
        if let Some(delay) = self.phase.config().auto_advance_after {
            self.pending.push(PendingAdvance {
                armed_in: self.phase,
                due: now + delay,
            });
        }
    }
}

/// Completion payload handed back to the hosting process when the tour
/// reaches the terminal phase. This is the only output crossing the
/// tour's boundary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourReport {
    pub completed_at: jiff::Timestamp,
    pub elapsed_seconds: u64,
    pub client: Option<String>,
    pub project_name: String,
    pub task_type: Option<String>,
    pub crew: Option<String>,
    pub date: Option<String>,
}

impl TourReport {
    pub fn new(tour: &Tour, elapsed_seconds: u64) -> Self {
        Self {
            completed_at: jiff::Timestamp::now(),
            elapsed_seconds,
            client: tour.selected_client().map(str::to_string),
            project_name: tour.project_name().to_string(),
            task_type: tour.selected_task_type().map(str::to_string),
            crew: tour.selected_crew().map(str::to_string),
            date: tour.selected_date().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::ORDER;

    fn t0() -> Instant {
        Instant::now()
    }

    /// Drives a fresh tour to the given phase with bare advances.
    fn tour_at(phase: Phase, now: Instant) -> Tour {
        let mut tour = Tour::new(now);
        while tour.phase() != phase {
            tour.advance(now);
        }
        tour
    }

    #[test]
    fn advance_moves_exactly_one_step() {
        let now = t0();
        let mut tour = Tour::new(now);
        let mut last = tour.phase().index();

        for _ in 0..ORDER.len() {
            tour.advance(now);
            let idx = tour.phase().index();
            assert!(idx == last || idx == last + 1);
            assert!(idx >= last, "phase index must never decrease");
            last = idx;
        }
        assert_eq!(tour.phase(), Phase::Completed);
    }

    #[test]
    fn terminal_advance_is_a_no_op() {
        let now = t0();
        let mut tour = tour_at(Phase::Completed, now);
        assert_eq!(tour.take_completion(), Some(0));

        tour.advance(now);
        tour.advance(now);
        assert_eq!(tour.phase(), Phase::Completed);
        // The completion report is not produced a second time.
        assert_eq!(tour.take_completion(), None);
    }

    #[test]
    fn client_select_advances_after_debounce() {
        let now = t0();
        let mut tour = tour_at(Phase::ProjectFormClient, now);

        tour.select_client("Miramar Flight Academy", now);
        assert_eq!(tour.phase(), Phase::ProjectFormClient);

        tour.tick(now + Duration::from_millis(299));
        assert_eq!(tour.phase(), Phase::ProjectFormClient);

        tour.tick(now + Duration::from_millis(300));
        assert_eq!(tour.phase(), Phase::ProjectFormName);
        assert_eq!(tour.selected_client(), Some("Miramar Flight Academy"));
    }

    #[test]
    fn stale_debounce_does_not_fire_after_manual_advance() {
        let now = t0();
        let mut tour = tour_at(Phase::ProjectFormClient, now);

        // Debounce armed, then the user races ahead by another path.
        tour.select_client("Hard Deck Marina", now);
        tour.advance(now);
        assert_eq!(tour.phase(), Phase::ProjectFormName);

        // The stale timer must not advance a second time.
        tour.tick(now + Duration::from_secs(5));
        assert_eq!(tour.phase(), Phase::ProjectFormName);
    }

    #[test]
    fn timer_tagged_with_old_phase_is_dropped_even_if_it_survives() {
        // Clearing on phase change already removes stale timers; the tag
        // check is the second line of defense. Exercise it directly.
        let now = t0();
        let mut tour = tour_at(Phase::ProjectFormName, now);
        tour.pending.push(PendingAdvance {
            armed_in: Phase::ProjectFormClient,
            due: now,
        });

        tour.tick(now);
        assert_eq!(tour.phase(), Phase::ProjectFormName);
        assert!(tour.pending.is_empty());
    }

    #[test]
    fn short_name_does_not_arm_an_advance() {
        let now = t0();
        let mut tour = tour_at(Phase::ProjectFormName, now);

        tour.set_project_name("ab", now);
        assert!(tour.pending.is_empty());

        tour.tick(now + Duration::from_secs(10));
        assert_eq!(tour.phase(), Phase::ProjectFormName);
    }

    #[test]
    fn qualifying_name_advances_after_debounce() {
        let now = t0();
        let mut tour = tour_at(Phase::ProjectFormName, now);

        tour.set_project_name("abc", now);
        tour.tick(now + Duration::from_millis(799));
        assert_eq!(tour.phase(), Phase::ProjectFormName);

        tour.tick(now + Duration::from_millis(800));
        assert_eq!(tour.phase(), Phase::ProjectFormAddTask);
    }

    #[test]
    fn retyping_reschedules_the_name_debounce() {
        let now = t0();
        let mut tour = tour_at(Phase::ProjectFormName, now);

        tour.set_project_name("Test", now);
        tour.set_project_name("Test P", now + Duration::from_millis(500));

        // The first deadline has passed but the debounce was replaced.
        tour.tick(now + Duration::from_millis(900));
        assert_eq!(tour.phase(), Phase::ProjectFormName);

        tour.tick(now + Duration::from_millis(1300));
        assert_eq!(tour.phase(), Phase::ProjectFormAddTask);
    }

    #[test]
    fn deleting_below_threshold_cancels_the_pending_advance() {
        let now = t0();
        let mut tour = tour_at(Phase::ProjectFormName, now);

        tour.set_project_name("abc", now);
        tour.set_project_name("ab", now + Duration::from_millis(100));

        tour.tick(now + Duration::from_secs(10));
        assert_eq!(tour.phase(), Phase::ProjectFormName);
    }

    #[test]
    fn whitespace_does_not_count_toward_the_name_threshold() {
        let now = t0();
        let mut tour = tour_at(Phase::ProjectFormName, now);

        tour.set_project_name("  a  ", now);
        assert!(tour.pending.is_empty());
    }

    #[test]
    fn setter_outside_its_phase_schedules_nothing() {
        let now = t0();
        let mut tour = tour_at(Phase::CalendarWeek, now);

        tour.select_client("O'Club Bar & Grill", now);
        assert!(tour.pending.is_empty());
        assert_eq!(tour.selected_client(), Some("O'Club Bar & Grill"));
    }

    #[test]
    fn demo_phase_auto_advances_on_schedule() {
        let now = t0();
        let mut tour = tour_at(Phase::DragToAccepted, now);

        tour.tick(now + Duration::from_millis(3499));
        assert_eq!(tour.phase(), Phase::DragToAccepted);

        tour.tick(now + Duration::from_millis(3500));
        assert_eq!(tour.phase(), Phase::ProjectListStatusDemo);
    }

    #[test]
    fn gesture_and_auto_advance_do_not_stack() {
        let now = t0();
        let mut tour = tour_at(Phase::DragToAccepted, now);

        // The user's own completion lands just before the timer would.
        tour.advance(now + Duration::from_millis(3400));
        assert_eq!(tour.phase(), Phase::ProjectListStatusDemo);

        // The old auto-advance is gone; only the new phase's own timer
        // (6000 ms from the transition) remains.
        tour.tick(now + Duration::from_millis(3600));
        assert_eq!(tour.phase(), Phase::ProjectListStatusDemo);
    }

    #[test]
    fn user_project_is_derived_from_field_state() {
        let now = t0();
        let mut tour = Tour::new(now);
        assert!(tour.user_project().is_none());

        tour.select_client("Miramar Flight Academy", now);
        let project = tour.user_project().expect("client picked");
        assert_eq!(project.name, "New Project");
        assert_eq!(project.task_type, "General");
        assert_eq!(project.task_type_color, DEFAULT_TASK_COLOR);

        tour.set_project_name("Test Project", now);
        tour.select_task_type("Coating", now);
        tour.select_crew("Maverick", now);
        let project = tour.user_project().expect("fields set");
        assert_eq!(project.name, "Test Project");
        assert_eq!(project.task_type, "Coating");
        assert_eq!(project.task_type_color, task_type_color("Coating"));
        assert_eq!(project.crew.as_deref(), Some("Maverick"));
    }

    #[test]
    fn full_happy_path_reaches_completed_in_seventeen_edges() {
        let start = t0();
        let mut now = start;
        let mut tour = Tour::new(now);
        let mut edges = 0;
        let count_edge = |tour: &Tour, last: &mut usize| {
            let idx = tour.phase().index();
            assert_eq!(idx, *last + 1, "each step advances exactly one phase");
            *last = idx;
        };
        let mut last = 0;

        // Tap the FAB, then "Create Project".
        tour.advance(now);
        count_edge(&tour, &mut last);
        edges += 1;
        tour.advance(now);
        count_edge(&tour, &mut last);
        edges += 1;

        // Client selection, debounced.
        tour.select_client("Miramar Flight Academy", now);
        now += Duration::from_millis(300);
        tour.tick(now);
        count_edge(&tour, &mut last);
        edges += 1;

        // Project name, debounced after the length threshold.
        tour.set_project_name("Test Project", now);
        now += Duration::from_millis(800);
        tour.tick(now);
        count_edge(&tour, &mut last);
        edges += 1;

        // Add task, then the three task fields, then DONE and CREATE.
        tour.advance(now);
        count_edge(&tour, &mut last);
        edges += 1;
        for select in [Tour::select_task_type, Tour::select_crew, Tour::select_date] {
            let value = match tour.phase() {
                Phase::TaskFormType => "Coating",
                Phase::TaskFormCrew => "Maverick",
                _ => "Today",
            };
            select(&mut tour, value, now);
            now += Duration::from_millis(300);
            tour.tick(now);
            count_edge(&tour, &mut last);
            edges += 1;
        }
        tour.advance(now);
        count_edge(&tour, &mut last);
        edges += 1;
        tour.advance(now);
        count_edge(&tour, &mut last);
        edges += 1;

        // Drag, status, swipe, scroll demos. Swipe has no timer — the
        // shell advances it when the animation completes.
        now += Duration::from_millis(3500);
        tour.tick(now);
        count_edge(&tour, &mut last);
        edges += 1;
        now += Duration::from_millis(6000);
        tour.tick(now);
        count_edge(&tour, &mut last);
        edges += 1;
        tour.advance(now);
        count_edge(&tour, &mut last);
        edges += 1;
        now += Duration::from_millis(3000);
        tour.tick(now);
        count_edge(&tour, &mut last);
        edges += 1;

        // Calendar: CONTINUE, tap Month, DONE.
        tour.advance(now);
        count_edge(&tour, &mut last);
        edges += 1;
        tour.advance(now);
        count_edge(&tour, &mut last);
        edges += 1;
        tour.advance(now);
        count_edge(&tour, &mut last);
        edges += 1;

        assert_eq!(edges, 17);
        assert_eq!(tour.phase(), Phase::Completed);

        let elapsed = tour.take_completion().expect("completion reported once");
        assert_eq!(elapsed, tour.elapsed_seconds(now));
        assert_eq!(tour.take_completion(), None);
    }
}
