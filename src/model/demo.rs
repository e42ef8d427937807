//! Seed data for the mock screens: sample projects, clients, task types,
//! crew, and date options. Everything here is cosmetic — the tour never
//! persists any of it.

/// Where a project sits on the job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    New,
    Accepted,
    InProgress,
    Completed,
    Closed,
}

/// Board column order, left to right.
pub const STATUS_COLUMNS: [Status; 5] = [
    Status::New,
    Status::Accepted,
    Status::InProgress,
    Status::Completed,
    Status::Closed,
];

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::New => "New",
            Status::Accepted => "Accepted",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::Closed => "Closed",
        }
    }

    /// Column accent color as RGB.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Status::New => (0x59, 0x77, 0x9F),
            Status::Accepted => (0xC4, 0xA8, 0x68),
            Status::InProgress => (0xA5, 0xB3, 0x68),
            Status::Completed => (0x4A, 0x8B, 0x6E),
            Status::Closed => (0x77, 0x77, 0x77),
        }
    }
}

/// A project card on the mock job board.
///
/// Covers both the seeded sample projects and the one the user assembles
/// during the form phases.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub client: String,
    pub task_type: String,
    pub task_type_color: (u8, u8, u8),
    pub crew: Option<String>,
    pub status: Status,
}

/// A selectable task type chip.
#[derive(Debug, Clone, Copy)]
pub struct TaskType {
    pub name: &'static str,
    pub color: (u8, u8, u8),
}

pub const TASK_TYPES: [TaskType; 7] = [
    TaskType { name: "Coating", color: (0x5A, 0x7B, 0xD4) },
    TaskType { name: "Paving", color: (0xB0, 0x88, 0xD4) },
    TaskType { name: "Installation", color: (0xD4, 0x7B, 0x9F) },
    TaskType { name: "Sealing", color: (0x8E, 0xC8, 0xE8) },
    TaskType { name: "Diagnostic", color: (0x5A, 0xC8, 0xD4) },
    TaskType { name: "Cleaning", color: (0xA5, 0xD4, 0xA0) },
    TaskType { name: "Demolition", color: (0xE8, 0x94, 0x5A) },
];

/// Fallback color for a user project whose task type is still unset.
pub const DEFAULT_TASK_COLOR: (u8, u8, u8) = (0x59, 0x77, 0x9F);

pub const CLIENTS: [&str; 4] = [
    "Miramar Flight Academy",
    "O'Club Bar & Grill",
    "Hard Deck Marina",
    "Fightertown Storage",
];

pub const CREW: [&str; 4] = ["Maverick", "Goose", "Iceman", "Phoenix"];

pub const DATE_OPTIONS: [&str; 3] = ["Today", "Tomorrow", "Next Week"];

/// Look up the chip color for a chosen task type name.
pub fn task_type_color(name: &str) -> (u8, u8, u8) {
    TASK_TYPES
        .iter()
        .find(|t| t.name == name)
        .map_or(DEFAULT_TASK_COLOR, |t| t.color)
}

/// The seeded board: a handful of believable jobs spread across columns.
pub fn sample_projects() -> Vec<Project> {
    let project = |name: &str, client: &str, task_type: &str, status: Status| Project {
        name: name.to_string(),
        client: client.to_string(),
        task_type: task_type.to_string(),
        task_type_color: task_type_color(task_type),
        crew: None,
        status,
    };

    vec![
        project("Hangar 3 Floor Sealing", "Miramar Flight Academy", "Sealing", Status::New),
        project("Flight Deck Coating", "Miramar Flight Academy", "Coating", Status::Accepted),
        project("O'Club Patio Resurface", "O'Club Bar & Grill", "Paving", Status::InProgress),
        project("Storage Bay Cleanout", "Fightertown Storage", "Cleaning", Status::InProgress),
        project("Dock Light Installation", "Hard Deck Marina", "Installation", Status::Completed),
        project("Runway Crack Diagnostic", "Miramar Flight Academy", "Diagnostic", Status::Closed),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_type_color_known_and_unknown() {
        assert_eq!(task_type_color("Coating"), (0x5A, 0x7B, 0xD4));
        assert_eq!(task_type_color("General"), DEFAULT_TASK_COLOR);
    }

    #[test]
    fn sample_board_touches_every_column() {
        let projects = sample_projects();
        for status in STATUS_COLUMNS {
            assert!(projects.iter().any(|p| p.status == status), "{}", status.label());
        }
    }
}
