//! Built-in sample board
//!
//! `demo_tasks()` is the board a fresh workspace opens with: five tasks
//! spread across the default columns, owned by the three sample users.

use crate::store::BoardStore;
use crate::types::{ActorId, Comment, HistoryEntry, Priority, Task, TaskFields, TaskId};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed seed timestamp; falls back to now if the components are invalid
fn seed_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn seed(id: u64, fields: TaskFields, status: &str) -> Task {
    Task::from_fields(TaskId::new(id), &fields, status)
}

/// The five sample tasks, ids 1 through 5
pub fn demo_tasks() -> Vec<Task> {
    let admin = ActorId::from("admin@example.com");

    let mut landing = seed(
        1,
        TaskFields::new("Design new landing page", "2024-08-15")
            .with_description("Create mockups and wireframes for the new V2 landing page.")
            .with_assignee("jane.doe@example.com")
            .with_priority(Priority::High)
            .with_tags("UI/UX, High Priority"),
        "In Progress",
    )
    .with_attachment("/placeholder.svg");
    landing.comments.push(Comment {
        author: admin.clone(),
        text: "Let's use a blue color scheme.".into(),
        timestamp: seed_time(2024, 8, 1, 10, 0),
    });
    landing.history.push(HistoryEntry::at(
        admin,
        "Created task",
        seed_time(2024, 7, 30, 9, 0),
    ));

    vec![
        landing,
        seed(
            2,
            TaskFields::new("Develop authentication flow", "2024-08-20")
                .with_description("Implement JWT-based authentication for the backend API.")
                .with_assignee("jane.doe@example.com")
                .with_priority(Priority::High)
                .with_tags("Backend, Security"),
            "In Progress",
        ),
        seed(
            3,
            TaskFields::new("Setup CI/CD pipeline", "2024-08-10")
                .with_description("Configure GitHub Actions for automated testing and deployment.")
                .with_assignee("admin@example.com")
                .with_priority(Priority::Medium)
                .with_tags("DevOps"),
            "Done",
        ),
        seed(
            4,
            TaskFields::new("Write API documentation", "2024-08-25")
                .with_description("Use Swagger/OpenAPI to document all API endpoints.")
                .with_assignee("john.smith@example.com")
                .with_priority(Priority::Medium)
                .with_tags("Documentation"),
            "To Do",
        ),
        seed(
            5,
            TaskFields::new("Plan Q4 marketing campaign", "2024-09-01")
                .with_description("Outline strategy, budget, and KPIs for the upcoming quarter.")
                .with_assignee("john.smith@example.com")
                .with_priority(Priority::Low)
                .with_tags("Marketing, Strategy"),
            "To Do",
        ),
    ]
}

impl BoardStore {
    /// A board with the default columns and the sample tasks
    pub fn demo() -> Self {
        let mut store = Self::default();
        for task in demo_tasks() {
            store.insert_task(task);
        }
        store
    }
}
