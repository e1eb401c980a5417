use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shown on cards created without a due date.
pub const NO_DATE: &str = "No Date";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Value used in storage and in the priority `<select>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::Low => "priority-badge priority-low",
            Priority::Medium => "priority-badge priority-medium",
            Priority::High => "priority-badge priority-high",
        }
    }

    pub fn from_value(value: &str) -> Option<Priority> {
        match value {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![Priority::Low, Priority::Medium, Priority::High]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub priority: Priority,
    pub date: String,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        priority: Priority,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            priority,
            date: date.into(),
        }
    }
}

/// What the task form hands to the board when the user saves.
///
/// `due_date` is the raw value of an `<input type="date">` (`YYYY-MM-DD`),
/// or `None` when the field was left blank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub content: String,
    pub priority: Priority,
    pub due_date: Option<String>,
}

impl TaskDraft {
    pub fn new(content: impl Into<String>, priority: Priority, due_date: Option<String>) -> Self {
        Self {
            content: content.into(),
            priority,
            due_date,
        }
    }

    /// Prefills the form from an existing task. The stored date is a display
    /// string that a date input cannot show, so the date field starts blank and
    /// a blank date keeps the task's current date on save.
    pub fn from_task(task: &Task) -> Self {
        Self {
            content: task.content.clone(),
            priority: task.priority,
            due_date: None,
        }
    }

    /// Content with surrounding whitespace removed, `None` when nothing is left.
    pub fn trimmed_content(&self) -> Option<&str> {
        let content = self.content.trim();
        (!content.is_empty()).then_some(content)
    }

    pub fn display_date(&self) -> Option<String> {
        self.due_date.as_deref().and_then(format_due_date)
    }
}

/// Renders a `YYYY-MM-DD` input value as the short card label, e.g. `Oct 5`.
pub fn format_due_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date.format("%b %-d").to_string()),
        Err(e) => {
            log::warn!("Ignoring unparseable due date {:?}: {}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
        let parsed: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Priority::Low);
        assert!(serde_json::from_str::<Priority>("\"urgent\"").is_err());
    }

    #[test]
    fn priority_select_values_round_trip() {
        for priority in Priority::all() {
            assert_eq!(Priority::from_value(priority.as_str()), Some(priority));
        }
        assert_eq!(Priority::from_value("High"), None);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn formats_date_input_as_short_label() {
        assert_eq!(format_due_date("2024-10-05").as_deref(), Some("Oct 5"));
        assert_eq!(format_due_date("2025-01-24").as_deref(), Some("Jan 24"));
        assert_eq!(format_due_date("  "), None);
        assert_eq!(format_due_date("next tuesday"), None);
    }

    #[test]
    fn draft_from_task_leaves_date_blank() {
        let task = Task::new("t1", "Design System Update", Priority::High, "Oct 24");
        let draft = TaskDraft::from_task(&task);
        assert_eq!(draft.content, "Design System Update");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.due_date, None);
    }

    #[test]
    fn blank_content_is_rejected() {
        assert_eq!(TaskDraft::new("   ", Priority::Low, None).trimmed_content(), None);
        assert_eq!(
            TaskDraft::new("  Ship it ", Priority::Low, None).trimmed_content(),
            Some("Ship it")
        );
    }
}
