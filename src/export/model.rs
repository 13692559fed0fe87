use crate::models::task::Task;
use crate::utils::formatting::status_glyph;
use serde::Serialize;

/// Flat row shape shared by the table exports (csv/xlsx/pdf).
#[derive(Serialize, Clone, Debug)]
pub struct TaskExport {
    pub id: i64,
    pub status: &'static str,
    pub text: String,
    pub priority: &'static str,
    pub label: String,
    pub mood: String,
    pub created: String,
    pub completed: String,
}

impl TaskExport {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            status: status_glyph(task.completed),
            text: task.text.clone(),
            priority: task.priority.as_str(),
            label: task.label.map(|l| l.as_str().to_string()).unwrap_or_default(),
            mood: task.mood.clone().unwrap_or_default(),
            created: task.created_date_str(),
            completed: task.completed_date_str(),
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "status",
        "text",
        "priority",
        "label",
        "mood",
        "created",
        "completed",
    ]
}

pub(crate) fn task_to_row(t: &TaskExport) -> Vec<String> {
    vec![
        t.id.to_string(),
        t.status.to_string(),
        t.text.clone(),
        t.priority.to_string(),
        t.label.clone(),
        t.mood.clone(),
        t.created.clone(),
        t.completed.clone(),
    ]
}

pub(crate) fn tasks_to_table(tasks: &[TaskExport]) -> Vec<Vec<String>> {
    tasks.iter().map(task_to_row).collect()
}
