use crate::errors::AppResult;
use crate::export::{TaskExport, notify_export_success};
use crate::ui::messages::info;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Human-readable plain-text listing: one task per line with status glyph,
/// text, label, priority and timestamps.
pub(crate) fn export_txt(tasks: &[TaskExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to TXT: {}", path.display()));

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!(
        "Exported {}\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&"=".repeat(title.len().max(20)));
    out.push_str("\n\n");

    for t in tasks {
        out.push_str(&format!("{} {}", t.status, t.text));

        let mut meta = Vec::new();
        if !t.label.is_empty() {
            meta.push(format!("#{}", t.label));
        }
        if t.priority != "normal" {
            meta.push(t.priority.to_string());
        }
        if !t.mood.is_empty() {
            meta.push(format!("mood: {}", t.mood));
        }
        meta.push(format!("created {}", t.created));
        if !t.completed.is_empty() {
            meta.push(format!("completed {}", t.completed));
        }

        out.push_str(&format!("\n    {}\n", meta.join(" · ")));
    }

    out.push_str(&format!("\n{} tasks\n", tasks.len()));

    let mut file = File::create(path)?;
    file.write_all(out.as_bytes())?;

    notify_export_success("TXT", path);
    Ok(())
}
