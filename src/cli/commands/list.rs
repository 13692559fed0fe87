use crate::cli::parser::Commands;
use crate::core::sort::display_order;
use crate::errors::AppResult;
use crate::models::task::Task;
use crate::store::Store;
use crate::ui::messages::muted;
use crate::utils::colors::{RESET, color_for_priority, colorize_status};
use crate::utils::formatting::status_glyph;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::List {
        pending,
        completed,
        compact,
    } = cmd
    {
        render_task_list(store, *pending, *completed, *compact)?;
    }
    Ok(())
}

/// Shared by `list` and `show tasks`.
pub(crate) fn render_task_list(
    store: &Store,
    pending: bool,
    completed: bool,
    compact: bool,
) -> AppResult<()> {
    let settings = store.load_settings()?;
    let tasks = store.load_tasks()?;

    let ordered = if settings.auto_sort {
        display_order(&tasks)
    } else {
        tasks
    };

    let visible: Vec<&Task> = ordered
        .iter()
        .filter(|t| {
            if pending {
                !t.completed
            } else if completed {
                t.completed
            } else {
                true
            }
        })
        .collect();

    if visible.is_empty() {
        muted("All Clear. Ready for what's next?");
        return Ok(());
    }

    if compact || settings.compact_mode {
        print_compact(&visible);
    } else {
        print_table(&visible);
    }

    Ok(())
}

fn print_compact(tasks: &[&Task]) {
    for t in tasks {
        let color = color_for_priority(t.priority);
        let line = format!("{} {} {}{}", status_glyph(t.completed), t.id, t.text, RESET);
        println!("{color}{}", colorize_status(&line, t.completed));
    }
}

fn print_table(tasks: &[&Task]) {
    let mut table = Table::new(
        ["ID", "ST", "PRI", "LABEL", "TEXT", "CREATED"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    for t in tasks {
        table.add_row(vec![
            t.id.to_string(),
            status_glyph(t.completed).to_string(),
            t.priority.as_str().to_string(),
            t.label.map(|l| l.as_str().to_string()).unwrap_or_default(),
            t.text.clone(),
            t.created_date_str(),
        ]);
    }

    print!("{}", table.render());

    let open = tasks.iter().filter(|t| !t.completed).count();
    println!("\n{} open / {} total", open, tasks.len());
}
