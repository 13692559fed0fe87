use super::Store;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::fmt_ms;
use std::fs;

/// Print the store report: file locations, sizes, task counts, id range.
pub fn print_store_info(store: &Store) -> AppResult<()> {
    println!();

    let tasks_path = store.tasks_file();
    let settings_path = store.settings_file();

    let tasks_size = fs::metadata(&tasks_path).map(|m| m.len()).unwrap_or(0);
    let settings_size = fs::metadata(&settings_path).map(|m| m.len()).unwrap_or(0);

    println!(
        "{}• Tasks file:{} {}{}{} ({} bytes)",
        CYAN,
        RESET,
        YELLOW,
        tasks_path.display(),
        RESET,
        tasks_size
    );
    println!(
        "{}• Settings file:{} {}{}{} ({} bytes)",
        CYAN,
        RESET,
        YELLOW,
        settings_path.display(),
        RESET,
        settings_size
    );

    let tasks = store.load_tasks()?;
    let completed = tasks.iter().filter(|t| t.completed).count();

    println!(
        "{}• Total tasks:{} {}{}{} ({} completed)",
        CYAN,
        RESET,
        GREEN,
        tasks.len(),
        RESET,
        completed
    );

    let first = tasks.iter().map(|t| t.id).min();
    let last = tasks.iter().map(|t| t.id).max();

    let fmt_first = first.map(fmt_ms).unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.map(fmt_ms).unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Created between:{}", CYAN, RESET);
    println!("    first: {}", fmt_first);
    println!("    last:  {}", fmt_last);

    println!();
    Ok(())
}

/// Validate that both records parse; report per-file results.
pub fn check_store(store: &Store) -> AppResult<bool> {
    let mut ok = true;

    match store.load_tasks() {
        Ok(tasks) => println!("{GREEN}✔{RESET} tasks record OK ({} tasks)", tasks.len()),
        Err(e) => {
            ok = false;
            println!("{}✘ tasks record: {}{}", crate::utils::colors::RED, e, RESET);
        }
    }

    match store.load_settings() {
        Ok(_) => println!("{GREEN}✔{RESET} settings record OK"),
        Err(e) => {
            ok = false;
            println!("{}✘ settings record: {}{}", crate::utils::colors::RED, e, RESET);
        }
    }

    Ok(ok)
}
