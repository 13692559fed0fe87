use crate::cli::parser::Commands;
use crate::core::insights::Insights;
use crate::errors::AppResult;
use crate::models::view::{NavState, View};
use crate::store::Store;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};
use crate::utils::date;
use crate::utils::formatting::describe_label;

/// Render one of the three panels.
pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Show { view } = cmd {
        let mut nav = NavState::new();
        nav.select(*view);

        match nav.view {
            View::Tasks => super::list::render_task_list(store, false, false, false)?,
            View::Insights => render_insights(store)?,
            View::Settings => render_settings(store)?,
        }
    }
    Ok(())
}

fn render_insights(store: &Store) -> AppResult<()> {
    let tasks = store.load_tasks()?;
    let insights = Insights::build(&tasks, date::today());

    header("Insights");
    println!();
    println!(
        "  {}Efficiency{}     {}%",
        CYAN, RESET, insights.completion_rate
    );
    println!("  {}Streak{}         {} days", CYAN, RESET, insights.streak);
    println!("  {}Finished{}       {}", CYAN, RESET, insights.completed);
    println!(
        "  {}Priority Hits{}  {}",
        CYAN, RESET, insights.high_priority
    );
    println!();

    let labelled: Vec<String> = insights
        .label_counts
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(label, n)| {
            let (name, color) = describe_label(*label);
            format!("{color}{name}{RESET}: {n}")
        })
        .collect();

    if !labelled.is_empty() {
        println!("  Labels: {}", labelled.join("  "));
        println!();
    }

    // trailing week, today rightmost
    println!("  Last 7 days:");
    let chart = &insights.weekly;
    for (i, (label, count)) in chart.labels.iter().zip(chart.counts.iter()).enumerate() {
        let bar = "▇".repeat(*count as usize);
        let today_mark = if i == 6 { " ← today" } else { "" };
        println!(
            "    {label} {GREEN}{bar}{RESET} {}{}{}{today_mark}",
            if *count == 0 { GREY } else { RESET },
            count,
            RESET
        );
    }
    println!();

    Ok(())
}

fn render_settings(store: &Store) -> AppResult<()> {
    let settings = store.load_settings()?;

    header("Settings");
    match serde_yaml::to_string(&settings) {
        Ok(yaml) => print!("{yaml}"),
        Err(e) => return Err(crate::errors::AppError::Config(e.to_string())),
    }

    Ok(())
}
