use crate::errors::AppResult;
use crate::store::{Store, log};
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color per operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" | "wipe" => Colour::Red,
        "toggle" | "edit" | "priority" => Colour::Yellow,
        "import" => Colour::Purple,
        "export" | "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct ActivityLogic;

impl ActivityLogic {
    pub fn print_log(store: &Store) -> AppResult<()> {
        let entries = log::read_all(store)?;

        if entries.is_empty() {
            println!("Activity log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };

                (date, e.operation.clone(), op_target, e.message.clone())
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, op_target, _)| op_target.len())
            .max()
            .unwrap_or(10)
            .min(60);

        let date_w = rows.iter().map(|(date, ..)| date.len()).max().unwrap_or(0);

        println!("📜 Activity log:\n");

        for (date, operation, op_target, message) in rows {
            let color = color_for_operation(&operation);

            // truncate to 60 visible chars before coloring
            let visible = if op_target.len() > 60 {
                let mut s = op_target.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is colored
            let colored = if let Some((op_word, rest)) = visible.split_once(' ') {
                format!("{} {}", color.paint(op_word), rest)
            } else {
                color.paint(visible.as_str()).to_string()
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

            println!("{date:<date_w$} | {colored}{padding} => {message}");
        }

        Ok(())
    }
}
