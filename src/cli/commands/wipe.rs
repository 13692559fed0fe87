use crate::cli::parser::{Cli, Commands};
use crate::errors::AppResult;
use crate::store::{Store, log::dlog};
use crate::ui::messages::{success, warning};
use std::io::{Write, stdin, stdout};

/// Wipe everything: delete all tasks and reset settings to defaults.
pub fn handle(cli: &Cli, store: &Store) -> AppResult<()> {
    if let Commands::Wipe { yes } = &cli.command {
        if !yes && !cli.test {
            warning("This deletes every task and resets all settings.");
            print!("Wipe everything? [y/N]: ");
            stdout().flush().ok();

            let mut answer = String::new();
            stdin().read_line(&mut answer)?;
            let answer = answer.trim().to_lowercase();

            if !(answer == "y" || answer == "yes") {
                println!("Wipe cancelled.");
                return Ok(());
            }
        }

        store.wipe()?;
        let _ = dlog(store, "wipe", "", "All data wiped");
        success("All data wiped. Settings reset to defaults.");
    }
    Ok(())
}
