use crate::cli::parser::Commands;
use crate::core::activity::ActivityLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::info;

/// Print the activity log.
pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            ActivityLogic::print_log(store)?;
        } else {
            info("Use 'done log --print' to show the activity log.");
        }
    }
    Ok(())
}
