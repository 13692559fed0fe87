use crate::cli::parser::Commands;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::store::Store;
use crate::utils::path::expand_tilde;

/// Import an archive file.
pub fn handle(cmd: &Commands, store: &Store) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        ImportLogic::apply(store, &path)?;
    }
    Ok(())
}
