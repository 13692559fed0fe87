use crate::cli::parser::{Cli, Commands};
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::Store;

/// Create a backup copy of the store.
pub fn handle(cli: &Cli, store: &Store) -> AppResult<()> {
    if let Commands::Backup { file, compress } = &cli.command {
        BackupLogic::backup(store, file, *compress, cli.test)?;
    }
    Ok(())
}
