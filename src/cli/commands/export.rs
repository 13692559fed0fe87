use crate::cli::parser::{Cli, Commands};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::{Store, log::dlog};

/// Export the store content to a file.
pub fn handle(cli: &Cli, store: &Store) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = &cli.command
    {
        ExportLogic::export(store, format.clone(), file, range, *force || cli.test)?;

        let _ = dlog(
            store,
            "export",
            file,
            &format!("Exported as {}", format.as_str()),
        );
    }
    Ok(())
}
