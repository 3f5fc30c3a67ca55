use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::JsonStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = JsonStore::new(&cfg.data_file);
        let ledger = Ledger::new(store.load()?);

        ExportLogic::export(ledger.state(), format.clone(), file, range, *force)?;
    }

    Ok(())
}
