use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = JsonStore::new(&cfg.data_file);
        let ledger = Ledger::new(store.load()?);

        let final_path = BackupLogic::export(ledger.state(), file, *compress, *force)?;
        success(format!("Backup created: {}", final_path.display()));
    }

    Ok(())
}
