use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file, yes } = cmd {
        // Validate the backup in full before touching the current state:
        // restore is all-or-nothing.
        let doc = BackupLogic::read(file)?;

        let store = JsonStore::new(&cfg.data_file);
        let mut ledger = Ledger::new(store.load()?);

        if !*yes
            && !confirm(&format!(
                "Replace the current ledger ({} workers, {} logs) with the backup ({} workers, {} logs)?",
                ledger.workers().len(),
                ledger.logs().len(),
                doc.workers.len(),
                doc.logs.len()
            ))
        {
            info("Restore cancelled; current data untouched.");
            return Ok(());
        }

        ledger.replace_all(doc.into_state());
        store.save(ledger.state())?;
        success("Backup restored.");
    }

    Ok(())
}
