use crate::cli::commands::import::print_candidates;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::import::scan::{CommandExtractor, Extractor, normalize};
use crate::import::to_daily_logs;
use crate::store::JsonStore;
use crate::ui::messages::{confirm, info, success, warning};
use std::fs;

const PROVENANCE: &str = "image scan";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { image, worker, yes } = cmd {
        let command = cfg.scan_command.as_deref().ok_or_else(|| {
            AppError::Config(
                "scan_command is not set; add it to the config file to enable `scan`".to_string(),
            )
        })?;

        let store = JsonStore::new(&cfg.data_file);
        let mut ledger = Ledger::new(store.load()?);
        let w = ledger.require_worker(worker)?.clone();

        let bytes = fs::read(image)?;

        let extractor = CommandExtractor::new(command);
        let rows = match extractor.extract(&bytes) {
            Ok(rows) => rows,
            Err(e @ AppError::Extraction(_)) => {
                warning("The extraction service failed; the same command can be retried as-is.");
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let candidates = normalize(rows);
        print_candidates(&candidates);

        if !*yes
            && !confirm(&format!(
                "Add {} extracted entries to {}'s ledger?",
                candidates.len(),
                w.name
            ))
        {
            info("Scan import cancelled; nothing was saved.");
            return Ok(());
        }

        let logs = to_daily_logs(&candidates, &w, PROVENANCE);
        let n = logs.len();
        ledger.add_logs(logs);
        store.save(ledger.state())?;

        success(format!("Imported {} extracted entries for {}.", n, w.name));
    }

    Ok(())
}
