use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::import::note::ImportRules;
use crate::import::tabular::{normalize_rows, read_csv_rows};
use crate::import::{CandidateRow, to_daily_logs};
use crate::store::JsonStore;
use crate::ui::messages::{confirm, info, success};
use crate::utils::table::{Column, Table};
use std::path::Path;

const PROVENANCE: &str = "csv import";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, worker, yes } = cmd {
        let rules = ImportRules::from_config(cfg)?;
        let store = JsonStore::new(&cfg.data_file);
        let mut ledger = Ledger::new(store.load()?);

        let w = ledger.require_worker(worker)?.clone();

        let rows = read_csv_rows(Path::new(file))?;
        let candidates = normalize_rows(&rows, &rules)?;

        print_candidates(&candidates);

        // Candidates are only ever persisted after explicit confirmation.
        if !*yes
            && !confirm(&format!(
                "Add {} entries to {}'s ledger?",
                candidates.len(),
                w.name
            ))
        {
            info("Import cancelled; nothing was saved.");
            return Ok(());
        }

        let logs = to_daily_logs(&candidates, &w, PROVENANCE);
        let n = logs.len();
        ledger.add_logs(logs);
        store.save(ledger.state())?;

        success(format!("Imported {} entries for {}.", n, w.name));
    }

    Ok(())
}

pub(crate) fn print_candidates(candidates: &[CandidateRow]) {
    let mut table = Table::new(vec![
        Column::left("date", 12),
        Column::left("task", 24),
        Column::left("day", 3),
        Column::right("ot", 6),
        Column::right("received", 9),
        Column::right("advance", 9),
    ]);

    for c in candidates {
        table.add_row(vec![
            c.date.clone(),
            c.task_name.clone(),
            if c.is_present { "yes" } else { "no" }.to_string(),
            format!("{:.1}", c.ot_hours),
            format!("{:.2}", c.total_earnings),
            format!("{:.2}", c.advance_amount),
        ]);
    }

    println!("{}", table.render());
}
