use crate::cli::parser::{Commands, LogAction};
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::DailyLog;
use crate::store::JsonStore;
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { action } = cmd {
        let store = JsonStore::new(&cfg.data_file);
        let mut ledger = Ledger::new(store.load()?);

        match action {
            LogAction::Add {
                worker,
                date: date_arg,
                task,
                absent,
                ot,
                ot_rate,
                advance,
                note,
            } => {
                let day = match date_arg {
                    Some(s) => date::parse_date(s)
                        .ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                    None => date::today(),
                };

                if *ot < 0.0 || *advance < 0.0 || ot_rate.is_some_and(|r| r < 0.0) {
                    return Err(AppError::InvalidAmount(
                        "overtime, rate and advance must be non-negative".to_string(),
                    ));
                }

                let w = ledger.require_worker(worker)?.clone();
                let entry = DailyLog::for_worker(
                    &w,
                    &date::fmt_date(day),
                    task,
                    !*absent,
                    *ot,
                    *ot_rate,
                    *advance,
                    note,
                );

                let earned = entry.total_earnings;
                ledger.add_log(entry);
                store.save(ledger.state())?;
                success(format!(
                    "Logged {} for {}: earned {:.2}, advance {:.2}",
                    date::fmt_date(day),
                    w.name,
                    earned,
                    advance
                ));
            }

            LogAction::Del { id, yes } => {
                if !*yes
                    && !confirm(&format!(
                        "Delete log entry {id}? This action is irreversible."
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }

                ledger.delete_log(id)?;
                store.save(ledger.state())?;
                success(format!("Log entry {id} deleted."));
            }
        }
    }

    Ok(())
}
