use crate::cli::parser::{Commands, WorkerAction};
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::Worker;
use crate::store::JsonStore;
use crate::ui::messages::{confirm, info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Worker { action } = cmd {
        let store = JsonStore::new(&cfg.data_file);
        let mut ledger = Ledger::new(store.load()?);

        match action {
            WorkerAction::Add {
                name,
                role,
                daily_rate,
                hourly_rate,
            } => {
                if *daily_rate < 0.0 {
                    return Err(AppError::InvalidAmount(daily_rate.to_string()));
                }
                if *hourly_rate < 0.0 {
                    return Err(AppError::InvalidAmount(hourly_rate.to_string()));
                }

                let worker = Worker::new(name, role, *daily_rate, *hourly_rate);
                let id = worker.id.clone();
                ledger.add_worker(worker)?;
                store.save(ledger.state())?;
                success(format!("Worker '{name}' added with id {id}"));
            }

            WorkerAction::List => {
                if ledger.workers().is_empty() {
                    info("No workers registered yet.");
                    return Ok(());
                }

                let mut table = Table::new(vec![
                    Column::left("id", 36),
                    Column::left("name", 20),
                    Column::left("role", 14),
                    Column::right("daily", 10),
                    Column::right("hourly", 10),
                ]);

                for w in ledger.workers() {
                    table.add_row(vec![
                        w.id.clone(),
                        w.name.clone(),
                        w.role.clone(),
                        format!("{:.2}", w.daily_rate),
                        format!("{:.2}", w.hourly_rate),
                    ]);
                }

                println!("{}", table.render());
            }

            WorkerAction::Del { id, yes } => {
                let worker = ledger.require_worker(id)?;
                let name = worker.name.clone();

                if !*yes
                    && !confirm(&format!(
                        "Delete worker '{name}' and ALL of their log entries? This action is irreversible."
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }

                let removed = ledger.delete_worker(id)?;
                store.save(ledger.state())?;
                success(format!(
                    "Worker '{name}' deleted along with {removed} log entries."
                ));
            }
        }
    }

    Ok(())
}
