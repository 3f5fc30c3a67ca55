use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::DailyLog;
use crate::store::JsonStore;
use crate::ui::messages::info;
use crate::utils::date::parse_date;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { worker, period } = cmd {
        let store = JsonStore::new(&cfg.data_file);
        let ledger = Ledger::new(store.load()?);

        let bounds: Option<(NaiveDate, NaiveDate)> = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_range(p)?),
        };

        // The general ledger tolerates dangling references and shows them
        // with a placeholder; a worker-scoped view excludes them, so
        // scoping to an id with no matching worker yields an empty view.
        let rows: Vec<&DailyLog> = ledger
            .logs()
            .iter()
            .filter(|l| match worker.as_deref() {
                None => true,
                Some(id) => l.worker_id == id && ledger.worker(id).is_some(),
            })
            .filter(|l| match bounds {
                None => true,
                Some((start, end)) => {
                    parse_date(&l.date).is_some_and(|d| d >= start && d <= end)
                }
            })
            .collect();

        if rows.is_empty() {
            info("No log entries found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("id", 36),
            Column::left("date", 10),
            Column::left("worker", 16),
            Column::left("task", 20),
            Column::left("day", 3),
            Column::right("ot", 6),
            Column::right("advance", 9),
            Column::right("earned", 9),
        ]);

        for l in &rows {
            let name = ledger
                .worker(&l.worker_id)
                .map(|w| w.name.clone())
                .unwrap_or_else(|| "(deleted)".to_string());

            table.add_row(vec![
                l.id.clone(),
                l.date.clone(),
                name,
                l.task_name.clone(),
                if l.is_present { "yes" } else { "no" }.to_string(),
                format!("{:.1}", l.ot_hours),
                format!("{:.2}", l.advance_amount),
                format!("{:.2}", l.total_earnings),
            ]);
        }

        println!("{}", table.render());

        let flat: Vec<DailyLog> = rows.into_iter().cloned().collect();
        println!(
            "{} entries | earned {:.2} | advances {:.2} | net {:.2}",
            flat.len(),
            aggregate::total_earnings(&flat),
            aggregate::total_advances(&flat),
            aggregate::net_balance(&flat)
        );
    }

    Ok(())
}
