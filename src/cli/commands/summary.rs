use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { days } = cmd {
        let store = JsonStore::new(&cfg.data_file);
        let ledger = Ledger::new(store.load()?);
        let logs = ledger.logs();

        println!();
        println!(
            "{}• Total earnings:{}  {}{:.2}{}",
            CYAN,
            RESET,
            GREEN,
            aggregate::total_earnings(logs),
            RESET
        );
        println!(
            "{}• Total advances:{}  {}{:.2}{}",
            CYAN,
            RESET,
            RED,
            aggregate::total_advances(logs),
            RESET
        );
        println!(
            "{}• Net balance:{}     {:.2}",
            CYAN,
            RESET,
            aggregate::net_balance(logs)
        );
        println!(
            "{}• Overtime hours:{}  {}{:.1}{}",
            CYAN,
            RESET,
            YELLOW,
            aggregate::total_overtime_hours(logs),
            RESET
        );
        println!();

        // Daily flow, oldest first, zero days included.
        println!("Last {days} days:");
        let mut flow = Table::new(vec![
            Column::left("date", 10),
            Column::right("earned", 9),
            Column::right("advances", 9),
        ]);
        for bucket in aggregate::trailing_days(logs, *days, date::today()) {
            flow.add_row(vec![
                bucket.date,
                format!("{:.2}", bucket.earnings),
                format!("{:.2}", bucket.advances),
            ]);
        }
        println!("{}", flow.render());

        // Worker balances, highest first.
        let summary = aggregate::per_worker_summary(ledger.workers(), logs);
        if summary.is_empty() {
            println!("{GREY}No workers registered yet.{RESET}");
            return Ok(());
        }

        println!("Worker balances:");
        let mut balances = Table::new(vec![
            Column::left("name", 20),
            Column::left("role", 14),
            Column::right("earned", 10),
            Column::right("advanced", 10),
            Column::right("balance", 10),
        ]);
        for line in summary {
            balances.add_row(vec![
                line.name,
                line.role,
                format!("{:.2}", line.earned),
                format!("{:.2}", line.advanced),
                format!("{:.2}", line.balance),
            ]);
        }
        println!("{}", balances.render());
    }

    Ok(())
}
