use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the config directory, the config file (unless in test mode) and
/// an empty data document.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.data.clone(), cli.test)?;
    Ok(())
}
