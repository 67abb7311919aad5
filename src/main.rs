use anyhow::Result;

use tierlist_viewer::cli::{Cli, Command};
use tierlist_viewer::config::AppConfig;
use tierlist_viewer::rendering::OutputFormat;
use tierlist_viewer::{handle_player, handle_rankings, handle_watch, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = AppConfig::load(cli.api_url.as_deref());
    let format = OutputFormat::from_json_flag(cli.json);

    match &cli.command {
        Command::Rankings { mode, search } => handle_rankings(config, format, mode, search.as_deref()),
        Command::Player { id } => handle_player(config, format, id),
        Command::Watch {
            mode,
            search,
            interval,
            cycles,
        } => handle_watch(config, format, mode, search.as_deref(), *interval, *cycles),
    }
}
