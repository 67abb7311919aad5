use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "tier list rankings viewer")]
pub struct Cli {
    /// Base URL of the rankings API (overrides TIERLIST_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Print screens as JSON instead of colored text
    #[arg(long, global = true)]
    pub json: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Show the ranking for a mode
    Rankings {
        /// Mode to rank by (overall, Mace, Sword, UHC, ...)
        #[arg(short, long, default_value = "overall")]
        mode: String,
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the tier detail card of a single player
    Player {
        /// Player id as returned by the rankings endpoint
        id: String,
    },
    /// Re-fetch and re-render a ranking periodically
    Watch {
        #[arg(short, long, default_value = "overall")]
        mode: String,
        #[arg(short, long)]
        search: Option<String>,
        /// Seconds between refreshes (defaults to the configured interval)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
        /// Stop after this many refreshes
        #[arg(short, long)]
        cycles: Option<usize>,
    },
}
