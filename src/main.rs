use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spopcli::{cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check popularity for a pasted list of track links
    Check(CheckOptions),

    /// Search tracks by name and show their popularity
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CheckOptions {
    /// File containing track links, one per line; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Fetch mode: 'batch' (50 tracks per call) or 'singleton' (one call per
    /// track, rate-limit friendly)
    #[clap(long, default_value = "batch", value_parser = utils::parse_fetch_mode)]
    pub mode: utils::FetchMode,

    /// Delay between consecutive singleton calls, in milliseconds
    #[clap(long, default_value_t = 250)]
    pub delay_ms: u64,

    /// Maximum number of track links accepted per run
    #[clap(long, default_value_t = utils::DEFAULT_TRACK_LIMIT)]
    pub limit: usize,

    /// Path of the exported CSV file
    #[clap(long, default_value = spopcli::export::CSV_FILE_NAME)]
    pub output: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Track name to search for
    pub query: String,

    /// Narrow the search to a specific artist
    #[clap(long)]
    pub artist: Option<String>,

    /// Maximum number of matches to show
    #[clap(long, default_value_t = 5)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Check(opt) => {
            cli::check(opt.input, opt.mode, opt.delay_ms, opt.limit, opt.output).await
        }
        Command::Search(opt) => cli::search(opt.query, opt.artist, opt.limit).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
