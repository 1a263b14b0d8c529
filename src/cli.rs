use clap::Parser;

/// Console Wordle game CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word-list file (defaults to the embedded list)
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Seed for secret-word selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
