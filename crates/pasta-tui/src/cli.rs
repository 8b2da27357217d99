// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use pasta_app::Config;

#[derive(Debug, Parser)]
#[command(name = "pasta-league")]
#[command(about = "Pasta League standings from a public Google Sheet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing config/ and defaults/ (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Print the tables as plain text and exit instead of opening the dashboard
    #[arg(long)]
    pub print: bool,

    /// Number of leaderboard entries, overriding display.top_n
    #[arg(long, value_name = "N", value_parser = parse_top)]
    pub top: Option<usize>,
}

impl Cli {
    /// Fold command-line overrides into the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(top) = self.top {
            config.display.top_n = top;
        }
    }
}

fn parse_top(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
