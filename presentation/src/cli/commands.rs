//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for warband-quiz
#[derive(Parser, Debug)]
#[command(name = "warband-quiz")]
#[command(author, version, about = "Find out which Warhammer 40K faction you align with")]
#[command(long_about = r#"
Warband Quiz asks a series of multiple-choice questions, tallies which
faction each answer leans toward, and reports your dominant alignment with
a percentage breakdown. Results are saved to a text file after every run.

Type the number of an option and press Enter to answer. Press Esc at any
prompt to leave.

Configuration files are loaded from (in priority order):
1. WARBAND_* environment variables (e.g. WARBAND_QUIZ__RESULT_PATH)
2. --config <path>     Explicit config file
3. ./warband.toml      Project-level config
4. ~/.config/warband-quiz/config.toml   Global config
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
