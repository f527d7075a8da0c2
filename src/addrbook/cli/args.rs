use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "Interactive address book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Address book file (overrides `data_file` from the config)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Count birthdays that already passed this year as next year's
    #[arg(long)]
    pub rollover: bool,

    /// Treat this date (YYYY-MM-DD) as today for `birthdays`
    #[arg(long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
