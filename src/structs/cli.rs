use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "sheetval")]
#[clap(about = "Validate project spreadsheets against a remote validation service", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
