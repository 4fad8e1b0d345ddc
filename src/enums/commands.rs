use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::severity_filter::SeverityFilter;
use crate::enums::sort_key::SortKey;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Upload a spreadsheet and report the issues found
    Validate {
        file: PathBuf,
        #[clap(long, value_enum, default_value_t = SeverityFilter::All)]
        severity: SeverityFilter,
        #[clap(short, long, default_value = "")]
        search: String,
        #[clap(long, value_enum, default_value_t = SortKey::Row)]
        sort: SortKey,
        #[clap(short, long)]
        export: bool,
        #[clap(long)]
        export_dir: Option<PathBuf>,
        #[clap(long)]
        service_url: Option<String>,
        #[clap(short, long)]
        limit: Option<usize>,
    },
    /// Serve the browser dashboard
    Dashboard {
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        no_browser: bool,
        #[clap(long)]
        service_url: Option<String>,
    },
    /// Check that the validation service is reachable
    Health {
        #[clap(long)]
        service_url: Option<String>,
    },
}
