use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Interactive in-memory folder tree.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Name of the root folder. Prompted for when omitted
    #[clap(long)]
    pub root_name: Option<String>,

    /// YAML file describing folders and files to start with
    #[clap(long, short)]
    pub seed: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Disable coloured output
    #[clap(long)]
    pub no_color: bool,
}
