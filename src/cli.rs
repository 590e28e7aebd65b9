use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq, Default)]
#[command(name = "gpacalc")]
#[command(about = "GPA Calculator - project your cumulative GPA at the end of the semester")]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pre-fill the current GPA field
    #[arg(long)]
    pub gpa: Option<String>,

    /// Pre-fill the credits taken field
    #[arg(long)]
    pub credits: Option<String>,

    /// Start with a handful of sample courses
    #[arg(long)]
    pub demo: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
