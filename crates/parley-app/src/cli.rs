use std::path::PathBuf;

use clap::Parser;

/// Parley, a terminal chat client for hosted language models.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug` or `parley_ai=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Switch to this persona on startup. Clears the conversation when it
    /// differs from the persisted one.
    #[arg(short = 'p', long)]
    pub persona: Option<String>,

    /// Keep the conversation in memory only.
    #[arg(long)]
    pub ephemeral: bool,

    /// Directory for the persisted conversation.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
