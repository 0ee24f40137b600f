use std::path::PathBuf;

use clap::Parser;
use wdg_common::Align;

/// wdg-demo — bordered windows in the terminal.
///
/// Tab / Shift-Tab move the focus, the quit key (default `q`) closes the
/// focused window and Esc leaves.
#[derive(Parser, Debug)]
#[command(name = "wdg-demo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Window title; each window gets its number appended.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Title alignment (left, center, right).
    #[arg(short, long)]
    pub align: Option<Align>,

    /// Number of side-by-side windows.
    #[arg(short = 'n', long, default_value_t = 2,
          value_parser = clap::value_parser!(u8).range(1..=9))]
    pub windows: u8,
}

pub fn parse() -> Args {
    Args::parse()
}
