use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::nav::{NavConfig, TransitionPolicy};

#[derive(Parser, Debug)]
#[command(name = "fadequiz", version, about = "Terminal quiz with fade transitions")]
pub struct Cli {
    /// Questions file (YAML) [default: bundled questions]
    pub questions: Option<PathBuf>,

    /// Length of the cross-fade between screens, in milliseconds
    #[arg(long, value_name = "ms", default_value_t = 300)]
    pub fade_ms: u64,

    /// Switch screens instantly
    #[arg(long)]
    pub no_animation: bool,

    /// Ignore navigation keys while a fade is playing instead of queueing them
    #[arg(long)]
    pub reject_overlap: bool,

    /// Validate the questions file and print a summary without entering the TUI
    #[arg(long)]
    pub check: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn nav_config(&self) -> NavConfig {
        NavConfig {
            fade: Duration::from_millis(self.fade_ms),
            policy: if self.reject_overlap {
                TransitionPolicy::Reject
            } else {
                TransitionPolicy::Queue
            },
            animated: !self.no_animation,
        }
    }
}
