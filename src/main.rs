//! sysglance - One-second host metrics dashboard.
//!
//! Samples CPU, memory, and root-filesystem utilization once per second and
//! renders them as fixed-width progress bars, with a one-time host-identity
//! block. Press `q` or Ctrl-C to quit.
//!
//! Usage:
//!   sysglance       # 1 second tick
//!   sysglance 5     # 5 second tick

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sysglance::collector::SystemSource;
use sysglance::tui::App;

/// One-second host metrics dashboard.
#[derive(Parser)]
#[command(name = "sysglance", about = "Host metrics dashboard", version)]
struct Args {
    /// Update interval in seconds (default: 1).
    #[arg(value_name = "INTERVAL")]
    interval: Option<u64>,
}

fn main() {
    // The TUI owns stdout; diagnostics go to stderr and only when asked for.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Args::parse();
    let tick_rate = Duration::from_secs(args.interval.unwrap_or(1).max(1));

    let app = App::new(Box::new(SystemSource::new()));
    if let Err(e) = app.run(tick_rate) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
