// certsweep - Unused Let's Encrypt certificate cleanup
// Licensed under GPL-3.0
//
// Scans the nginx configuration tree for domain references, then walks the
// Let's Encrypt live store and offers to revoke and delete any certificate
// whose SAN DNS names are no longer referenced anywhere.

use anyhow::Result;
use certsweep::{output, Args, SweepConfig, Sweeper};
use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let args = Args::parse();
    let config = SweepConfig::from_args(&args);

    if config.dry_run {
        println!("{}", "Dry run: nothing will be revoked or deleted".cyan());
    }

    let sweeper = Sweeper::new(config);
    let report = sweeper.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_summary(&report);
    }

    Ok(())
}
