// CLI module - Command line interface and argument parsing

use clap::Parser;
use std::path::PathBuf;

/// certsweep - Remove and revoke unused Let's Encrypt certificates
///
/// Scans the nginx configuration tree for domain references, extracts the SAN
/// DNS names of every certificate lineage in the Let's Encrypt live store, and
/// offers to revoke and delete certificates whose domains are no longer
/// referenced anywhere.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "certsweep")]
#[command(about = "Remove and revoke unused Let's Encrypt certificates")]
pub struct Args {
    /// Force deletion without confirmation
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Report unused certificates without revoking or deleting anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Certificate store root (each subdirectory is a certificate lineage)
    #[arg(long = "cert-dir", value_name = "DIR")]
    pub cert_dir: Option<PathBuf>,

    /// Configuration tree to scan for domain references
    #[arg(long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Path to the openssl binary
    #[arg(long = "openssl-path", value_name = "BIN")]
    pub openssl_path: Option<String>,

    /// Path to the certbot binary
    #[arg(long = "certbot-path", value_name = "BIN")]
    pub certbot_path: Option<String>,

    /// Emit the final report as JSON
    #[arg(long = "json")]
    pub json: bool,
}
