// Run configuration - paths and tool locations for a sweep

use crate::cli::Args;
use std::path::PathBuf;

/// Conventional Let's Encrypt live store
pub const DEFAULT_CERT_DIR: &str = "/etc/letsencrypt/live";

/// Conventional nginx configuration tree
pub const DEFAULT_CONFIG_DIR: &str = "/etc/nginx";

/// Leaf certificate filename inside each lineage directory
pub const LEAF_CERT_FILE: &str = "cert.pem";

/// Configuration for a sweep run.
///
/// All paths are explicit so tests can point a sweep at temporary
/// directories instead of the system locations.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Certificate store root; each subdirectory is a lineage
    pub cert_dir: PathBuf,
    /// Configuration tree scanned for domain references
    pub config_dir: PathBuf,
    /// openssl binary used for certificate text dumps
    pub openssl_path: String,
    /// certbot binary used for revocation
    pub certbot_path: String,
    /// Skip interactive confirmation
    pub force: bool,
    /// Classify and report only; never revoke or delete
    pub dry_run: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            cert_dir: PathBuf::from(DEFAULT_CERT_DIR),
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            openssl_path: "openssl".to_string(),
            certbot_path: "certbot".to_string(),
            force: false,
            dry_run: false,
        }
    }
}

impl SweepConfig {
    /// Build a config from parsed CLI arguments, falling back to the
    /// conventional paths for anything not overridden.
    pub fn from_args(args: &Args) -> Self {
        let defaults = Self::default();
        Self {
            cert_dir: args.cert_dir.clone().unwrap_or(defaults.cert_dir),
            config_dir: args.config_dir.clone().unwrap_or(defaults.config_dir),
            openssl_path: args.openssl_path.clone().unwrap_or(defaults.openssl_path),
            certbot_path: args.certbot_path.clone().unwrap_or(defaults.certbot_path),
            force: args.force,
            dry_run: args.dry_run,
        }
    }

    /// Path of a lineage directory inside the certificate store
    pub fn lineage_dir(&self, lineage: &str) -> PathBuf {
        self.cert_dir.join(lineage)
    }

    /// Path of the leaf certificate inside a lineage directory
    pub fn leaf_cert_path(&self, lineage: &str) -> PathBuf {
        self.lineage_dir(lineage).join(LEAF_CERT_FILE)
    }
}
