// Revoker - revoke with certbot, then delete the lineage directory

use crate::config::SweepConfig;
use crate::error::SweepError;
use crate::external::Certbot;
use colored::Colorize;
use std::fs;
use tracing::warn;

/// What actually happened while removing a certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalOutcome {
    pub revoked: bool,
    pub deleted: bool,
}

/// Revokes a certificate with certbot and removes its lineage directory.
///
/// The two steps are independent: a failed revocation (for example an
/// already-revoked certificate) still proceeds to delete the local files, and
/// a failed deletion leaves the revocation in place. Neither failure aborts
/// the sweep.
pub struct Revoker {
    certbot: Certbot,
}

impl Revoker {
    pub fn new(certbot_path: String) -> Self {
        Self {
            certbot: Certbot::with_path(certbot_path),
        }
    }

    pub fn revoke_and_delete(&self, config: &SweepConfig, lineage: &str) -> RemovalOutcome {
        let lineage_dir = config.lineage_dir(lineage);
        let cert_file = config.leaf_cert_path(lineage);

        println!("Revoking certificate for {}...", lineage.bold());
        let revoked = match self.certbot.revoke(lineage, &cert_file) {
            Ok(()) => {
                println!("{} {}", "Revoked certificate:".green(), lineage);
                true
            }
            Err(e) => {
                warn!("{}", e);
                println!("{} {}", "Failed to revoke certificate:".red(), lineage);
                false
            }
        };

        println!("Deleting directory {}...", lineage_dir.display());
        let deleted = match fs::remove_dir_all(&lineage_dir) {
            Ok(()) => {
                println!(
                    "{} {}",
                    "Deleted certificate directory:".green(),
                    lineage_dir.display()
                );
                true
            }
            Err(source) => {
                let e = SweepError::Deletion {
                    path: lineage_dir.clone(),
                    source,
                };
                warn!("{}", e);
                println!("{} {}", "Failed to delete:".red(), e);
                false
            }
        };

        RemovalOutcome { revoked, deleted }
    }
}
