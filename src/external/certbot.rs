// certbot integration - certificate revocation
//
// Wrapper around `certbot revoke`. Revocation is non-interactive and asks
// certbot to delete its own renewal state after a successful revoke; removal
// of the live lineage directory is handled separately by the revoker.

use crate::error::SweepError;
use std::path::Path;
use std::process::{Command, Stdio};

/// certbot wrapper
pub struct Certbot {
    certbot_path: String,
}

impl Default for Certbot {
    fn default() -> Self {
        Self::new()
    }
}

impl Certbot {
    pub fn new() -> Self {
        Self {
            certbot_path: "certbot".to_string(),
        }
    }

    pub fn with_path(path: String) -> Self {
        Self { certbot_path: path }
    }

    /// Check if certbot is available
    pub fn is_available(&self) -> bool {
        Command::new(&self.certbot_path)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Revoke the certificate at the given leaf path.
    ///
    /// Returns `SweepError::Revocation` if certbot cannot be spawned or exits
    /// non-zero (for example when the certificate is already revoked).
    pub fn revoke(&self, lineage: &str, cert_file: &Path) -> Result<(), SweepError> {
        let status = Command::new(&self.certbot_path)
            .arg("revoke")
            .arg("--cert-path")
            .arg(cert_file)
            .arg("--non-interactive")
            .arg("--quiet")
            .arg("--delete-after-revoke")
            .status()
            .map_err(|e| SweepError::Revocation {
                lineage: lineage.to_string(),
                detail: format!("failed to run {}: {}", self.certbot_path, e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SweepError::Revocation {
                lineage: lineage.to_string(),
                detail: format!("certbot revoke exited with {}", status),
            })
        }
    }
}
