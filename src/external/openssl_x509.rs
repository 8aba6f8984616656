// openssl x509 integration - certificate text dumps
//
// Wrapper around `openssl x509 -in <file> -noout -text`. The textual output
// is what the SAN extraction pattern runs over; stderr is discarded.

use crate::error::SweepError;
use std::path::Path;
use std::process::{Command, Stdio};

/// openssl x509 wrapper
pub struct OpensslX509 {
    openssl_path: String,
}

impl Default for OpensslX509 {
    fn default() -> Self {
        Self::new()
    }
}

impl OpensslX509 {
    pub fn new() -> Self {
        Self {
            openssl_path: "openssl".to_string(),
        }
    }

    pub fn with_path(path: String) -> Self {
        Self { openssl_path: path }
    }

    /// Check if openssl is available
    pub fn is_available(&self) -> bool {
        Command::new(&self.openssl_path)
            .arg("version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Dump a certificate file as text.
    ///
    /// Returns `SweepError::Inspection` if openssl cannot be spawned or exits
    /// non-zero (missing or malformed certificate file).
    pub fn text_dump(&self, cert_file: &Path) -> Result<String, SweepError> {
        let output = Command::new(&self.openssl_path)
            .arg("x509")
            .arg("-in")
            .arg(cert_file)
            .arg("-noout")
            .arg("-text")
            .stderr(Stdio::null())
            .output()
            .map_err(|e| SweepError::Inspection {
                path: cert_file.to_path_buf(),
                detail: format!("failed to run {}: {}", self.openssl_path, e),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(SweepError::Inspection {
                path: cert_file.to_path_buf(),
                detail: format!("openssl x509 exited with {}", output.status),
            })
        }
    }
}
