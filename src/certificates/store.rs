// Certificate store - lineage directory listing

use crate::Result;
use std::fs;
use std::path::PathBuf;

/// The Let's Encrypt live store: one subdirectory per certificate lineage,
/// each containing the leaf certificate and its chain.
pub struct CertificateStore {
    cert_dir: PathBuf,
}

impl CertificateStore {
    pub fn new(cert_dir: PathBuf) -> Self {
        Self { cert_dir }
    }

    /// List lineage names in directory order.
    ///
    /// Stray non-directory entries (such as the store's README) are skipped
    /// silently.
    pub fn lineages(&self) -> Result<Vec<String>> {
        let mut lineages = Vec::new();
        for entry in fs::read_dir(&self.cert_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                lineages.push(name);
            }
        }
        Ok(lineages)
    }
}
