// Certificate inspector - SAN DNS names via external openssl dump

use crate::config::LEAF_CERT_FILE;
use crate::domains::san_dns_names;
use crate::external::OpensslX509;
use std::path::Path;
use tracing::debug;

/// Extracts the SAN DNS names of a lineage's leaf certificate.
pub struct CertificateInspector {
    openssl: OpensslX509,
}

impl Default for CertificateInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateInspector {
    pub fn new() -> Self {
        Self {
            openssl: OpensslX509::new(),
        }
    }

    pub fn with_openssl_path(path: String) -> Self {
        Self {
            openssl: OpensslX509::with_path(path),
        }
    }

    /// SAN DNS names of the leaf certificate in a lineage directory, in order
    /// of appearance.
    ///
    /// Any inspection failure (missing or malformed certificate, openssl not
    /// runnable) yields an empty list: a certificate that cannot be inspected
    /// is never a deletion candidate.
    pub fn san_names(&self, lineage_dir: &Path) -> Vec<String> {
        let cert_file = lineage_dir.join(LEAF_CERT_FILE);
        match self.openssl.text_dump(&cert_file) {
            Ok(dump) => san_dns_names(&dump),
            Err(e) => {
                debug!("inspection skipped: {}", e);
                Vec::new()
            }
        }
    }
}
