// Error types for certsweep
//
// This module provides structured error types using thiserror, one variant per
// failure kind, so callers can branch on what failed instead of a generic
// catch-all.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for certsweep operations
#[derive(Debug, Error)]
pub enum SweepError {
    /// A configuration file could not be read or decoded as UTF-8
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The openssl text dump of a certificate failed
    #[error("Certificate inspection failed for {path}: {detail}")]
    Inspection { path: PathBuf, detail: String },

    /// The certbot revoke invocation failed
    #[error("Revocation failed for {lineage}: {detail}")]
    Revocation { lineage: String, detail: String },

    /// Removal of a certificate lineage directory failed
    #[error("Failed to delete {path}: {source}")]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generic I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}
