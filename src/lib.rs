// certsweep - Unused Let's Encrypt certificate cleanup
// Licensed under GPL-3.0

//! certsweep finds TLS certificates in a Let's Encrypt live store that are no
//! longer referenced by any nginx virtual-host configuration and offers to
//! revoke and delete them. Domains are matched lexically: tokens found in
//! `.conf` files are compared against the SAN DNS names extracted from each
//! certificate via an external `openssl x509` text dump.

pub mod certificates;
pub mod cli;
pub mod config;
pub mod domains;
pub mod error;
pub mod external;
pub mod output;
pub mod scanner;
pub mod sweep;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::config::SweepConfig;
pub use crate::error::SweepError;
pub use crate::output::SweepReport;
pub use crate::sweep::Sweeper;

/// Result type for certsweep operations
pub type Result<T> = anyhow::Result<T>;
