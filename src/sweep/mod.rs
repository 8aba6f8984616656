// Sweep module - orchestrates the unused-certificate sweep

mod prompt;
mod revoker;

pub use prompt::confirm_removal;
pub use revoker::{RemovalOutcome, Revoker};

use crate::certificates::{CertificateInspector, CertificateStore};
use crate::config::SweepConfig;
use crate::output::{LineageStatus, SweepReport};
use crate::scanner::ConfigScanner;
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use std::collections::HashSet;
use std::io::{self, BufRead};
use tracing::{debug, info};

/// Classification of one certificate against the used-domain set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertClass {
    /// No domains extracted; not a candidate for anything
    NoDomains,
    /// At least one extracted domain is still referenced
    InUse,
    /// Domains extracted, none referenced anywhere
    Unused,
}

/// Classify a certificate's extracted domains against the used set.
///
/// Membership is exact, case-sensitive string comparison.
pub fn classify(domains: &[String], used: &HashSet<String>) -> CertClass {
    if domains.is_empty() {
        CertClass::NoDomains
    } else if domains.iter().any(|d| used.contains(d)) {
        CertClass::InUse
    } else {
        CertClass::Unused
    }
}

/// Drives a whole sweep: collect used domains once, then walk the certificate
/// store and decide per lineage whether to remove it.
pub struct Sweeper {
    config: SweepConfig,
    scanner: ConfigScanner,
    store: CertificateStore,
    inspector: CertificateInspector,
    revoker: Revoker,
}

impl Sweeper {
    pub fn new(config: SweepConfig) -> Self {
        let scanner = ConfigScanner::new(config.config_dir.clone());
        let store = CertificateStore::new(config.cert_dir.clone());
        let inspector = CertificateInspector::with_openssl_path(config.openssl_path.clone());
        let revoker = Revoker::new(config.certbot_path.clone());
        Self {
            config,
            scanner,
            store,
            inspector,
            revoker,
        }
    }

    /// Run the sweep, confirming interactively on stdin.
    pub fn run(&self) -> Result<SweepReport> {
        self.run_with_input(&mut io::stdin().lock())
    }

    /// Run the sweep, reading confirmations from the given input.
    pub fn run_with_input<R: BufRead>(&self, input: &mut R) -> Result<SweepReport> {
        let used = self.scanner.collect_used_domains();
        info!("found {} used domains", used.len());

        let lineages = self.store.lineages().with_context(|| {
            format!(
                "cannot list certificate store {}",
                self.config.cert_dir.display()
            )
        })?;

        let mut report = SweepReport::new(used.len());
        for lineage in lineages {
            let status = self.process_lineage(&lineage, &used, input, &mut report);
            debug!("{}: {:?}", lineage, status);
        }
        Ok(report)
    }

    fn process_lineage<R: BufRead>(
        &self,
        lineage: &str,
        used: &HashSet<String>,
        input: &mut R,
        report: &mut SweepReport,
    ) -> LineageStatus {
        let domains = self.inspector.san_names(&self.config.lineage_dir(lineage));
        let status = match classify(&domains, used) {
            CertClass::NoDomains => LineageStatus::Skipped,
            CertClass::InUse => LineageStatus::InUse,
            CertClass::Unused => {
                println!(
                    "{} {} ({})",
                    "Unused certificate:".yellow(),
                    lineage.bold(),
                    domains.join(", ")
                );
                if self.config.dry_run {
                    LineageStatus::WouldRemove
                } else if self.config.force || confirm_removal(input) {
                    let outcome = self.revoker.revoke_and_delete(&self.config, lineage);
                    LineageStatus::Removed {
                        revoked: outcome.revoked,
                        deleted: outcome.deleted,
                    }
                } else {
                    println!("Skipped.");
                    LineageStatus::Declined
                }
            }
        };
        report.record(lineage.to_string(), domains, status.clone());
        status
    }
}
