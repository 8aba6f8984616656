// Output module - sweep report and display formatting

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Final state of one certificate lineage after a sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineageStatus {
    /// No domains could be extracted; left untouched
    Skipped,
    /// At least one certificate domain is still referenced in the configs
    InUse,
    /// Unused, but the operator declined removal
    Declined,
    /// Unused; dry-run mode, nothing touched
    WouldRemove,
    /// Unused and processed; each step reports its own success
    Removed { revoked: bool, deleted: bool },
}

/// Per-lineage outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineageOutcome {
    pub lineage: String,
    pub domains: Vec<String>,
    pub status: LineageStatus,
}

/// Summary of a whole sweep run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub started_at: DateTime<Utc>,
    pub used_domain_count: usize,
    pub lineages: Vec<LineageOutcome>,
}

impl SweepReport {
    pub fn new(used_domain_count: usize) -> Self {
        Self {
            started_at: Utc::now(),
            used_domain_count,
            lineages: Vec::new(),
        }
    }

    pub fn record(&mut self, lineage: String, domains: Vec<String>, status: LineageStatus) {
        self.lineages.push(LineageOutcome {
            lineage,
            domains,
            status,
        });
    }

    pub fn unused_count(&self) -> usize {
        self.lineages
            .iter()
            .filter(|o| {
                !matches!(o.status, LineageStatus::Skipped | LineageStatus::InUse)
            })
            .count()
    }

    pub fn removed_count(&self) -> usize {
        self.lineages
            .iter()
            .filter(|o| matches!(o.status, LineageStatus::Removed { deleted: true, .. }))
            .count()
    }
}

/// Human-readable end-of-run summary
pub fn print_summary(report: &SweepReport) {
    println!();
    println!("{}", "Sweep summary".bold());
    println!(
        "  {} domains referenced in configuration",
        report.used_domain_count
    );
    println!("  {} certificate lineages examined", report.lineages.len());
    println!("  {} unused", report.unused_count());
    println!("  {} removed", report.removed_count());

    for outcome in &report.lineages {
        let label = match &outcome.status {
            LineageStatus::Skipped => "skipped (no domains)".dimmed(),
            LineageStatus::InUse => "in use".green(),
            LineageStatus::Declined => "declined".yellow(),
            LineageStatus::WouldRemove => "would remove (dry run)".yellow(),
            LineageStatus::Removed {
                revoked: true,
                deleted: true,
            } => "revoked and deleted".red(),
            LineageStatus::Removed { deleted: true, .. } => "deleted (revoke failed)".red(),
            LineageStatus::Removed { revoked: true, .. } => "revoked (delete failed)".red(),
            LineageStatus::Removed { .. } => "removal failed".red(),
        };
        println!("  {} {}", outcome.lineage.bold(), label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut report = SweepReport::new(4);
        report.record("a.com".into(), vec![], LineageStatus::Skipped);
        report.record("b.com".into(), vec!["b.com".into()], LineageStatus::InUse);
        report.record("c.com".into(), vec!["c.com".into()], LineageStatus::Declined);
        report.record(
            "d.com".into(),
            vec!["d.com".into()],
            LineageStatus::Removed {
                revoked: false,
                deleted: true,
            },
        );
        assert_eq!(report.unused_count(), 2);
        assert_eq!(report.removed_count(), 1);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut report = SweepReport::new(1);
        report.record(
            "old.example.net".into(),
            vec!["old.example.net".into()],
            LineageStatus::WouldRemove,
        );
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("old.example.net"));
        assert!(json.contains("WouldRemove"));
    }
}
