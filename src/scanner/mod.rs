// Config scanner - collects domain references from the nginx tree

use crate::domains::find_domains;
use crate::error::SweepError;
use colored::Colorize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Scans a configuration tree for domain-like references.
///
/// Every regular file ending in `.conf` under the root is read as UTF-8 and
/// fed to the domain extractor; the union of all matches is the set of
/// domains considered "in use".
pub struct ConfigScanner {
    config_dir: PathBuf,
}

impl ConfigScanner {
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Collect every domain referenced anywhere in the configuration tree.
    ///
    /// Unreadable or non-UTF-8 files are reported and skipped; a missing root
    /// yields an empty set.
    pub fn collect_used_domains(&self) -> HashSet<String> {
        let mut domains = HashSet::new();
        self.scan_dir(&self.config_dir, &mut domains);
        debug!(
            "collected {} used domains from {}",
            domains.len(),
            self.config_dir.display()
        );
        domains
    }

    fn scan_dir(&self, dir: &Path, domains: &mut HashSet<String>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("cannot read directory {}: {}", dir.display(), e);
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                self.scan_dir(&path, domains);
            } else if path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(".conf"))
            {
                match read_config_file(&path) {
                    Ok(content) => {
                        domains.extend(find_domains(&content));
                    }
                    Err(e) => {
                        warn!("{}", e);
                        println!("{} {}", "Warning:".yellow(), e);
                    }
                }
            }
        }
    }
}

fn read_config_file(path: &Path) -> Result<String, SweepError> {
    fs::read_to_string(path).map_err(|source| SweepError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_conf(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_collects_domains_from_conf_files() {
        let tmp = TempDir::new().unwrap();
        write_conf(tmp.path(), "site.conf", "server_name example.com www.example.com;");

        let scanner = ConfigScanner::new(tmp.path().to_path_buf());
        let domains = scanner.collect_used_domains();
        assert!(domains.contains("example.com"));
        assert!(domains.contains("www.example.com"));
    }

    #[test]
    fn test_ignores_files_without_conf_suffix() {
        let tmp = TempDir::new().unwrap();
        write_conf(tmp.path(), "site.conf.bak", "server_name old.example.com;");
        write_conf(tmp.path(), "notes.txt", "server_name other.example.com;");

        let scanner = ConfigScanner::new(tmp.path().to_path_buf());
        assert!(scanner.collect_used_domains().is_empty());
    }

    #[test]
    fn test_recurses_into_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sites-enabled");
        fs::create_dir(&sub).unwrap();
        write_conf(&sub, "app.conf", "proxy_pass http://api.example.net;");

        let scanner = ConfigScanner::new(tmp.path().to_path_buf());
        assert!(scanner.collect_used_domains().contains("api.example.net"));
    }

    #[test]
    fn test_non_utf8_file_is_skipped() {
        let tmp = TempDir::new().unwrap();
        write_conf(tmp.path(), "good.conf", "server_name kept.example.com;");
        let mut bad = fs::File::create(tmp.path().join("bad.conf")).unwrap();
        bad.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        let scanner = ConfigScanner::new(tmp.path().to_path_buf());
        let domains = scanner.collect_used_domains();
        assert!(domains.contains("kept.example.com"));
        assert_eq!(domains.len(), 1);
    }

    #[test]
    fn test_missing_root_yields_empty_set() {
        let scanner = ConfigScanner::new(PathBuf::from("/nonexistent/certsweep-test"));
        assert!(scanner.collect_used_domains().is_empty());
    }

    #[test]
    fn test_idempotent_over_unchanged_tree() {
        let tmp = TempDir::new().unwrap();
        write_conf(tmp.path(), "a.conf", "one.example.com two.example.com");
        write_conf(tmp.path(), "b.conf", "two.example.com three.example.com");

        let scanner = ConfigScanner::new(tmp.path().to_path_buf());
        let first = scanner.collect_used_domains();
        let second = scanner.collect_used_domains();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
