//! The generated-files manifest.
//!
//! Every rules directory ColdStart writes into carries a manifest listing
//! the file names generated by the last run. The manifest is the deletion
//! safety boundary: only files recorded in it are ever removed during
//! reconciliation, so hand-written rules survive regeneration.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Manifest file name inside a rules directory.
pub const MANIFEST_FILE: &str = ".coldstart-manifest.json";

const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: u32,
    pub generated_at: String,
    pub files: BTreeSet<String>,
}

impl Manifest {
    /// A new manifest recording the given file names.
    pub fn new(files: BTreeSet<String>) -> Self {
        Self {
            version: MANIFEST_VERSION,
            generated_at: chrono::Local::now().to_rfc3339(),
            files,
        }
    }

    /// Load the manifest from a rules directory.
    ///
    /// Missing or unreadable manifests yield `None` (first run, or a
    /// manifest someone edited by hand) — reconciliation is skipped then.
    pub fn load(rules_dir: &Path) -> Option<Self> {
        let path = rules_dir.join(MANIFEST_FILE);
        let data = std::fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&data) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unparsable manifest");
                None
            }
        }
    }

    /// Save the manifest into a rules directory.
    pub fn save(&self, rules_dir: &Path) -> Result<()> {
        let path = rules_dir.join(MANIFEST_FILE);
        let mut data = serde_json::to_string_pretty(self)?;
        data.push('\n');
        std::fs::write(&path, data)
            .with_context(|| format!("failed to write manifest {}", path.display()))?;
        Ok(())
    }

    pub fn contains(&self, file: &str) -> bool {
        self.files.contains(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let tmp = TempDir::new().unwrap();
        let files: BTreeSet<String> =
            ["00-core.mdc", "10-dart.mdc"].iter().map(|s| s.to_string()).collect();

        Manifest::new(files.clone()).save(tmp.path()).unwrap();

        let loaded = Manifest::load(tmp.path()).unwrap();
        assert_eq!(loaded.version, MANIFEST_VERSION);
        assert_eq!(loaded.files, files);
        assert!(loaded.contains("00-core.mdc"));
        assert!(!loaded.contains("20-react.mdc"));
    }

    #[test]
    fn test_load_missing_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(Manifest::load(tmp.path()).is_none());
    }

    #[test]
    fn test_load_unparsable_is_none() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(MANIFEST_FILE), "{broken").unwrap();
        assert!(Manifest::load(tmp.path()).is_none());
    }
}
