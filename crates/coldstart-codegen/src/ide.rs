//! IDE targets and their rules directories.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use coldstart_core::{ColdstartError, ColdstartResult};

/// An IDE (or assistant) that consumes generated rule files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdeTarget {
    Cursor,
    Windsurf,
    Trae,
    Cline,
}

impl IdeTarget {
    pub const ALL: [IdeTarget; 4] = [
        IdeTarget::Cursor,
        IdeTarget::Windsurf,
        IdeTarget::Trae,
        IdeTarget::Cline,
    ];

    /// The id used in configuration and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            IdeTarget::Cursor => "cursor",
            IdeTarget::Windsurf => "windsurf",
            IdeTarget::Trae => "trae",
            IdeTarget::Cline => "cline",
        }
    }

    /// Human-readable name for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            IdeTarget::Cursor => "Cursor",
            IdeTarget::Windsurf => "Windsurf",
            IdeTarget::Trae => "Trae",
            IdeTarget::Cline => "Cline",
        }
    }

    /// The rules directory relative to the target project root.
    pub fn rules_dir(&self) -> &'static str {
        match self {
            IdeTarget::Cursor => ".cursor/rules",
            IdeTarget::Windsurf => ".windsurf/rules",
            IdeTarget::Trae => ".trae/rules",
            IdeTarget::Cline => ".clinerules",
        }
    }

    /// The absolute rules directory for a target project.
    pub fn rules_dir_in(&self, target_dir: &Path) -> std::path::PathBuf {
        target_dir.join(self.rules_dir())
    }
}

impl fmt::Display for IdeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for IdeTarget {
    type Err = ColdstartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cursor" => Ok(IdeTarget::Cursor),
            "windsurf" => Ok(IdeTarget::Windsurf),
            "trae" => Ok(IdeTarget::Trae),
            "cline" => Ok(IdeTarget::Cline),
            other => Err(ColdstartError::UnknownIde(other.to_string())),
        }
    }
}

/// Parse configured IDE ids, deduplicating while preserving order.
pub fn parse_targets(ids: &[String]) -> ColdstartResult<Vec<IdeTarget>> {
    let mut targets = Vec::new();
    for id in ids {
        let target: IdeTarget = id.parse()?;
        if !targets.contains(&target) {
            targets.push(target);
        }
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for target in IdeTarget::ALL {
            assert_eq!(target.id().parse::<IdeTarget>().unwrap(), target);
        }
    }

    #[test]
    fn test_parse_unknown_id() {
        assert!("emacs".parse::<IdeTarget>().is_err());
    }

    #[test]
    fn test_parse_targets_dedupes() {
        let ids = vec![
            "cursor".to_string(),
            "windsurf".to_string(),
            "cursor".to_string(),
        ];
        let targets = parse_targets(&ids).unwrap();
        assert_eq!(targets, vec![IdeTarget::Cursor, IdeTarget::Windsurf]);
    }

    #[test]
    fn test_rules_dirs_are_distinct() {
        let dirs: std::collections::BTreeSet<_> =
            IdeTarget::ALL.iter().map(|t| t.rules_dir()).collect();
        assert_eq!(dirs.len(), IdeTarget::ALL.len());
    }
}
