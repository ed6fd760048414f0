//! Template root discovery.

use std::path::{Path, PathBuf};

use crate::error::{ColdstartError, ColdstartResult};

/// Name of the shipped template directory.
pub const TEMPLATE_DIR_NAME: &str = "rules_template";

/// Locate the `rules_template/` directory.
///
/// Checked in order: the current working directory, the directory holding
/// the executable (symlinks resolved), and that directory's parent (for
/// `bin/coldstart` layouts).
pub fn find_template_dir() -> ColdstartResult<PathBuf> {
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(dir) = template_dir_in(&cwd) {
            return Ok(dir);
        }
    }

    if let Ok(exe) = std::env::current_exe() {
        let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
        if let Some(exe_dir) = exe.parent() {
            if let Some(dir) = template_dir_in(exe_dir) {
                return Ok(dir);
            }
            if let Some(parent) = exe_dir.parent() {
                if let Some(dir) = template_dir_in(parent) {
                    return Ok(dir);
                }
            }
        }
    }

    Err(ColdstartError::TemplateRootNotFound)
}

fn template_dir_in(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(TEMPLATE_DIR_NAME);
    candidate.is_dir().then_some(candidate)
}
