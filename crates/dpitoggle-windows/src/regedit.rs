use std::path::{Path, PathBuf};

use dpitoggle_core::{RegistryMerger, ToggleError, ToggleResult, log_info};

use crate::shell::{VERB_RUNAS, shell_execute};

const REGEDIT: &str = "regedit.exe";

/// Merges registry scripts with an elevated, silent `regedit.exe`.
///
/// The merge runs in its own process; success or failure of the import
/// is not reported back.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegeditMerger;

impl RegistryMerger for RegeditMerger {
    fn merge(&self, script: &Path) -> ToggleResult<()> {
        let parameters = merge_arguments(script);
        log_info!("launching {REGEDIT} {parameters}");
        shell_execute(VERB_RUNAS, &PathBuf::from(REGEDIT), Some(&parameters)).map_err(|reason| {
            ToggleError::Launch {
                program: REGEDIT.into(),
                reason,
            }
        })
    }
}

/// `-s "<script>"`: silent import of the quoted script path.
fn merge_arguments(script: &Path) -> String {
    format!("-s \"{}\"", script.display())
}
