use std::path::PathBuf;

use crate::flag::DpiAwarenessFlag;
use crate::registry::{DwordReader, RegistryMerger, RegistryTarget};
use crate::script::RegistryScript;
use crate::{ToggleResult, log_debug, log_info};

/// Reads and rewrites the DPI awareness flag of one executable.
pub struct ToggleController<R, M> {
    target: RegistryTarget,
    reader: R,
    merger: M,
    script_path: PathBuf,
}

impl<R: DwordReader, M: RegistryMerger> ToggleController<R, M> {
    /// Creates a controller writing its script to the OS temp directory.
    pub fn new(target: RegistryTarget, reader: R, merger: M) -> Self {
        Self {
            target,
            reader,
            merger,
            script_path: RegistryScript::default_path(),
        }
    }

    /// Overrides where the pending registry script is written.
    pub fn with_script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = path.into();
        self
    }

    /// Returns the current flag, treating a missing key or value as
    /// [`DpiAwarenessFlag::Aware`].
    pub fn read_flag(&self) -> ToggleResult<DpiAwarenessFlag> {
        let key = self.target.key_path();
        let stored = self.reader.get_dword(&key, self.target.value_name())?;
        let flag = stored.map_or(DpiAwarenessFlag::default(), DpiAwarenessFlag::from_dword);
        log_debug!("read {key}: {stored:?} -> {flag}");
        Ok(flag)
    }

    /// Writes a script setting `flag` and launches the merge for it.
    ///
    /// Returns once the merge process has been started; its outcome is
    /// not observed. Returns the path of the script that was handed over.
    pub fn write_flag(&self, flag: DpiAwarenessFlag) -> ToggleResult<PathBuf> {
        let script = RegistryScript::new(&self.target, flag);
        script.write_to(&self.script_path)?;
        log_info!(
            "wrote {} setting {} to {flag}",
            self.script_path.display(),
            self.target.image()
        );

        self.merger.merge(&self.script_path)?;
        log_info!("merge launched for {}", self.script_path.display());
        Ok(self.script_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;
    use crate::ToggleError;
    use crate::testing::{FakeRegistry, RecordingMerger};

    fn controller<'a>(
        registry: &'a FakeRegistry,
        merger: &'a RecordingMerger,
        dir: &Path,
    ) -> ToggleController<&'a FakeRegistry, &'a RecordingMerger> {
        ToggleController::new(RegistryTarget::new("devenv.exe").unwrap(), registry, merger)
            .with_script_path(dir.join("DpiAwarenessTemp.reg"))
    }

    #[test]
    fn absent_value_reads_as_aware() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let registry = FakeRegistry::absent();
        let merger = RecordingMerger::default();

        // Act
        let flag = controller(&registry, &merger, dir.path()).read_flag().unwrap();

        // Assert
        assert_eq!(flag, DpiAwarenessFlag::Aware);
    }

    #[test]
    fn stored_values_map_zero_to_virtualized_and_rest_to_aware() {
        let dir = tempfile::tempdir().unwrap();
        let merger = RecordingMerger::default();

        for (stored, expected) in [
            (0, DpiAwarenessFlag::Virtualized),
            (1, DpiAwarenessFlag::Aware),
            (2, DpiAwarenessFlag::Aware),
            (u32::MAX, DpiAwarenessFlag::Aware),
        ] {
            let registry = FakeRegistry::with_value(stored);
            let flag = controller(&registry, &merger, dir.path()).read_flag().unwrap();
            assert_eq!(flag, expected, "stored {stored}");
        }
    }

    #[test]
    fn reads_the_image_key() {
        let dir = tempfile::tempdir().unwrap();
        let registry = FakeRegistry::with_value(1);
        let merger = RecordingMerger::default();

        controller(&registry, &merger, dir.path()).read_flag().unwrap();

        let (key, name) = registry.last_query().unwrap();
        assert!(key.ends_with(r"Image File Execution Options\devenv.exe"));
        assert_eq!(name, "dpiAwareness");
    }

    #[test]
    fn read_failure_is_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let registry = FakeRegistry::failing("access denied");
        let merger = RecordingMerger::default();

        let err = controller(&registry, &merger, dir.path())
            .read_flag()
            .unwrap_err();

        assert!(matches!(err, ToggleError::RegistryRead { .. }));
    }

    #[test]
    fn consecutive_writes_each_hold_a_single_dword() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let registry = FakeRegistry::absent();
        let merger = RecordingMerger::default();
        let controller = controller(&registry, &merger, dir.path());

        // Act
        let first = controller.write_flag(DpiAwarenessFlag::Aware).unwrap();
        let first_text = fs::read_to_string(&first).unwrap();
        let second = controller.write_flag(DpiAwarenessFlag::Virtualized).unwrap();
        let second_text = fs::read_to_string(&second).unwrap();

        // Assert
        assert_eq!(first, second);
        assert_eq!(first_text.matches("=dword:").count(), 1);
        assert!(first_text.contains("\"dpiAwareness\"=dword:00000001"));
        assert_eq!(second_text.matches("=dword:").count(), 1);
        assert!(second_text.contains("\"dpiAwareness\"=dword:00000000"));
    }

    #[test]
    fn write_hands_the_script_to_the_merger() {
        let dir = tempfile::tempdir().unwrap();
        let registry = FakeRegistry::absent();
        let merger = RecordingMerger::default();

        let path = controller(&registry, &merger, dir.path())
            .write_flag(DpiAwarenessFlag::Virtualized)
            .unwrap();

        assert_eq!(merger.merged(), vec![path]);
        assert!(merger.contents()[0].contains("dword:00000000"));
    }

    #[test]
    fn merge_failure_is_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let registry = FakeRegistry::absent();
        let merger = RecordingMerger::failing();

        let err = controller(&registry, &merger, dir.path())
            .write_flag(DpiAwarenessFlag::Aware)
            .unwrap_err();

        assert!(matches!(err, ToggleError::Launch { .. }));
    }
}
