use dpitoggle_core::DpiAwarenessFlag;
use dpitoggle_core::config::Config;

use super::platform;

/// Writes an explicit flag and restarts the target.
pub fn execute(config: &Config, flag: DpiAwarenessFlag, restart: bool) {
    if platform::run_set(config, flag, restart).is_err() {
        std::process::exit(1);
    }
}
