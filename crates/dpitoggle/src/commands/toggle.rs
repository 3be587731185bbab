use dpitoggle_core::config::Config;

use super::platform;

/// Flips the flag and restarts the target.
///
/// Errors were already shown by the host; only the exit code is left.
pub fn execute(config: &Config, restart: bool) {
    if platform::run_toggle(config, restart).is_err() {
        std::process::exit(1);
    }
}
