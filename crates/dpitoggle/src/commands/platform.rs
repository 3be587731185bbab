//! Builds the toggle workflow from the platform's implementations.

use dpitoggle_core::config::Config;
use dpitoggle_core::{DpiAwarenessFlag, ToggleResult};

#[cfg(windows)]
mod imp {
    use dpitoggle_core::config::Config;
    use dpitoggle_core::{HostBinding, RegistryTarget, ToggleController, ToggleResult};
    use dpitoggle_windows::{HklmReader, RegeditMerger, WindowsHost};

    pub type Controller = ToggleController<HklmReader, RegeditMerger>;
    pub type Binding = HostBinding<WindowsHost, HklmReader, RegeditMerger>;

    pub fn controller(config: &Config) -> ToggleResult<Controller> {
        let target = RegistryTarget::new(config.target.image.as_str())?;
        Ok(ToggleController::new(target, HklmReader, RegeditMerger))
    }

    pub fn binding(config: &Config, restart: bool) -> ToggleResult<Binding> {
        let binding = HostBinding::new(WindowsHost::from_config(config), controller(config)?)
            .with_restart(restart && config.restart.enabled);
        Ok(binding)
    }

    /// Builds the binding, printing construction errors the host never saw.
    pub fn binding_or_report(config: &Config, restart: bool) -> ToggleResult<Binding> {
        binding(config, restart).inspect_err(|e| eprintln!("Error: {e}"))
    }
}

/// Reads the flag currently stored for the configured image.
#[cfg(windows)]
pub fn read_flag(config: &Config) -> ToggleResult<DpiAwarenessFlag> {
    imp::controller(config)?.read_flag()
}

/// Runs activate + invoke, reporting errors through the host.
#[cfg(windows)]
pub fn run_toggle(config: &Config, restart: bool) -> ToggleResult<DpiAwarenessFlag> {
    imp::binding_or_report(config, restart)?.run()
}

/// Runs activate + apply for an explicit flag.
#[cfg(windows)]
pub fn run_set(
    config: &Config,
    flag: DpiAwarenessFlag,
    restart: bool,
) -> ToggleResult<DpiAwarenessFlag> {
    imp::binding_or_report(config, restart)?.run_apply(flag)
}

#[cfg(not(windows))]
pub fn read_flag(_config: &Config) -> ToggleResult<DpiAwarenessFlag> {
    unsupported()
}

#[cfg(not(windows))]
pub fn run_toggle(_config: &Config, _restart: bool) -> ToggleResult<DpiAwarenessFlag> {
    unsupported()
}

#[cfg(not(windows))]
pub fn run_set(
    _config: &Config,
    _flag: DpiAwarenessFlag,
    _restart: bool,
) -> ToggleResult<DpiAwarenessFlag> {
    unsupported()
}

#[cfg(not(windows))]
fn unsupported() -> ! {
    eprintln!("Error: dpitoggle edits the Windows registry and only runs on Windows.");
    std::process::exit(1);
}
