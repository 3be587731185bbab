//! Connects the toggle workflow to a [`Host`].
//!
//! Each step returns its own `Result`; [`HostBinding::run`] chains them
//! and [`HostBinding::report`] is the single place errors reach the user.

use crate::controller::ToggleController;
use crate::flag::DpiAwarenessFlag;
use crate::host::{Host, MessageKind, RestartMode, ToggleCommand};
use crate::registry::{DwordReader, RegistryMerger};
use crate::{ToggleResult, log_error, log_info};

pub struct HostBinding<H, R, M> {
    host: H,
    controller: ToggleController<R, M>,
    command: ToggleCommand,
    restart: bool,
}

impl<H: Host, R: DwordReader, M: RegistryMerger> HostBinding<H, R, M> {
    pub fn new(host: H, controller: ToggleController<R, M>) -> Self {
        Self {
            host,
            controller,
            command: ToggleCommand::default(),
            restart: true,
        }
    }

    /// Disables the restart step; the user is told to restart by hand.
    pub fn with_restart(mut self, enabled: bool) -> Self {
        self.restart = enabled;
        self
    }

    #[cfg(test)]
    fn command(&self) -> &ToggleCommand {
        &self.command
    }

    #[cfg(test)]
    fn host(&self) -> &H {
        &self.host
    }

    /// Reads the current flag and registers the command with it.
    pub fn activate(&mut self) -> ToggleResult<DpiAwarenessFlag> {
        let flag = self.controller.read_flag()?;
        self.command.checked = flag.is_aware();
        self.host.register_toggle_command(&self.command);
        Ok(flag)
    }

    /// Flips the flag relative to the command's checked state.
    pub fn invoke(&mut self) -> ToggleResult<DpiAwarenessFlag> {
        let target = DpiAwarenessFlag::from_checked(!self.command.checked);
        self.apply(target)
    }

    /// Writes `target`, acknowledges it and restarts the host.
    pub fn apply(&mut self, target: DpiAwarenessFlag) -> ToggleResult<DpiAwarenessFlag> {
        self.controller.write_flag(target)?;
        self.command.checked = target.is_aware();

        if !self.restart {
            let text = format!(
                "Restart {} for the change to take effect.",
                self.host.display_name()
            );
            self.host.show_message(MessageKind::Info, &text);
            return Ok(target);
        }

        let text = format!(
            "{} will be restarted for the change to take effect.",
            self.host.display_name()
        );
        self.host.show_message(MessageKind::Info, &text);
        self.restart_host()?;
        Ok(target)
    }

    fn restart_host(&mut self) -> ToggleResult<RestartMode> {
        let elevated = self.host.elevation_state()?;
        let mode = RestartMode::matching(elevated);
        log_info!("restarting {} ({mode:?})", self.host.display_name());
        self.host.request_restart(mode)?;
        Ok(mode)
    }

    /// Activates and toggles, reporting any failure through the host.
    pub fn run(&mut self) -> ToggleResult<DpiAwarenessFlag> {
        let result = self.activate().and_then(|_| self.invoke());
        self.report(result)
    }

    /// Activates and sets an explicit flag, reporting any failure.
    pub fn run_apply(&mut self, target: DpiAwarenessFlag) -> ToggleResult<DpiAwarenessFlag> {
        let result = self.activate().and_then(|_| self.apply(target));
        self.report(result)
    }

    /// Shows an error result to the user and passes it through.
    pub fn report<T>(&mut self, result: ToggleResult<T>) -> ToggleResult<T> {
        if let Err(e) = &result {
            log_error!("{e}");
            self.host.show_message(MessageKind::Error, &e.to_string());
        }
        result
    }
}
