//! [`Host`] for a standalone Windows application.
//!
//! The reconfigured application is identified by its image name. Restarting
//! it means asking every running instance to close, waiting for them to
//! exit, and launching the executable again with the requested elevation.

use std::path::PathBuf;
use std::time::Duration;

use dpitoggle_core::config::Config;
use dpitoggle_core::{
    Host, MessageKind, RestartMode, ToggleCommand, ToggleError, ToggleResult, log_debug, log_info,
    log_warn,
};
use windows::Win32::Foundation::E_ACCESSDENIED;

use crate::shell::{VERB_OPEN, VERB_RUNAS, shell_execute};
use crate::{dialog, elevation, process};

pub struct WindowsHost {
    image: String,
    executable: Option<PathBuf>,
    shutdown_timeout: Duration,
    dialogs: bool,
}

impl WindowsHost {
    pub fn from_config(config: &Config) -> Self {
        Self {
            image: config.target.image.clone(),
            executable: config.target.executable.clone(),
            shutdown_timeout: Duration::from_secs(config.restart.shutdown_timeout_secs),
            dialogs: config.ui.dialogs,
        }
    }

    /// Resolves what to launch: the configured path, else the first
    /// running instance's image path.
    fn resolve_executable(&self, running: &[u32]) -> Option<PathBuf> {
        self.executable
            .clone()
            .or_else(|| running.iter().find_map(|&pid| process::image_path(pid)))
    }

    fn shut_down(&self, running: &[u32]) -> ToggleResult<()> {
        // A non-elevated sender cannot post WM_CLOSE to an elevated window.
        let own_elevated = elevation::is_current_process_elevated()
            .map_err(|e| ToggleError::Elevation(e.message()))?;
        let target_elevated = running
            .iter()
            .any(|&pid| matches!(instance_elevated(pid), Ok(true)));
        check_can_close(&self.image, own_elevated, target_elevated)?;

        let asked = process::close_windows(running);
        log_info!(
            "asked {asked} window(s) of {} ({} process(es)) to close",
            self.image,
            running.len()
        );
        if asked == 0 {
            return Err(nothing_to_close(&self.image));
        }
        if process::wait_for_exit(running, self.shutdown_timeout) {
            return Ok(());
        }
        Err(ToggleError::Restart(format!(
            "{} did not exit within {} seconds",
            self.image,
            self.shutdown_timeout.as_secs()
        )))
    }
}

/// Elevation of a running instance. An unreadable token means elevated.
fn instance_elevated(pid: u32) -> ToggleResult<bool> {
    match elevation::is_process_elevated(pid) {
        Ok(elevated) => Ok(elevated),
        Err(e) if e.code() == E_ACCESSDENIED => {
            log_debug!("token of PID {pid} is not accessible; assuming elevated");
            Ok(true)
        }
        Err(e) => Err(ToggleError::Elevation(e.message())),
    }
}

fn check_can_close(image: &str, own_elevated: bool, target_elevated: bool) -> ToggleResult<()> {
    if target_elevated && !own_elevated {
        return Err(ToggleError::Restart(format!(
            "{image} runs elevated and cannot be asked to close; \
             run dpitoggle elevated to restart an elevated {image}"
        )));
    }
    Ok(())
}

fn nothing_to_close(image: &str) -> ToggleError {
    ToggleError::Restart(format!(
        "no window of {image} accepted a close request; close {image} and start it again"
    ))
}

impl Host for WindowsHost {
    fn elevation_state(&self) -> ToggleResult<bool> {
        let running = process::find_processes(&self.image).map_err(ToggleError::Elevation)?;
        let Some(&pid) = running.first() else {
            log_debug!("{} is not running; using own elevation", self.image);
            return elevation::is_current_process_elevated()
                .map_err(|e| ToggleError::Elevation(e.message()));
        };

        instance_elevated(pid)
    }

    fn request_restart(&mut self, mode: RestartMode) -> ToggleResult<()> {
        let running = process::find_processes(&self.image).map_err(ToggleError::Restart)?;
        let Some(executable) = self.resolve_executable(&running) else {
            log_warn!(
                "{} is not running and no executable is configured; nothing to restart",
                self.image
            );
            return Ok(());
        };

        if !running.is_empty() {
            self.shut_down(&running)?;
        }

        let verb = match mode {
            RestartMode::Elevated => VERB_RUNAS,
            RestartMode::Normal => VERB_OPEN,
        };
        log_info!("launching {} ({verb})", executable.display());
        shell_execute(verb, &executable, None).map_err(|reason| ToggleError::Launch {
            program: executable.display().to_string(),
            reason,
        })
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        if self.dialogs {
            dialog::show(kind, text);
            return;
        }
        match kind {
            MessageKind::Info => println!("{text}"),
            MessageKind::Error => eprintln!("Error: {text}"),
        }
    }

    fn register_toggle_command(&mut self, command: &ToggleCommand) {
        let mark = if command.checked { "x" } else { " " };
        println!("[{mark}] DPI awareness for {}", self.image);
    }

    fn display_name(&self) -> &str {
        &self.image
    }
}
