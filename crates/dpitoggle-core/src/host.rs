use crate::ToggleResult;

/// How the host should come back after a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartMode {
    Normal,
    Elevated,
}

impl RestartMode {
    /// Restart in the same elevation the host is running with.
    pub fn matching(elevated: bool) -> Self {
        if elevated {
            Self::Elevated
        } else {
            Self::Normal
        }
    }
}

/// Severity of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// The checkable command exposed by the host. Checked means DPI aware.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleCommand {
    pub checked: bool,
}

/// Capabilities the toggle workflow needs from the application it
/// reconfigures.
pub trait Host {
    /// Whether the host process runs with administrative privileges.
    fn elevation_state(&self) -> ToggleResult<bool>;

    /// Restarts the host in the given mode.
    fn request_restart(&mut self, mode: RestartMode) -> ToggleResult<()>;

    /// Shows a blocking message to the user.
    fn show_message(&mut self, kind: MessageKind, text: &str);

    /// Exposes the toggle with its current checked state.
    fn register_toggle_command(&mut self, command: &ToggleCommand);

    /// Name used in user-facing messages.
    fn display_name(&self) -> &str;
}
