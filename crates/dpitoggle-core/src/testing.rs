//! In-memory stand-ins for the registry, the merge utility and the host.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::host::{Host, MessageKind, RestartMode, ToggleCommand};
use crate::registry::{DwordReader, RegistryMerger};
use crate::{ToggleError, ToggleResult};

pub struct FakeRegistry {
    stored: Result<Option<u32>, String>,
    queries: RefCell<Vec<(String, String)>>,
}

impl FakeRegistry {
    pub fn absent() -> Self {
        Self::from_result(Ok(None))
    }

    pub fn with_value(value: u32) -> Self {
        Self::from_result(Ok(Some(value)))
    }

    pub fn failing(reason: &str) -> Self {
        Self::from_result(Err(reason.to_string()))
    }

    fn from_result(stored: Result<Option<u32>, String>) -> Self {
        Self {
            stored,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn last_query(&self) -> Option<(String, String)> {
        self.queries.borrow().last().cloned()
    }
}

impl DwordReader for FakeRegistry {
    fn get_dword(&self, key: &str, name: &str) -> ToggleResult<Option<u32>> {
        self.queries
            .borrow_mut()
            .push((key.to_string(), name.to_string()));
        self.stored
            .clone()
            .map_err(|reason| ToggleError::RegistryRead {
                key: key.to_string(),
                name: name.to_string(),
                reason,
            })
    }
}

#[derive(Default)]
pub struct RecordingMerger {
    fail: bool,
    merged: RefCell<Vec<PathBuf>>,
    contents: RefCell<Vec<String>>,
}

impl RecordingMerger {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn merged(&self) -> Vec<PathBuf> {
        self.merged.borrow().clone()
    }

    /// Script text as it was on disk when each merge was launched.
    pub fn contents(&self) -> Vec<String> {
        self.contents.borrow().clone()
    }
}

impl RegistryMerger for RecordingMerger {
    fn merge(&self, script: &Path) -> ToggleResult<()> {
        if self.fail {
            return Err(ToggleError::Launch {
                program: "regedit.exe".into(),
                reason: "the operation was canceled by the user".into(),
            });
        }
        self.merged.borrow_mut().push(script.to_path_buf());
        self.contents
            .borrow_mut()
            .push(fs::read_to_string(script).unwrap_or_default());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Registered(bool),
    Message(MessageKind, String),
    ElevationQueried,
    Restart(RestartMode),
}

pub struct FakeHost {
    elevated: Result<bool, String>,
    restart_fails: bool,
    events: RefCell<Vec<HostEvent>>,
}

impl FakeHost {
    pub fn new(elevated: bool) -> Self {
        Self {
            elevated: Ok(elevated),
            restart_fails: false,
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn elevation_fails(reason: &str) -> Self {
        Self {
            elevated: Err(reason.to_string()),
            ..Self::new(false)
        }
    }

    pub fn restart_fails(mut self) -> Self {
        self.restart_fails = true;
        self
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    pub fn restarts(&self) -> Vec<RestartMode> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Restart(mode) => Some(mode),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self, kind: MessageKind) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Message(k, text) if k == kind => Some(text),
                _ => None,
            })
            .collect()
    }
}

impl Host for FakeHost {
    fn elevation_state(&self) -> ToggleResult<bool> {
        self.events.borrow_mut().push(HostEvent::ElevationQueried);
        self.elevated.clone().map_err(ToggleError::Elevation)
    }

    fn request_restart(&mut self, mode: RestartMode) -> ToggleResult<()> {
        if self.restart_fails {
            return Err(ToggleError::Restart("host did not exit".into()));
        }
        self.events.borrow_mut().push(HostEvent::Restart(mode));
        Ok(())
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        self.events
            .borrow_mut()
            .push(HostEvent::Message(kind, text.to_string()));
    }

    fn register_toggle_command(&mut self, command: &ToggleCommand) {
        self.events
            .borrow_mut()
            .push(HostEvent::Registered(command.checked));
    }

    fn display_name(&self) -> &str {
        "devenv.exe"
    }
}
