pub mod binding;
pub mod config;
pub mod controller;
pub mod error;
pub mod flag;
pub mod host;
pub mod log;
pub mod registry;
pub mod script;

#[cfg(test)]
mod testing;

pub use binding::HostBinding;
pub use controller::ToggleController;
pub use error::{ToggleError, ToggleResult};
pub use flag::DpiAwarenessFlag;
pub use host::{Host, MessageKind, RestartMode, ToggleCommand};
pub use registry::{DwordReader, RegistryMerger, RegistryTarget};
pub use script::RegistryScript;
