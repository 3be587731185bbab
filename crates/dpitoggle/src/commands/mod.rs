pub mod init;
pub mod set;
pub mod status;
pub mod toggle;

mod platform;

use dpitoggle_core::config::{self, Config};
use dpitoggle_core::registry::check_image_name;

/// Loads `config.toml`, applies the `--image` override and starts logging.
///
/// An `--image` that is not a plain file name ends the process.
pub fn load_config(image: Option<String>) -> Config {
    let mut config = config::load();
    if let Some(image) = image {
        if let Err(reason) = check_image_name(image.trim()) {
            eprintln!("Error: invalid --image {image:?}: {reason}");
            std::process::exit(1);
        }
        config.target.image = image;
        config.validate();
    }
    dpitoggle_core::log::init(&config.logging);
    dpitoggle_core::log_debug!("loaded config for {}", config.target.image);
    config
}
