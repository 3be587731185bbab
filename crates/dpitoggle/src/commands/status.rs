use dpitoggle_core::RegistryTarget;
use dpitoggle_core::config::Config;

use super::platform;

pub fn execute(config: &Config, json: bool) {
    let target = match RegistryTarget::new(config.target.image.as_str()) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let flag = match platform::read_flag(config) {
        Ok(flag) => flag,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        let report = serde_json::json!({
            "image": target.image(),
            "key": target.full_key_path(),
            "value": target.value_name(),
            "flag": flag,
            "dword": flag.dword(),
        });
        println!("{report}");
        return;
    }

    println!("{}: {flag}", target.image());
    println!("  {}\\{}", target.full_key_path(), target.value_name());
}
