/// Generates the default `config.toml` contents with explanatory comments.
///
/// Used by `dpitoggle init` to create a starter config file.
pub fn generate_config() -> String {
    r##"# dpitoggle configuration
# Location: ~/.config/dpitoggle/config.toml

[target]
# Executable whose DPI awareness is toggled. The flag lives under
# HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion\Image File Execution Options\<image>
image = "devenv.exe"
# Full path used to relaunch the application. When omitted, the path of
# the running instance is used.
# executable = 'C:\Program Files\Microsoft Visual Studio\2022\Community\Common7\IDE\devenv.exe'

[restart]
# Restart the application after changing the flag.
enabled = true
# Seconds to wait for running instances to close (1 to 600).
shutdown_timeout_secs = 30

[ui]
# Show message boxes. When false, messages are printed to the console.
dialogs = true

[logging]
# Enable file logging to ~/.config/dpitoggle/logs/dpitoggle.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation (at most 1024).
max_file_mb = 10
"##
    .to_string()
}
