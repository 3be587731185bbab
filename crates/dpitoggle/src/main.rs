mod commands;

use clap::{Parser, Subcommand};

use dpitoggle_core::DpiAwarenessFlag;

#[derive(Parser)]
#[command(
    name = "dpitoggle",
    version,
    about = "Toggle the DPI awareness of a Windows application and restart it"
)]
struct Cli {
    /// Executable to reconfigure (overrides target.image, e.g. devenv.exe)
    #[arg(long, global = true)]
    image: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flip the DPI awareness flag and restart the application
    Toggle {
        /// Change the flag without restarting the application
        #[arg(long)]
        no_restart: bool,
    },
    /// Set the DPI awareness flag to an explicit value
    Set {
        /// "aware" or "virtualized"
        flag: DpiAwarenessFlag,
        /// Change the flag without restarting the application
        #[arg(long)]
        no_restart: bool,
    },
    /// Show the current DPI awareness flag
    Status {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Create the default configuration file
    Init,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Toggle { no_restart } => {
            let config = commands::load_config(cli.image);
            commands::toggle::execute(&config, !no_restart);
        }
        Commands::Set { flag, no_restart } => {
            let config = commands::load_config(cli.image);
            commands::set::execute(&config, flag, !no_restart);
        }
        Commands::Status { json } => {
            let config = commands::load_config(cli.image);
            commands::status::execute(&config, json);
        }
    }
}
