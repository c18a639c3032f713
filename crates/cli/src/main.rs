//! missilectl
//!
//! Command-line control for a USB toy missile launcher. Fires a preset
//! number of missiles from a flag, or starts one of three interactive
//! front-ends: a command-word text UI (the default), a numeric-keypad UI,
//! or a graphical button panel.

mod config;
mod logging;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use config::LauncherConfig;
use device::{DeviceError, Launcher, Session, UsbTransport};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "missilectl")]
#[command(author, version, about = "Control a USB toy missile launcher")]
#[command(long_about = "
Control a USB toy missile launcher (vendor 1130:0202): move the turret,
fire missiles, or drive it interactively.

EXAMPLES:
    # Start the command-word interface (the default)
    missilectl

    # Fire two missiles and exit
    missilectl -f -f

    # Steer with the numeric keypad
    missilectl --numpad-ui

    # Graphical button panel
    missilectl --panel

CONFIGURATION:
    Amplitudes, bay capacity, the default inter-shot delay and the log
    level live in a TOML file (see --save-config for the default path).
")]
struct Args {
    /// Fire a missile immediately and exit (repeat to fire several)
    #[arg(short, long, action = clap::ArgAction::Count)]
    fire: u8,

    /// Start the command-word text interface (the default)
    #[arg(short, long)]
    text_ui: bool,

    /// Start the numeric-keypad interface
    #[arg(short, long)]
    numpad_ui: bool,

    /// Start the graphical button panel
    #[arg(short = 'g', long)]
    panel: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<std::path::PathBuf>,

    /// Save default configuration to the default location and exit
    #[arg(long)]
    save_config: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.save_config {
        let config = LauncherConfig::default();
        let path = LauncherConfig::default_path();
        config.save(&path).context("failed to save configuration")?;
        println!("Configuration saved to: {}", path.display());
        return Ok(());
    }

    let config = match args.config {
        Some(ref path) => LauncherConfig::load(path).context("failed to load configuration")?,
        None => LauncherConfig::load_or_default(),
    };

    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.launcher.log_level);
    logging::setup_logging(log_level).context("failed to setup logging")?;

    info!("missilectl v{}", env!("CARGO_PKG_VERSION"));

    let context = rusb::Context::new().context("failed to initialize USB context")?;
    let session = match Session::open(&context) {
        Ok(session) => session,
        Err(err) => {
            print_open_hints(&err);
            return Err(err.into());
        }
    };

    let mut launcher = Launcher::with_profile(UsbTransport::new(session), config.turret_profile());
    let delay = config.fire_delay();

    if args.fire > 0 {
        info!("firing {} missile(s) from the command line", args.fire);
        launcher.fire(args.fire, delay)?;
        launcher.close()?;
        return Ok(());
    }

    if args.numpad_ui {
        ui::numpad::run(launcher, delay)
    } else if args.panel {
        ui::panel::run(launcher)
    } else {
        if !args.text_ui {
            debug!("no front-end flag given, defaulting to the text UI");
        }
        ui::text::run(launcher, delay)
    }
}

/// Startup failure hints, printed before exiting without a UI.
fn print_open_hints(err: &DeviceError) {
    eprintln!("There was a problem communicating with the device: {err}");
    eprintln!("Make sure you have the appropriate permissions to access USB devices (try running as root).");
    eprintln!("If you still have problems, unplug and replug the device and try again.");
}
