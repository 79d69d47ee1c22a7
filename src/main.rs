//! folio - A personal portfolio that snaps section by section in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use folio_app::config::{self, Settings};
use folio_app::theme::system_prefers_dark;
use folio_app::{
    AppState, FileStorage, MemoryStorage, PreferenceStorage, ThemeStore, DEFAULT_SECTIONS,
};
use folio_core::{logging, Error, SectionList, TerminalProbe, ThemeMode};
use tracing::{info, warn};

/// folio - A personal portfolio in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A personal portfolio that snaps section by section", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Treat the terminal as a touch screen: narrow windows scroll freely
    #[arg(long)]
    touch: bool,

    /// Start with this theme (light or dark) and remember it
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .clone()
            .or_else(config::default_config_path)
            .ok_or_else(|| Error::config("No config directory on this platform"))?;
        if config::init_config_file(&path)? {
            eprintln!("Created {}", path.display());
        } else {
            eprintln!("{} already exists, left untouched", path.display());
        }
        return Ok(());
    }

    logging::init()?;

    let settings = load_settings(&args)?;
    let probe = device_probe(&args, &settings);
    let theme = load_theme(&args, &settings);
    let sections = SectionList::new(DEFAULT_SECTIONS)?;

    info!(
        "Starting with {} sections, touch={}",
        sections.len(),
        probe.touch_primary
    );
    let state = AppState::with_system_clock(sections, settings, theme, Box::new(probe));

    if let Err(e) = folio_tui::run(state) {
        if let Ok(log_file) = logging::get_current_log_file() {
            eprintln!("See {} for details", log_file.display());
        }
        return Err(e.into());
    }

    Ok(())
}

/// An explicit `--config` must exist; the default location may be missing
fn load_settings(args: &Args) -> Result<Settings, Error> {
    match &args.config {
        Some(path) if !path.exists() => Err(Error::ConfigNotFound { path: path.clone() }),
        Some(path) => Ok(config::load_settings(path)),
        None => Ok(config::load_default_settings()),
    }
}

/// `--touch` beats `device.touch`, which beats environment sniffing
fn device_probe(args: &Args, settings: &Settings) -> TerminalProbe {
    let compact_width = settings.device.compact_width;
    if args.touch {
        return TerminalProbe::new(true, compact_width);
    }
    match settings.device.touch {
        Some(touch) => TerminalProbe::new(touch, compact_width),
        None => TerminalProbe::from_env(compact_width),
    }
}

fn load_theme(args: &Args, settings: &Settings) -> ThemeStore {
    let storage: Box<dyn PreferenceStorage> = match FileStorage::open_default() {
        Some(storage) => {
            info!("Preferences at {}", storage.path().display());
            Box::new(storage)
        }
        None => {
            warn!("No config directory, the theme will not be remembered");
            Box::new(MemoryStorage::new())
        }
    };

    let fallback = settings
        .ui
        .theme
        .unwrap_or_else(|| ThemeMode::from_dark(system_prefers_dark()));
    let mut theme = ThemeStore::load_or(storage, fallback);
    if let Some(mode) = args.theme {
        if mode != theme.mode() {
            theme.set(mode);
        }
    }
    theme
}
