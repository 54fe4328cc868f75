//! Command line and spot file loading

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tui_dispatch_debug::DebugCliArgs;

use crate::error::SpotFileError;
use crate::state::{DEFAULT_FORECAST_DAYS, Spot};

/// Spot card - a kitesurf spot in your terminal
#[derive(Parser, Debug)]
#[command(name = "spotcard")]
#[command(about = "Shows a kitesurfing spot card with live wind and forecast")]
pub struct Args {
    /// Spot file (.toml or .json). A demo spot is shown when omitted
    #[arg(long)]
    pub spot: Option<PathBuf>,

    /// Unsplash access key used to look up spot photos
    #[arg(long, env = "UNSPLASH_ACCESS_KEY", hide_env_values = true)]
    pub unsplash_key: Option<String>,

    /// Weather refresh interval in seconds (minimum 1)
    #[arg(long, short, default_value = "300", value_parser = clap::value_parser!(u64).range(1..))]
    pub refresh_interval: u64,

    /// Days shown in the forecast panel
    #[arg(long, default_value_t = DEFAULT_FORECAST_DAYS, value_parser = clap::value_parser!(u8).range(1..=16))]
    pub forecast_days: u8,

    /// Log file, the terminal belongs to the UI
    #[arg(long, default_value = "spotcard.log")]
    pub log_file: PathBuf,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(flatten)]
    pub debug: DebugCliArgs,
}

/// Read a spot from a `.toml` or `.json` file
pub fn load_spot(path: &Path) -> Result<Spot, SpotFileError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let read = || {
        fs::read_to_string(path).map_err(|source| SpotFileError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    let spot = match extension.as_str() {
        "toml" => toml::from_str(&read()?)?,
        "json" => serde_json::from_str(&read()?)?,
        other => return Err(SpotFileError::UnsupportedFormat(other.to_string())),
    };
    tracing::info!(path = %path.display(), "loaded spot file");
    Ok(spot)
}

/// `--spot` when given, otherwise the demo spot
pub fn resolve_spot(path: Option<&Path>) -> Result<Spot, SpotFileError> {
    match path {
        Some(path) => load_spot(path),
        None => Ok(Spot::default()),
    }
}
