//! Actions - intents from the user and results from async tasks

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{CurrentWeather, ForecastDay, ImagePreview, Spot, SpotImage};

/// Which image lookup a result belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LookupAttempt {
    /// Keyed by spot name and location, unbounded limit
    Primary,
    /// Single-result retry issued after the displayed image failed to load
    Fallback,
}

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Card lifecycle =====
    /// Card was mounted: resolve the image and fetch the weather snapshot
    CardMount,

    /// The input spot changed; behaves like a fresh mount
    SpotLoad(Spot),

    // ===== Image category =====
    /// Result: image lookup returned (possibly empty) results
    ImageLookupDidLoad {
        generation: u64,
        attempt: LookupAttempt,
        images: Vec<SpotImage>,
    },

    /// Result: image lookup failed
    ImageLookupDidError {
        generation: u64,
        attempt: LookupAttempt,
        error: String,
    },

    /// Result: displayed image downloaded and decoded
    ImagePreviewDidLoad {
        generation: u64,
        preview: ImagePreview,
    },

    /// Result: displayed image could not be downloaded or decoded
    ImagePreviewDidFail {
        generation: u64,
        url: String,
        error: String,
    },

    // ===== Weather category =====
    /// Intent: refresh the current conditions
    WeatherFetch,

    WeatherDidLoad(CurrentWeather),

    WeatherDidError(String),

    // ===== Forecast category =====
    /// Show or hide the multi-day forecast panel
    ForecastToggle,

    ForecastDidLoad {
        generation: u64,
        days: Vec<ForecastDay>,
    },

    ForecastDidError {
        generation: u64,
        error: String,
    },

    // ===== UI category =====
    /// Expand or collapse the local information panel
    UiToggleInfo,

    /// Expand or collapse the full description
    UiToggleDescription,

    /// Force a re-render
    Render,

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
