//! Application state - the spot being shown plus the card's local UI state

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// Descriptions longer than this (in chars) are truncated until expanded.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;

/// How many entries of `best_months` the card shows.
pub const BEST_MONTHS_SHOWN: usize = 3;

pub const DEFAULT_FORECAST_DAYS: u8 = 5;

/// Skill tiers, ordered from easiest to hardest
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WaveType {
    Flat,
    #[serde(alias = "chop")]
    Choppy,
    Small,
    Medium,
    Large,
    /// Anything the card has no glyph for
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WaveInfo {
    #[serde(alias = "averageHeight")]
    pub average_height: String,
    pub direction: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: WaveType,
}

/// Travel context shown in the expandable panel. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LocalInfo {
    pub languages: Option<Vec<String>>,
    pub currency: Option<String>,
    #[serde(alias = "timeZone")]
    pub time_zone: Option<String>,
    #[serde(alias = "funFact")]
    pub fun_fact: Option<String>,
    #[serde(alias = "localTips")]
    pub local_tips: Option<Vec<String>>,
    #[serde(alias = "localFood")]
    pub local_food: Option<Vec<String>>,
    #[serde(alias = "visaRequirements")]
    pub visa_requirements: Option<String>,
}

/// An image together with its photographer attribution
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpotImage {
    pub url: String,
    pub photographer: String,
    #[serde(alias = "photographerUrl")]
    pub photographer_url: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A kitesurfing location. Treated as immutable input by the card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Spot {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub trending: bool,
    #[serde(default, alias = "beginnerFriendly")]
    pub beginner_friendly: bool,
    #[serde(default, alias = "hiddenGem")]
    pub hidden_gem: bool,
    pub coordinates: Coordinates,
    #[serde(default, alias = "bestMonths")]
    pub best_months: Vec<String>,
    #[serde(default, alias = "waveInfo")]
    pub wave: Option<WaveInfo>,
    #[serde(default, alias = "localInfo")]
    pub local_info: Option<LocalInfo>,
    /// Pre-fetched images supplied by the caller
    #[serde(default)]
    pub images: Option<Vec<SpotImage>>,
}

impl Spot {
    /// First pre-fetched image, if the caller supplied any
    pub fn prefetched_image(&self) -> Option<&SpotImage> {
        self.images.as_ref().and_then(|images| images.first())
    }

    pub fn description_is_long(&self) -> bool {
        self.description.chars().count() > DESCRIPTION_PREVIEW_CHARS
    }
}

impl Default for Spot {
    fn default() -> Self {
        Self {
            name: "Tarifa".into(),
            location: "Cadiz, Spain".into(),
            description: "The wind capital of Europe. Levante and Poniente winds funnel \
                          through the Strait of Gibraltar, giving strong and reliable \
                          conditions for most of the year on long sandy beaches."
                .into(),
            image_url: "https://images.unsplash.com/photo-1559288804-29a0e5f4c2d2".into(),
            difficulty: Difficulty::Intermediate,
            trending: true,
            beginner_friendly: false,
            hidden_gem: false,
            coordinates: Coordinates {
                lat: 36.0143,
                lon: -5.6044,
            },
            best_months: ["Jun", "Jul", "Aug", "Sep"]
                .into_iter()
                .map(String::from)
                .collect(),
            wave: Some(WaveInfo {
                average_height: "0.5-1.5m".into(),
                direction: "W".into(),
                kind: WaveType::Choppy,
            }),
            local_info: Some(LocalInfo {
                languages: Some(vec!["Spanish".into()]),
                currency: Some("EUR".into()),
                time_zone: Some("CET (UTC+1)".into()),
                ..Default::default()
            }),
            images: None,
        }
    }
}

/// Current conditions for the snapshot widget
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentWeather {
    pub temperature: f32,
    /// Knots
    pub wind_speed: f32,
    /// Knots
    pub wind_gusts: f32,
    pub wind_direction: u16,
    pub weather_code: u8, // WMO weather code
    pub description: String,
}

/// One row of the multi-day forecast
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    /// ISO date, e.g. "2026-10-19"
    pub date: String,
    pub temp_min: f32,
    pub temp_max: f32,
    pub wind_speed_max: f32,
    pub wind_gusts_max: f32,
    pub wind_direction: u16,
    pub weather_code: u8,
}

/// Downsampled RGB pixels of the displayed image, ready for half-block drawing
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImagePreview {
    /// URL the preview was decoded from
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Row-major, `width * height` entries
    pub pixels: Vec<[u8; 3]>,
}

impl ImagePreview {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

/// Application state - everything the card needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    #[debug(section = "Spot", label = "Spot", debug_fmt)]
    pub spot: Spot,

    // --- Toggles ---
    #[debug(section = "UI", label = "Local info")]
    pub info_expanded: bool,

    #[debug(section = "UI", label = "Full description")]
    pub description_expanded: bool,

    #[debug(section = "UI", label = "Forecast")]
    pub forecast_open: bool,

    // --- Image lifecycle ---
    #[debug(section = "Image", label = "Loading")]
    pub image_loading: bool,

    #[debug(section = "Image", label = "Error")]
    pub image_error: bool,

    /// Image/photographer pair resolved for this card, overrides `spot.image_url`
    #[debug(section = "Image", label = "Resolved", debug_fmt)]
    pub resolved_image: Option<SpotImage>,

    /// Set once the single compensating lookup has been issued
    #[debug(section = "Image", label = "Fallback tried")]
    pub fallback_attempted: bool,

    /// Bumped on every mount; image completions from older generations are dropped
    #[debug(section = "Image", label = "Generation")]
    pub image_generation: u64,

    #[debug(skip)]
    pub preview: DataResource<ImagePreview>,

    // --- Weather collaborators ---
    #[debug(section = "Weather", label = "Current", debug_fmt)]
    pub weather: DataResource<CurrentWeather>,

    #[debug(section = "Weather", label = "Forecast", debug_fmt)]
    pub forecast: DataResource<Vec<ForecastDay>>,

    /// Bumped on `SpotLoad`. Forecast completions for an older spot are dropped
    #[debug(section = "Weather", label = "Spot generation")]
    pub spot_generation: u64,

    #[debug(section = "Weather", label = "Forecast days")]
    pub forecast_days: u8,
}

impl AppState {
    pub fn new(spot: Spot) -> Self {
        Self {
            spot,
            info_expanded: false,
            description_expanded: false,
            forecast_open: false,
            image_loading: false,
            image_error: false,
            resolved_image: None,
            fallback_attempted: false,
            image_generation: 0,
            preview: DataResource::Empty,
            weather: DataResource::Empty,
            forecast: DataResource::Empty,
            spot_generation: 0,
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }

    pub fn with_forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = days.max(1);
        self
    }

    /// URL the image region shows: the resolved image, else the spot's static one
    pub fn displayed_image_url(&self) -> &str {
        self.resolved_image
            .as_ref()
            .map(|image| image.url.as_str())
            .unwrap_or(&self.spot.image_url)
    }

    /// Attribution is only known for resolved images
    pub fn attribution(&self) -> Option<&SpotImage> {
        self.resolved_image.as_ref()
    }

    pub fn primary_image_query(&self) -> String {
        format!("{} {}", self.spot.name, self.spot.location)
    }

    pub fn fallback_image_query(&self) -> String {
        format!("kitesurfing {}", self.spot.location)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Spot::default())
    }
}
