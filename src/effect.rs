//! Effects - side effects declared by the reducer

use crate::action::LookupAttempt;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the image-lookup collaborator for images matching `query`
    LookupImage {
        generation: u64,
        query: String,
        /// `None` leaves the page size to the service
        limit: Option<usize>,
        attempt: LookupAttempt,
    },
    /// Download and decode the displayed image
    LoadPreview { generation: u64, url: String },
    /// Fetch current conditions for the given coordinates
    FetchWeather { lat: f64, lon: f64 },
    /// Fetch a daily forecast for the given coordinates
    FetchForecast {
        generation: u64,
        lat: f64,
        lon: f64,
        days: u8,
    },
}
