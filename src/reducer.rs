//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::{Action, LookupAttempt};
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Card lifecycle =====
        Action::CardMount => DispatchResult::changed_with_many(mount(state)),

        Action::SpotLoad(spot) => {
            state.spot = spot;
            state.spot_generation = state.spot_generation.wrapping_add(1);
            state.info_expanded = false;
            state.description_expanded = false;
            state.forecast_open = false;
            state.weather = DataResource::Empty;
            state.forecast = DataResource::Empty;
            DispatchResult::changed_with_many(mount(state))
        }

        // ===== Image actions =====
        Action::ImageLookupDidLoad {
            generation,
            attempt,
            images,
        } => {
            if generation != state.image_generation {
                return stale("lookup result", generation, state);
            }
            let first = images.into_iter().next();
            match attempt {
                LookupAttempt::Primary => {
                    state.image_loading = false;
                    if first.is_some() {
                        state.resolved_image = first;
                    }
                    DispatchResult::changed_with(load_preview(state))
                }
                LookupAttempt::Fallback => match first {
                    Some(image) => {
                        state.resolved_image = Some(image);
                        DispatchResult::changed_with(load_preview(state))
                    }
                    None => DispatchResult::unchanged(),
                },
            }
        }

        Action::ImageLookupDidError {
            generation,
            attempt,
            error,
        } => {
            if generation != state.image_generation {
                return stale("lookup error", generation, state);
            }
            match attempt {
                LookupAttempt::Primary => {
                    tracing::debug!(%error, "primary image lookup failed, using static image");
                    state.image_loading = false;
                    state.image_error = true;
                    state.resolved_image = None;
                    DispatchResult::changed_with(load_preview(state))
                }
                // Keep whatever is displayed; no further attempts.
                LookupAttempt::Fallback => DispatchResult::unchanged(),
            }
        }

        Action::ImagePreviewDidLoad {
            generation,
            preview,
        } => {
            if generation != state.image_generation
                || preview.url != state.displayed_image_url()
            {
                return stale("preview", generation, state);
            }
            state.preview = DataResource::Loaded(preview);
            DispatchResult::changed()
        }

        Action::ImagePreviewDidFail {
            generation,
            url,
            error,
        } => {
            if generation != state.image_generation || url != state.displayed_image_url() {
                return stale("preview failure", generation, state);
            }
            state.preview = DataResource::Failed(error);
            state.image_error = true;
            if state.fallback_attempted {
                return DispatchResult::changed();
            }
            state.fallback_attempted = true;
            DispatchResult::changed_with(Effect::LookupImage {
                generation: state.image_generation,
                query: state.fallback_image_query(),
                limit: Some(1),
                attempt: LookupAttempt::Fallback,
            })
        }

        // ===== Weather actions =====
        Action::WeatherFetch => DispatchResult::changed_with(fetch_weather(state)),

        Action::WeatherDidLoad(data) => {
            state.weather = DataResource::Loaded(data);
            DispatchResult::changed()
        }

        Action::WeatherDidError(msg) => {
            state.weather = DataResource::Failed(msg);
            DispatchResult::changed()
        }

        // ===== Forecast actions =====
        Action::ForecastToggle => {
            state.forecast_open = !state.forecast_open;
            let needs_fetch = state.forecast.is_empty() || state.forecast.is_failed();
            if state.forecast_open && needs_fetch {
                state.forecast = DataResource::Loading;
                let coords = state.spot.coordinates;
                DispatchResult::changed_with(Effect::FetchForecast {
                    generation: state.spot_generation,
                    lat: coords.lat,
                    lon: coords.lon,
                    days: state.forecast_days,
                })
            } else {
                DispatchResult::changed()
            }
        }

        Action::ForecastDidLoad { generation, days } => {
            if generation != state.spot_generation {
                return stale_forecast(generation, state);
            }
            state.forecast = DataResource::Loaded(days);
            DispatchResult::changed()
        }

        Action::ForecastDidError { generation, error } => {
            if generation != state.spot_generation {
                return stale_forecast(generation, state);
            }
            state.forecast = DataResource::Failed(error);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleInfo => {
            state.info_expanded = !state.info_expanded;
            DispatchResult::changed()
        }

        Action::UiToggleDescription => {
            if !state.spot.description_is_long() {
                return DispatchResult::unchanged();
            }
            state.description_expanded = !state.description_expanded;
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Start a new image generation for the current spot and fetch its weather.
fn mount(state: &mut AppState) -> Vec<Effect> {
    state.image_generation = state.image_generation.wrapping_add(1);
    state.image_loading = false;
    state.image_error = false;
    state.fallback_attempted = false;
    state.resolved_image = None;
    state.preview = DataResource::Empty;

    let image_effect = match state.spot.prefetched_image().cloned() {
        Some(image) => {
            state.resolved_image = Some(image);
            load_preview(state)
        }
        None => {
            state.image_loading = true;
            Effect::LookupImage {
                generation: state.image_generation,
                query: state.primary_image_query(),
                limit: None,
                attempt: LookupAttempt::Primary,
            }
        }
    };

    vec![image_effect, fetch_weather(state)]
}

fn load_preview(state: &mut AppState) -> Effect {
    state.preview = DataResource::Loading;
    Effect::LoadPreview {
        generation: state.image_generation,
        url: state.displayed_image_url().to_string(),
    }
}

/// Keeps showing loaded data while a refresh is in flight.
fn fetch_weather(state: &mut AppState) -> Effect {
    if !state.weather.is_loaded() {
        state.weather = DataResource::Loading;
    }
    let coords = state.spot.coordinates;
    Effect::FetchWeather {
        lat: coords.lat,
        lon: coords.lon,
    }
}

fn stale(what: &str, generation: u64, state: &AppState) -> DispatchResult<Effect> {
    tracing::debug!(
        what,
        generation,
        current = state.image_generation,
        "dropping stale image completion"
    );
    DispatchResult::unchanged()
}

fn stale_forecast(generation: u64, state: &AppState) -> DispatchResult<Effect> {
    tracing::debug!(
        generation,
        current = state.spot_generation,
        "dropping forecast for a previous spot"
    );
    DispatchResult::unchanged()
}
