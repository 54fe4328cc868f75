//! Effect execution - turns an `Effect` into the `Action` that completes it

use std::sync::Arc;

use crate::action::Action;
use crate::api::{self, ImageLookup};
use crate::effect::Effect;
use crate::preview;

/// Task key an effect runs under. Spawning a key again replaces the running task.
pub fn task_key(effect: &Effect) -> &'static str {
    match effect {
        Effect::LookupImage { .. } => "image_lookup",
        Effect::LoadPreview { .. } => "image_preview",
        Effect::FetchWeather { .. } => "weather",
        Effect::FetchForecast { .. } => "forecast",
    }
}

/// Run one effect against the collaborators. Never fails: errors become `*DidError` actions.
pub async fn run_effect(effect: Effect, images: Arc<dyn ImageLookup>) -> Action {
    match effect {
        Effect::LookupImage {
            generation,
            query,
            limit,
            attempt,
        } => {
            tracing::debug!(%query, ?limit, ?attempt, "image lookup");
            match images.lookup(&query, limit).await {
                Ok(images) => Action::ImageLookupDidLoad {
                    generation,
                    attempt,
                    images,
                },
                Err(error) => {
                    tracing::warn!(%query, ?attempt, %error, "image lookup failed");
                    Action::ImageLookupDidError {
                        generation,
                        attempt,
                        error: error.to_string(),
                    }
                }
            }
        }
        Effect::LoadPreview { generation, url } => match preview::fetch_preview(&url).await {
            Ok(preview) => Action::ImagePreviewDidLoad {
                generation,
                preview,
            },
            Err(error) => {
                tracing::warn!(%url, %error, "image failed to load");
                Action::ImagePreviewDidFail {
                    generation,
                    url,
                    error: error.to_string(),
                }
            }
        },
        Effect::FetchWeather { lat, lon } => match api::weather::fetch_current(lat, lon).await {
            Ok(data) => Action::WeatherDidLoad(data),
            Err(error) => {
                tracing::warn!(lat, lon, %error, "weather fetch failed");
                Action::WeatherDidError(error)
            }
        },
        Effect::FetchForecast {
            generation,
            lat,
            lon,
            days,
        } => match api::weather::fetch_forecast(lat, lon, days).await {
            Ok(days) => Action::ForecastDidLoad { generation, days },
            Err(error) => {
                tracing::warn!(lat, lon, %error, "forecast fetch failed");
                Action::ForecastDidError { generation, error }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::action::LookupAttempt;
    use crate::error::LookupError;
    use crate::state::SpotImage;

    #[derive(Default)]
    struct RecordingLookup {
        calls: Mutex<Vec<(String, Option<usize>)>>,
        fail: bool,
    }

    #[async_trait]
    impl ImageLookup for RecordingLookup {
        async fn lookup(
            &self,
            query: &str,
            limit: Option<usize>,
        ) -> Result<Vec<SpotImage>, LookupError> {
            self.calls.lock().unwrap().push((query.to_string(), limit));
            if self.fail {
                return Err(LookupError::Request("connection refused".into()));
            }
            Ok(vec![SpotImage {
                url: format!("https://img.example/{}.jpg", query.len()),
                photographer: "Lea".into(),
                photographer_url: "https://unsplash.com/@lea".into(),
            }])
        }
    }

    #[tokio::test]
    async fn test_lookup_success_maps_to_did_load() {
        let lookup = Arc::new(RecordingLookup::default());
        let action = run_effect(
            Effect::LookupImage {
                generation: 3,
                query: "Tarifa Cadiz, Spain".into(),
                limit: None,
                attempt: LookupAttempt::Primary,
            },
            lookup.clone(),
        )
        .await;

        assert!(matches!(
            action,
            Action::ImageLookupDidLoad { generation: 3, attempt: LookupAttempt::Primary, ref images }
                if images.len() == 1
        ));
        assert_eq!(
            *lookup.calls.lock().unwrap(),
            vec![("Tarifa Cadiz, Spain".to_string(), None)]
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_maps_to_did_error() {
        let lookup = Arc::new(RecordingLookup {
            fail: true,
            ..Default::default()
        });
        let action = run_effect(
            Effect::LookupImage {
                generation: 1,
                query: "kitesurfing Cadiz, Spain".into(),
                limit: Some(1),
                attempt: LookupAttempt::Fallback,
            },
            lookup.clone(),
        )
        .await;

        assert!(matches!(
            action,
            Action::ImageLookupDidError { attempt: LookupAttempt::Fallback, .. }
        ));
        assert_eq!(lookup.calls.lock().unwrap()[0].1, Some(1));
    }

    #[test]
    fn test_task_keys() {
        assert_eq!(
            task_key(&Effect::FetchWeather { lat: 0.0, lon: 0.0 }),
            "weather"
        );
        assert_eq!(
            task_key(&Effect::LoadPreview {
                generation: 0,
                url: String::new()
            }),
            "image_preview"
        );
    }
}
