//! Action and state tests using EffectStore and TestHarness
//!
//! Each test walks the card through a mount and its async completions.

use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};
use spotcard::{
    action::{Action, LookupAttempt},
    components::{Component, SpotCard, SpotCardProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, Coordinates, CurrentWeather, ForecastDay, ImagePreview, Spot, SpotImage},
};

fn image(url: &str, photographer: &str) -> SpotImage {
    SpotImage {
        url: url.into(),
        photographer: photographer.into(),
        photographer_url: format!("https://unsplash.com/@{photographer}"),
    }
}

fn preview(url: &str) -> ImagePreview {
    ImagePreview {
        url: url.into(),
        width: 1,
        height: 1,
        pixels: vec![[10, 120, 200]],
    }
}

#[test]
fn test_mount_with_prefetched_images_never_looks_up() {
    let spot = Spot {
        images: Some(vec![image("https://img.example/given.jpg", "Ana")]),
        ..Spot::default()
    };
    let mut store = EffectStore::new(AppState::new(spot), reducer);

    let result = store.dispatch(Action::CardMount);
    assert!(result.changed);
    assert!(!result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::LookupImage { .. })));
    assert!(result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::LoadPreview { url, .. } if url == "https://img.example/given.jpg")));

    assert!(!store.state().image_loading);
    assert_eq!(
        store.state().attribution().map(|i| i.photographer.as_str()),
        Some("Ana")
    );
}

#[test]
fn test_mount_queries_with_name_and_location() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::CardMount);
    assert!(store.state().image_loading);

    let query = result.effects.iter().find_map(|e| match e {
        Effect::LookupImage {
            query,
            limit,
            attempt: LookupAttempt::Primary,
            ..
        } => {
            assert_eq!(*limit, None);
            Some(query.clone())
        }
        _ => None,
    });
    let query = query.expect("mount should look up an image");
    assert!(query.contains("Tarifa"));
    assert!(query.contains("Cadiz, Spain"));
}

#[test]
fn test_lookup_rejection_shows_static_image_without_attribution() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::CardMount);
    let generation = store.state().image_generation;

    let result = store.dispatch(Action::ImageLookupDidError {
        generation,
        attempt: LookupAttempt::Primary,
        error: "missing Unsplash access key".into(),
    });

    let state = store.state();
    assert!(!state.image_loading);
    assert!(state.image_error);
    assert_eq!(state.displayed_image_url(), state.spot.image_url);
    assert!(state.attribution().is_none());
    assert!(matches!(
        &result.effects[..],
        [Effect::LoadPreview { url, .. }] if *url == state.spot.image_url
    ));
}

#[test]
fn test_preview_failure_requests_exactly_one_fallback() {
    let spot = Spot {
        images: Some(vec![image("https://img.example/broken.jpg", "Ana")]),
        ..Spot::default()
    };
    let mut store = EffectStore::new(AppState::new(spot), reducer);
    store.dispatch(Action::CardMount);
    let generation = store.state().image_generation;

    let result = store.dispatch(Action::ImagePreviewDidFail {
        generation,
        url: "https://img.example/broken.jpg".into(),
        error: "404".into(),
    });
    assert_eq!(
        result.effects,
        vec![Effect::LookupImage {
            generation,
            query: "kitesurfing Cadiz, Spain".into(),
            limit: Some(1),
            attempt: LookupAttempt::Fallback,
        }]
    );

    // The fallback image fails too: no third attempt
    store.dispatch(Action::ImageLookupDidLoad {
        generation,
        attempt: LookupAttempt::Fallback,
        images: vec![image("https://img.example/fallback.jpg", "Rui")],
    });
    let result = store.dispatch(Action::ImagePreviewDidFail {
        generation,
        url: "https://img.example/fallback.jpg".into(),
        error: "decode".into(),
    });
    assert!(result.effects.is_empty());
    assert_eq!(
        store.state().displayed_image_url(),
        "https://img.example/fallback.jpg"
    );
}

#[test]
fn test_stale_generation_is_ignored() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::CardMount);
    let old = store.state().image_generation;

    store.dispatch(Action::SpotLoad(Spot {
        name: "Cumbuco".into(),
        location: "Ceara, Brazil".into(),
        ..Spot::default()
    }));
    assert_ne!(store.state().image_generation, old);

    let result = store.dispatch(Action::ImageLookupDidLoad {
        generation: old,
        attempt: LookupAttempt::Primary,
        images: vec![image("https://img.example/tarifa.jpg", "Ana")],
    });
    assert!(!result.changed);
    assert!(store.state().image_loading);
    assert!(store.state().attribution().is_none());

    let result = store.dispatch(Action::ImagePreviewDidLoad {
        generation: old,
        preview: preview(&store.state().spot.image_url),
    });
    assert!(!result.changed);
}

#[test]
fn test_toggles_are_reversible() {
    let long = Spot {
        description: "Flat water lagoon with steady thermals. ".repeat(6),
        ..Spot::default()
    };
    let mut store = EffectStore::new(AppState::new(long), reducer);

    store.dispatch(Action::UiToggleInfo);
    assert!(store.state().info_expanded);
    store.dispatch(Action::UiToggleInfo);
    assert!(!store.state().info_expanded);

    store.dispatch(Action::UiToggleDescription);
    assert!(store.state().description_expanded);
    store.dispatch(Action::UiToggleDescription);
    assert!(!store.state().description_expanded);
}

#[test]
fn test_short_description_toggle_is_noop() {
    let short = Spot {
        description: "Small bay.".into(),
        ..Spot::default()
    };
    let mut store = EffectStore::new(AppState::new(short), reducer);

    let result = store.dispatch(Action::UiToggleDescription);
    assert!(!result.changed);
    assert!(!store.state().description_expanded);
}

#[test]
fn test_forecast_fetches_once() {
    let mut store = EffectStore::new(AppState::default().with_forecast_days(3), reducer);

    let result = store.dispatch(Action::ForecastToggle);
    assert!(store.state().forecast_open);
    assert!(matches!(
        &result.effects[..],
        [Effect::FetchForecast { days: 3, .. }]
    ));

    store.dispatch(Action::ForecastDidLoad {
        generation: 0,
        days: Vec::new(),
    });
    let result = store.dispatch(Action::ForecastToggle);
    assert!(!store.state().forecast_open);
    assert!(result.effects.is_empty());

    let result = store.dispatch(Action::ForecastToggle);
    assert!(store.state().forecast_open);
    assert!(result.effects.is_empty());
}

#[test]
fn test_forecast_for_previous_spot_is_dropped() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::ForecastToggle);
    let tarifa_generation = match &result.effects[..] {
        [Effect::FetchForecast { generation, .. }] => *generation,
        other => panic!("expected a forecast fetch, got {other:?}"),
    };

    store.dispatch(Action::SpotLoad(Spot {
        name: "Cumbuco".into(),
        location: "Ceara, Brazil".into(),
        coordinates: Coordinates {
            lat: -3.62,
            lon: -38.73,
        },
        ..Spot::default()
    }));

    let result = store.dispatch(Action::ForecastDidLoad {
        generation: tarifa_generation,
        days: vec![ForecastDay {
            date: "tarifa-day".into(),
            ..Default::default()
        }],
    });
    assert!(!result.changed);
    assert!(store.state().forecast.is_empty());

    let result = store.dispatch(Action::ForecastToggle);
    assert!(store.state().forecast_open);
    assert!(matches!(
        &result.effects[..],
        [Effect::FetchForecast { generation, lat, .. }]
            if *generation != tarifa_generation && *lat == -3.62
    ));

    let result = store.dispatch(Action::ForecastDidError {
        generation: tarifa_generation,
        error: "timeout".into(),
    });
    assert!(!result.changed);
    assert!(store.state().forecast.is_loading());
}

#[test]
fn test_weather_refresh_keeps_loaded_data() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let weather = CurrentWeather {
        temperature: 21.0,
        wind_speed: 19.0,
        ..Default::default()
    };

    store.dispatch(Action::WeatherFetch);
    assert!(store.state().weather.is_loading());
    store.dispatch(Action::WeatherDidLoad(weather.clone()));

    let result = store.dispatch(Action::WeatherFetch);
    assert!(matches!(result.effects[0], Effect::FetchWeather { .. }));
    assert_eq!(store.state().weather.data(), Some(&weather));
}

#[test]
fn test_component_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = SpotCard::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("i d f r q", |state, event| {
        let props = SpotCardProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(5);
    actions.assert_first(Action::UiToggleInfo);
    assert_emitted!(actions, Action::UiToggleDescription);
    assert_emitted!(actions, Action::ForecastToggle);
    assert_emitted!(actions, Action::WeatherFetch);
    assert_emitted!(actions, Action::Quit);
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = SpotCard::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("i f q", |state, event| {
        let props = SpotCardProps {
            state,
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad(CurrentWeather::default());
    let toggle = Action::UiToggleInfo;
    let quit = Action::Quit;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(toggle.category(), Some("ui"));
    assert_eq!(quit.category(), None);

    assert!(did_load.is_weather_did());
    assert!(toggle.is_ui());
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![Action::CardMount, Action::WeatherFetch];

    assert_emitted!(actions, Action::CardMount);
    assert_emitted!(actions, Action::WeatherFetch);
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::ImageLookupDidError { .. });
}
