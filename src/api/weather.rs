//! Open-Meteo client for the weather snapshot and the daily forecast

use serde::Deserialize;

use crate::state::{CurrentWeather, ForecastDay};

const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

// ============================================================================
// Current conditions
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f32,
    wind_speed_10m: f32,
    wind_gusts_10m: f32,
    wind_direction_10m: f32,
    weather_code: u8,
}

/// Fetch current conditions, wind in knots
pub async fn fetch_current(lat: f64, lon: f64) -> Result<CurrentWeather, String> {
    let url = format!(
        "{FORECAST_ENDPOINT}?latitude={lat}&longitude={lon}\
         &current=temperature_2m,wind_speed_10m,wind_gusts_10m,wind_direction_10m,weather_code\
         &wind_speed_unit=kn"
    );

    let data: CurrentResponse = get_json(&url).await?;
    let current = data.current;
    Ok(CurrentWeather {
        temperature: current.temperature_2m,
        wind_speed: current.wind_speed_10m,
        wind_gusts: current.wind_gusts_10m,
        wind_direction: normalize_degrees(current.wind_direction_10m),
        weather_code: current.weather_code,
        description: weather_description(current.weather_code).to_string(),
    })
}

// ============================================================================
// Daily forecast
// ============================================================================

#[derive(Debug, Deserialize)]
struct DailyResponse {
    daily: DailyBlock,
}

/// Open-Meteo returns one array per variable, indexed by day.
#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f32>>,
    temperature_2m_min: Vec<Option<f32>>,
    wind_speed_10m_max: Vec<Option<f32>>,
    wind_gusts_10m_max: Vec<Option<f32>>,
    wind_direction_10m_dominant: Vec<Option<f32>>,
    weather_code: Vec<Option<u8>>,
}

/// Fetch a `days`-long daily forecast, wind in knots
pub async fn fetch_forecast(lat: f64, lon: f64, days: u8) -> Result<Vec<ForecastDay>, String> {
    let url = format!(
        "{FORECAST_ENDPOINT}?latitude={lat}&longitude={lon}\
         &daily=temperature_2m_max,temperature_2m_min,wind_speed_10m_max,wind_gusts_10m_max,\
         wind_direction_10m_dominant,weather_code\
         &wind_speed_unit=kn&timezone=auto&forecast_days={days}"
    );

    let data: DailyResponse = get_json(&url).await?;
    Ok(forecast_days(data.daily))
}

fn forecast_days(daily: DailyBlock) -> Vec<ForecastDay> {
    let at = |values: &[Option<f32>], index: usize| values.get(index).copied().flatten();

    daily
        .time
        .iter()
        .enumerate()
        .map(|(i, date)| ForecastDay {
            date: date.clone(),
            temp_min: at(&daily.temperature_2m_min, i).unwrap_or_default(),
            temp_max: at(&daily.temperature_2m_max, i).unwrap_or_default(),
            wind_speed_max: at(&daily.wind_speed_10m_max, i).unwrap_or_default(),
            wind_gusts_max: at(&daily.wind_gusts_10m_max, i).unwrap_or_default(),
            wind_direction: normalize_degrees(
                at(&daily.wind_direction_10m_dominant, i).unwrap_or_default(),
            ),
            weather_code: daily.weather_code.get(i).copied().flatten().unwrap_or_default(),
        })
        .collect()
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = super::http_client()
        .get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    response.json().await.map_err(|e| e.to_string())
}

fn normalize_degrees(degrees: f32) -> u16 {
    (degrees.round() as i32).rem_euclid(360) as u16
}

/// Convert WMO weather code to human-readable description
pub fn weather_description(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_arrays_become_rows() {
        let json = r#"{"daily":{
            "time":["2026-10-19","2026-10-20"],
            "temperature_2m_max":[24.1,null],
            "temperature_2m_min":[17.0,16.5],
            "wind_speed_10m_max":[18.4,22.0],
            "wind_gusts_10m_max":[26.0,31.2],
            "wind_direction_10m_dominant":[275.6,-10.0],
            "weather_code":[1,3]
        }}"#;
        let data: DailyResponse = serde_json::from_str(json).unwrap();
        let days = forecast_days(data.daily);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2026-10-19");
        assert_eq!(days[0].wind_direction, 276);
        assert_eq!(days[1].temp_max, 0.0);
        assert_eq!(days[1].wind_direction, 350);
        assert_eq!(days[1].weather_code, 3);
    }

    #[test]
    fn test_weather_description() {
        assert_eq!(weather_description(0), "Clear sky");
        assert_eq!(weather_description(81), "Rain showers");
        assert_eq!(weather_description(200), "Unknown");
    }
}
