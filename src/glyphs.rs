//! Glyph tables keyed by categorical tags
//!
//! Weather conditions, wave types and local-info fields each map to a fixed
//! glyph so the components never branch on raw strings.

use crate::state::{LocalInfo, WaveType};

// ============================================================================
// Weather
// ============================================================================

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Map WMO weather code to condition
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::ClearSky,
            1 | 2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51..=57 => Self::Drizzle,
            61..=67 | 80..=82 => Self::Rain,
            71..=77 | 85 | 86 => Self::Snow,
            95..=99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::ClearSky => "\u{2600}\u{fe0f}",
            Self::PartlyCloudy => "\u{26c5}",
            Self::Cloudy | Self::Unknown => "\u{2601}\u{fe0f}",
            Self::Fog => "\u{1f32b}\u{fe0f}",
            Self::Drizzle => "\u{1f326}\u{fe0f}",
            Self::Rain => "\u{1f327}\u{fe0f}",
            Self::Snow => "\u{2744}\u{fe0f}",
            Self::Thunderstorm => "\u{26c8}\u{fe0f}",
        }
    }
}

pub fn weather_emoji(code: u8) -> &'static str {
    WeatherCondition::from_code(code).emoji()
}

const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Eight-point compass name for a bearing in degrees
pub fn compass(degrees: u16) -> &'static str {
    let sector = ((degrees % 360) as f32 / 45.0).round() as usize % COMPASS.len();
    COMPASS[sector]
}

// ============================================================================
// Waves
// ============================================================================

const WAVE_GLYPHS: [(WaveType, &str); 5] = [
    (WaveType::Flat, "\u{2014}"),
    (WaveType::Choppy, "\u{2248}"),
    (WaveType::Small, "\u{223c}"),
    (WaveType::Medium, "\u{223f}"),
    (WaveType::Large, "\u{224b}"),
];

pub const DEFAULT_WAVE_GLYPH: &str = "~";

pub fn wave_glyph(kind: WaveType) -> &'static str {
    WAVE_GLYPHS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(DEFAULT_WAVE_GLYPH)
}

pub fn wave_label(kind: WaveType) -> &'static str {
    match kind {
        WaveType::Flat => "Flat water",
        WaveType::Choppy => "Choppy",
        WaveType::Small => "Small waves",
        WaveType::Medium => "Medium waves",
        WaveType::Large => "Big waves",
        WaveType::Unknown => "Waves",
    }
}

// ============================================================================
// Local information
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalInfoField {
    Languages,
    Currency,
    TimeZone,
    Visa,
    LocalTips,
    LocalFood,
    FunFact,
}

impl LocalInfoField {
    /// Panel order
    pub const ALL: [LocalInfoField; 7] = [
        LocalInfoField::Languages,
        LocalInfoField::Currency,
        LocalInfoField::TimeZone,
        LocalInfoField::Visa,
        LocalInfoField::LocalTips,
        LocalInfoField::LocalFood,
        LocalInfoField::FunFact,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            Self::Languages => "\u{1f5e3}\u{fe0f}",
            Self::Currency => "\u{1f4b1}",
            Self::TimeZone => "\u{1f552}",
            Self::Visa => "\u{1f6c2}",
            Self::LocalTips => "\u{1f4a1}",
            Self::LocalFood => "\u{1f37d}\u{fe0f}",
            Self::FunFact => "\u{2728}",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Currency => "Currency",
            Self::TimeZone => "Time zone",
            Self::Visa => "Visa",
            Self::LocalTips => "Local tips",
            Self::LocalFood => "Local food",
            Self::FunFact => "Fun fact",
        }
    }

    /// The field's display value, or `None` when the spot doesn't carry it
    pub fn value(self, info: &LocalInfo) -> Option<String> {
        let join = |items: &Option<Vec<String>>| {
            items
                .as_ref()
                .filter(|items| !items.is_empty())
                .map(|items| items.join(", "))
        };
        match self {
            Self::Languages => join(&info.languages),
            Self::Currency => info.currency.clone(),
            Self::TimeZone => info.time_zone.clone(),
            Self::Visa => info.visa_requirements.clone(),
            Self::LocalTips => join(&info.local_tips),
            Self::LocalFood => join(&info.local_food),
            Self::FunFact => info.fun_fact.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_wave_type_has_a_distinct_glyph() {
        let kinds = [
            WaveType::Flat,
            WaveType::Choppy,
            WaveType::Small,
            WaveType::Medium,
            WaveType::Large,
        ];
        let glyphs: Vec<_> = kinds.iter().map(|k| wave_glyph(*k)).collect();
        for (i, glyph) in glyphs.iter().enumerate() {
            assert_ne!(*glyph, DEFAULT_WAVE_GLYPH);
            assert!(!glyphs[i + 1..].contains(glyph));
        }
        assert_eq!(wave_glyph(WaveType::Unknown), DEFAULT_WAVE_GLYPH);
    }

    #[test]
    fn test_compass() {
        assert_eq!(compass(0), "N");
        assert_eq!(compass(93), "E");
        assert_eq!(compass(350), "N");
        assert_eq!(compass(225), "SW");
    }

    #[test]
    fn test_local_info_values() {
        let info = LocalInfo {
            languages: Some(vec!["Portuguese".into(), "English".into()]),
            local_tips: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(
            LocalInfoField::Languages.value(&info).as_deref(),
            Some("Portuguese, English")
        );
        assert_eq!(LocalInfoField::LocalTips.value(&info), None);
        assert_eq!(LocalInfoField::Currency.value(&info), None);
    }

    #[test]
    fn test_weather_condition_from_code() {
        assert_eq!(WeatherCondition::from_code(0), WeatherCondition::ClearSky);
        assert_eq!(WeatherCondition::from_code(81), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_code(42), WeatherCondition::Unknown);
    }
}
