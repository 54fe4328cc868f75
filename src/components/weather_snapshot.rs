use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::DataResource;

use super::{Component, ERROR_ICON};
use crate::action::Action;
use crate::glyphs::{compass, weather_emoji};
use crate::state::CurrentWeather;

/// Live conditions for the spot, two rows
pub struct WeatherSnapshot;

pub struct WeatherSnapshotProps<'a> {
    pub weather: &'a DataResource<CurrentWeather>,
}

pub const SNAPSHOT_HEIGHT: u16 = 2;

/// Colour bands for kiteable wind, in knots
fn wind_color(knots: f32) -> Color {
    match knots {
        k if k < 12.0 => Color::Gray,
        k if k < 20.0 => Color::Green,
        k if k < 30.0 => Color::Yellow,
        _ => Color::Red,
    }
}

fn conditions_lines(weather: &CurrentWeather) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::raw(format!("{} ", weather_emoji(weather.weather_code))),
            Span::styled(
                format!("{:.1}°C", weather.temperature),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(
                format!("  {}", weather.description),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Wind ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0} kn", weather.wind_speed),
                Style::default().fg(wind_color(weather.wind_speed)).bold(),
            ),
            Span::styled(
                format!(" {}", compass(weather.wind_direction)),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled("  gusts ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0} kn", weather.wind_gusts),
                Style::default().fg(wind_color(weather.wind_gusts)),
            ),
        ]),
    ]
}

impl Component<Action> for WeatherSnapshot {
    type Props<'a> = WeatherSnapshotProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines = match props.weather {
            DataResource::Loaded(weather) => conditions_lines(weather),
            DataResource::Loading => vec![Line::from(Span::styled(
                "Loading weather...",
                Style::default().fg(Color::DarkGray),
            ))],
            DataResource::Failed(error) => vec![Line::from(vec![
                Span::raw(format!("{ERROR_ICON} ")),
                Span::styled("Weather unavailable: ", Style::default().fg(Color::Red)),
                Span::styled(error.clone(), Style::default().fg(Color::Rgb(200, 100, 100))),
            ])],
            DataResource::Empty => vec![Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to fetch weather", Style::default().fg(Color::DarkGray)),
            ])],
        };
        frame.render_widget(Paragraph::new(lines), area);
    }
}
