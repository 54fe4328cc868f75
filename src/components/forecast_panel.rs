use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tui_dispatch::DataResource;

use super::{Component, ERROR_ICON};
use crate::action::Action;
use crate::glyphs::{compass, weather_emoji};
use crate::state::ForecastDay;

/// Multi-day forecast, one table row per day
pub struct ForecastPanel;

pub struct ForecastPanelProps<'a> {
    pub forecast: &'a DataResource<Vec<ForecastDay>>,
    pub days: u8,
}

/// Border rows plus the table header
const PANEL_CHROME: u16 = 3;

/// Height the panel wants for `days` rows
pub fn panel_height(days: u8) -> u16 {
    u16::from(days.max(1)) + PANEL_CHROME
}

/// "2026-10-19" -> "10-19"; anything else is shown as-is
fn short_date(date: &str) -> &str {
    match date.split_once('-') {
        Some((year, rest)) if year.len() == 4 => rest,
        _ => date,
    }
}

fn day_row(day: &ForecastDay) -> Row<'static> {
    Row::new(vec![
        Cell::from(short_date(&day.date).to_string()),
        Cell::from(weather_emoji(day.weather_code)),
        Cell::from(format!("{:.0}/{:.0}°C", day.temp_min, day.temp_max)),
        Cell::from(Span::styled(
            format!("{:.0} kn", day.wind_speed_max),
            Style::default().fg(Color::Cyan),
        )),
        Cell::from(format!("{:.0} kn", day.wind_gusts_max)),
        Cell::from(compass(day.wind_direction)),
    ])
}

impl Component<Action> for ForecastPanel {
    type Props<'a> = ForecastPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {}-day forecast ", props.days));

        let message = match props.forecast {
            DataResource::Loaded(days) if !days.is_empty() => {
                let header = Row::new(["Day", "", "Temp", "Wind", "Gusts", "Dir"])
                    .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD));
                let table = Table::new(
                    days.iter().map(day_row),
                    [
                        Constraint::Length(6),
                        Constraint::Length(3),
                        Constraint::Length(10),
                        Constraint::Length(7),
                        Constraint::Length(7),
                        Constraint::Length(3),
                    ],
                )
                .header(header)
                .block(block);
                frame.render_widget(table, area);
                return;
            }
            DataResource::Loaded(_) => Line::from("No forecast data"),
            DataResource::Loading | DataResource::Empty => Line::from(Span::styled(
                "Loading forecast...",
                Style::default().fg(Color::DarkGray),
            )),
            DataResource::Failed(error) => Line::from(vec![
                Span::raw(format!("{ERROR_ICON} ")),
                Span::styled(
                    format!("Forecast unavailable: {error}"),
                    Style::default().fg(Color::Rgb(200, 100, 100)),
                ),
            ]),
        };
        frame.render_widget(Paragraph::new(message).block(block), area);
    }
}
