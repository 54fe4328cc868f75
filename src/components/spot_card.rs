use std::borrow::Cow;

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::forecast_panel::{self, ForecastPanel, ForecastPanelProps};
use super::local_info_panel::{self, LocalInfoPanel, LocalInfoPanelProps};
use super::spot_header::HEADER_OVERHEAD;
use super::weather_snapshot::SNAPSHOT_HEIGHT;
use super::{
    CardImage, CardImageProps, Component, SpotHeader, SpotHeaderProps, WeatherSnapshot,
    WeatherSnapshotProps,
};
use crate::action::Action;
use crate::glyphs::{wave_glyph, wave_label};
use crate::state::{AppState, BEST_MONTHS_SHOWN, DESCRIPTION_PREVIEW_CHARS, Spot, WaveInfo};

/// Tallest FIGlet font in the header stack
const HEADER_NAME_ROWS: u16 = 6;
const MIN_IMAGE_ROWS: u16 = 4;

/// Props for SpotCard - read-only view of state
pub struct SpotCardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The spot card. Remembers where its clickable regions were last drawn.
#[derive(Default)]
pub struct SpotCard {
    image_area: Rect,
    info_button_area: Rect,
}

impl SpotCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image_area(&self) -> Rect {
        self.image_area
    }

    pub fn info_button_area(&self) -> Rect {
        self.info_button_area
    }

    fn is_info_target(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.image_area.contains(position) || self.info_button_area.contains(position)
    }
}

/// First three months joined, always followed by "..."; `None` when there are none.
pub fn best_months_text(months: &[String]) -> Option<String> {
    if months.is_empty() {
        return None;
    }
    let shown: Vec<&str> = months
        .iter()
        .take(BEST_MONTHS_SHOWN)
        .map(String::as_str)
        .collect();
    Some(format!("{}...", shown.join(", ")))
}

/// The description as displayed: cut at `DESCRIPTION_PREVIEW_CHARS` unless expanded.
pub fn description_text(description: &str, expanded: bool) -> Cow<'_, str> {
    if expanded || description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return Cow::Borrowed(description);
    }
    let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    Cow::Owned(format!("{}...", preview.trim_end()))
}

pub fn wave_text(wave: &WaveInfo) -> String {
    format!(
        "{} {} \u{00b7} {} from {}",
        wave_glyph(wave.kind),
        wave_label(wave.kind),
        wave.average_height,
        wave.direction
    )
}

fn description_lines(spot: &Spot, expanded: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        description_text(&spot.description, expanded).into_owned(),
        Style::default().fg(Color::Gray),
    ))];
    if spot.description_is_long() {
        let hint = if expanded { "show less" } else { "show more" };
        lines.push(Line::from(vec![
            Span::styled("d", Style::default().fg(Color::Cyan).bold()),
            Span::styled(format!(" {hint}"), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines
}

/// Wrapped height estimate for `lines` at `width` columns. Word wrapping can
/// spill one row past the character count, so multi-row lines get a spare.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    lines
        .iter()
        .map(|line| match line.width().max(1).div_ceil(width) {
            1 => 1,
            rows => rows as u16 + 1,
        })
        .sum()
}

fn detail_lines(spot: &Spot) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();
    if let Some(months) = best_months_text(&spot.best_months) {
        lines.push(Line::from(vec![
            Span::styled("Best months: ", label),
            Span::styled(months, Style::default().fg(Color::White)),
        ]));
    }
    if let Some(wave) = &spot.wave {
        lines.push(Line::from(vec![
            Span::styled("Waves: ", label),
            Span::styled(wave_text(wave), Style::default().fg(Color::Cyan)),
        ]));
    }
    lines
}

fn attribution_line(state: &AppState) -> Line<'static> {
    match state.attribution() {
        Some(image) => Line::from(vec![
            Span::styled("Photo by ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                image.photographer.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
            ),
            Span::styled(
                format!("  {}", image.photographer_url),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::default(),
    }
}

fn info_button_line(expanded: bool) -> Line<'static> {
    let (arrow, text) = if expanded {
        ("\u{25be}", "Hide local info")
    } else {
        ("\u{25b8}", "Local info")
    };
    Line::from(vec![
        Span::styled(
            format!("{arrow} {text} "),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("[i]", Style::default().fg(Color::DarkGray)),
    ])
    .right_aligned()
}

impl Component<Action> for SpotCard {
    type Props<'a> = SpotCardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('i') | KeyCode::Enter => Some(Action::UiToggleInfo),
                KeyCode::Char('d') => Some(Action::UiToggleDescription),
                KeyCode::Char('f') => Some(Action::ForecastToggle),
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::WeatherFetch),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            EventKind::Mouse(mouse)
                if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && self.is_info_target(mouse.column, mouse.row) =>
            {
                Some(Action::UiToggleInfo)
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: SpotCardProps<'_>) {
        let state = props.state;
        let spot = &state.spot;

        let outer = Layout::vertical([
            Constraint::Min(1),    // Card
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let card = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if props.is_focused {
                Color::Cyan
            } else {
                Color::DarkGray
            }));
        let inner = card.inner(outer[0]);
        frame.render_widget(card, outer[0]);

        let description = description_lines(spot, state.description_expanded);
        let details = detail_lines(spot);
        let info_height = if state.info_expanded {
            local_info_panel::panel_height(spot.local_info.as_ref())
        } else {
            0
        };
        let forecast_height = if state.forecast_open {
            forecast_panel::panel_height(state.forecast_days)
        } else {
            0
        };

        let chunks = Layout::vertical([
            Constraint::Max(HEADER_NAME_ROWS + HEADER_OVERHEAD),
            Constraint::Min(MIN_IMAGE_ROWS),
            Constraint::Length(1), // Attribution
            Constraint::Length(wrapped_height(&description, inner.width)),
            Constraint::Length(details.len() as u16),
            Constraint::Length(SNAPSHOT_HEIGHT),
            Constraint::Length(forecast_height),
            Constraint::Length(info_height),
            Constraint::Length(1), // Local info button
        ])
        .split(inner);

        SpotHeader.render(frame, chunks[0], SpotHeaderProps { spot });

        self.image_area = chunks[1];
        CardImage.render(
            frame,
            chunks[1],
            CardImageProps {
                spot,
                preview: &state.preview,
                url: state.displayed_image_url(),
                is_loading: state.image_loading,
            },
        );

        frame.render_widget(Paragraph::new(attribution_line(state)), chunks[2]);
        frame.render_widget(
            Paragraph::new(description).wrap(Wrap { trim: true }),
            chunks[3],
        );
        frame.render_widget(Paragraph::new(details), chunks[4]);

        WeatherSnapshot.render(
            frame,
            chunks[5],
            WeatherSnapshotProps {
                weather: &state.weather,
            },
        );

        if state.forecast_open {
            ForecastPanel.render(
                frame,
                chunks[6],
                ForecastPanelProps {
                    forecast: &state.forecast,
                    days: state.forecast_days,
                },
            );
        }
        if state.info_expanded {
            LocalInfoPanel.render(
                frame,
                chunks[7],
                LocalInfoPanelProps {
                    info: spot.local_info.as_ref(),
                },
            );
        }

        self.info_button_area = chunks[8];
        frame.render_widget(
            Paragraph::new(info_button_line(state.info_expanded)),
            chunks[8],
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            outer[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("i", "info"),
                    StatusBarHint::new("d", "description"),
                    StatusBarHint::new("f", "forecast"),
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
