use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::{Difficulty, Spot};

/// FIGlet spot name over a location/coordinates line
pub struct SpotHeader;

pub struct SpotHeaderProps<'a> {
    pub spot: &'a Spot,
}

/// Rows below the FIGlet name: the location line.
pub const HEADER_OVERHEAD: u16 = 1;

/// Name gradient runs from sea blue towards the tier's badge colour.
fn gradient_colors(difficulty: Difficulty) -> (ArtColor, ArtColor) {
    let sea = ArtColor::rgb(80, 180, 255);
    let end = match difficulty {
        Difficulty::Beginner => ArtColor::rgb(120, 220, 140),
        Difficulty::Intermediate => ArtColor::rgb(120, 230, 230),
        Difficulty::Advanced => ArtColor::rgb(255, 180, 80),
        Difficulty::Expert => ArtColor::rgb(255, 80, 80),
    };
    (sea, end)
}

pub fn coordinates_text(lat: f64, lon: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.2}°{ns}, {:.2}°{ew}", lat.abs(), lon.abs())
}

impl Component<Action> for SpotHeader {
    type Props<'a> = SpotHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet name
            Constraint::Length(1), // Location + coordinates
        ])
        .split(area);

        let (start, end) = gradient_colors(props.spot.difficulty);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(Fill::Linear(LinearGradient::horizontal(start, end)));
        frame.render_widget(ArtBox::new(&renderer, &props.spot.name), chunks[0]);

        let coords = props.spot.coordinates;
        let location_line = Line::from(vec![
            Span::styled(
                props.spot.location.clone(),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {}", coordinates_text(coords.lat, coords.lon)),
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(location_line), chunks[1]);
    }
}
