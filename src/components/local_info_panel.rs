use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;
use crate::glyphs::LocalInfoField;
use crate::state::LocalInfo;

/// Expanded travel information: one row per field the spot carries
pub struct LocalInfoPanel;

pub struct LocalInfoPanelProps<'a> {
    pub info: Option<&'a LocalInfo>,
}

/// Present fields, in panel order
pub fn info_rows(info: &LocalInfo) -> Vec<(LocalInfoField, String)> {
    LocalInfoField::ALL
        .iter()
        .filter_map(|field| field.value(info).map(|value| (*field, value)))
        .collect()
}

/// Height for the rows plus borders; empty info still gets one line
pub fn panel_height(info: Option<&LocalInfo>) -> u16 {
    let rows = info.map(|info| info_rows(info).len()).unwrap_or(0).max(1);
    rows as u16 + 2
}

impl Component<Action> for LocalInfoPanel {
    type Props<'a> = LocalInfoPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Local information ");

        let rows = props.info.map(info_rows).unwrap_or_default();
        let lines: Vec<Line> = if rows.is_empty() {
            vec![Line::from(Span::styled(
                "No local information for this spot",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            rows.into_iter()
                .map(|(field, value)| {
                    Line::from(vec![
                        Span::raw(format!("{} ", field.icon())),
                        Span::styled(
                            format!("{}: ", field.label()),
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(value, Style::default().fg(Color::White)),
                    ])
                })
                .collect()
        };

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}
