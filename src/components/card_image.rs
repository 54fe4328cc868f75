use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use tui_dispatch::DataResource;

use super::Component;
use super::badges::render_badges;
use crate::action::Action;
use crate::state::{ImagePreview, Spot};

pub struct CardImage;

pub struct CardImageProps<'a> {
    pub spot: &'a Spot,
    pub preview: &'a DataResource<ImagePreview>,
    /// URL currently assigned to the image region
    pub url: &'a str,
    pub is_loading: bool,
}

const UPPER_HALF_BLOCK: &str = "\u{2580}";

/// Draws a preview with two pixel rows per cell, nearest-neighbour scaled to the area.
struct HalfBlocks<'a>(&'a ImagePreview);

impl Widget for HalfBlocks<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let preview = self.0;
        if preview.width == 0 || preview.height == 0 {
            return;
        }
        let rows = u32::from(area.height) * 2;
        let cols = u32::from(area.width);

        for cy in 0..area.height {
            for cx in 0..area.width {
                let px = u32::from(cx) * preview.width / cols;
                let top_y = (u32::from(cy) * 2) * preview.height / rows;
                let bottom_y = (u32::from(cy) * 2 + 1) * preview.height / rows;
                let top = preview.pixel(px, top_y).unwrap_or_default();
                let bottom = preview.pixel(px, bottom_y).unwrap_or_default();

                if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                    cell.set_symbol(UPPER_HALF_BLOCK).set_style(
                        Style::default()
                            .fg(Color::Rgb(top[0], top[1], top[2]))
                            .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
                    );
                }
            }
        }
    }
}

impl Component<Action> for CardImage {
    type Props<'a> = CardImageProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match props.preview {
            DataResource::Loaded(preview) if !props.is_loading => {
                frame.render_widget(HalfBlocks(preview), area);
            }
            _ => render_placeholder(frame, area, &props),
        }
        render_badges(frame, area, props.spot);
    }
}

/// Shown until a preview decodes. A failed image still shows its URL, never an error.
fn render_placeholder(frame: &mut Frame, area: Rect, props: &CardImageProps<'_>) {
    let block = Block::default().style(Style::default().bg(Color::Rgb(25, 45, 70)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let message = if props.is_loading || props.preview.is_loading() {
        "Loading image..."
    } else {
        "\u{1f3c4}"
    };

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
        .flex(Flex::Center)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            props.url.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        chunks[1],
    );
}
