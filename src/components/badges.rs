//! Difficulty treatments and corner badges drawn over the image region

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Difficulty, Spot};

/// Visual treatment for one difficulty tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Treatment {
    pub label: &'static str,
    /// Filled/empty pips, one per tier
    pub pips: &'static str,
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Treatment {
    pub fn style(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .bg(self.bg)
            .add_modifier(self.modifier)
    }
}

pub fn difficulty_treatment(difficulty: Difficulty) -> Treatment {
    match difficulty {
        Difficulty::Beginner => Treatment {
            label: "Beginner",
            pips: "\u{25ae}\u{25af}\u{25af}\u{25af}",
            fg: Color::Black,
            bg: Color::Green,
            modifier: Modifier::empty(),
        },
        Difficulty::Intermediate => Treatment {
            label: "Intermediate",
            pips: "\u{25ae}\u{25ae}\u{25af}\u{25af}",
            fg: Color::Black,
            bg: Color::Cyan,
            modifier: Modifier::empty(),
        },
        Difficulty::Advanced => Treatment {
            label: "Advanced",
            pips: "\u{25ae}\u{25ae}\u{25ae}\u{25af}",
            fg: Color::Black,
            bg: Color::Rgb(255, 170, 60),
            modifier: Modifier::BOLD,
        },
        Difficulty::Expert => Treatment {
            label: "Expert",
            pips: "\u{25ae}\u{25ae}\u{25ae}\u{25ae}",
            fg: Color::White,
            bg: Color::Rgb(200, 40, 40),
            modifier: Modifier::BOLD,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBadge {
    Trending,
    BeginnerFriendly,
    HiddenGem,
}

impl StatusBadge {
    pub fn text(self) -> &'static str {
        match self {
            StatusBadge::Trending => "\u{25b2} Trending",
            StatusBadge::BeginnerFriendly => "\u{2605} Beginner friendly",
            StatusBadge::HiddenGem => "\u{25c6} Hidden gem",
        }
    }

    fn style(self) -> Style {
        let bg = match self {
            StatusBadge::Trending => Color::Rgb(230, 80, 60),
            StatusBadge::BeginnerFriendly => Color::Rgb(60, 170, 90),
            StatusBadge::HiddenGem => Color::Rgb(140, 90, 200),
        };
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Badges for the (top-left, top-right) corners.
///
/// Beginner-friendly and hidden-gem share the right corner; beginner-friendly wins.
pub fn corner_badges(spot: &Spot) -> (Option<StatusBadge>, Option<StatusBadge>) {
    let left = spot.trending.then_some(StatusBadge::Trending);
    let right = if spot.beginner_friendly {
        Some(StatusBadge::BeginnerFriendly)
    } else if spot.hidden_gem {
        Some(StatusBadge::HiddenGem)
    } else {
        None
    };
    (left, right)
}

/// Overlay badges on the first and last rows of `area`.
pub fn render_badges(frame: &mut Frame, area: Rect, spot: &Spot) {
    if area.height == 0 {
        return;
    }
    let top = Rect { height: 1, ..area };
    let (left, right) = corner_badges(spot);

    if let Some(badge) = left {
        render_chip(frame, top, badge.text(), badge.style(), Alignment::Left);
    }
    if let Some(badge) = right {
        render_chip(frame, top, badge.text(), badge.style(), Alignment::Right);
    }

    let bottom = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    let treatment = difficulty_treatment(spot.difficulty);
    let text = format!("{} {}", treatment.pips, treatment.label);
    render_chip(frame, bottom, &text, treatment.style(), Alignment::Left);
}

fn render_chip(frame: &mut Frame, row: Rect, text: &str, style: Style, alignment: Alignment) {
    let width = (text.chars().count() as u16 + 2).min(row.width);
    let x = match alignment {
        Alignment::Right => row.x + row.width - width,
        _ => row.x,
    };
    let chip = Rect {
        x,
        width,
        ..row
    };
    let line = Line::from(Span::styled(format!(" {text} "), style));
    frame.render_widget(Paragraph::new(line), chip);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_tier_has_its_own_treatment() {
        let treatments: Vec<_> = Difficulty::ALL
            .iter()
            .map(|d| difficulty_treatment(*d))
            .collect();
        let expert = difficulty_treatment(Difficulty::Expert);
        for other in &treatments[..3] {
            assert_ne!(*other, expert);
            assert_ne!(other.bg, expert.bg);
        }
        assert_eq!(expert.label, "Expert");
    }

    #[test]
    fn test_beginner_friendly_takes_shared_corner() {
        let spot = Spot {
            trending: true,
            beginner_friendly: true,
            hidden_gem: true,
            ..Spot::default()
        };
        assert_eq!(
            corner_badges(&spot),
            (Some(StatusBadge::Trending), Some(StatusBadge::BeginnerFriendly))
        );

        let spot = Spot {
            trending: false,
            beginner_friendly: false,
            hidden_gem: true,
            ..Spot::default()
        };
        assert_eq!(corner_badges(&spot), (None, Some(StatusBadge::HiddenGem)));
    }
}
