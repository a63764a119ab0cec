use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use crate::wizard::Step;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the given step.
pub fn hints(step: Step, can_go_back: bool) -> String {
    let mut hints = match step {
        Step::Start => vec!["↑/↓: Move", "Enter: Next"],
        Step::Flavor | Step::Pickup => vec!["↑/↓: Move", "Space: Select", "Enter: Next", "c: Cancel"],
        Step::Summary => vec!["s: Send", "c: Cancel"],
    };
    if can_go_back {
        hints.push("←: Back");
    }
    hints.push("q: Quit");
    format!(" {}", hints.join(" │ "))
}

pub struct Footer {
    hints: String,
}

impl Footer {
    pub fn new(step: Step, can_go_back: bool) -> Self {
        Self {
            hints: hints(step, can_go_back),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: hints contain arrows and box characters
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints.clone(), text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
