use crate::ui::theme::{FROSTING_PINK, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: back affordance plus the step title.
pub struct Header<'a> {
    title: &'a str,
    can_go_back: bool,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, can_go_back: bool) -> Self {
        Self { title, can_go_back }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let mut spans = vec![Span::raw("  ")];
        if self.can_go_back {
            spans.push(Span::styled("← ", Style::default().fg(HINT_TEXT)));
        }
        spans.push(Span::styled(
            self.title,
            Style::default()
                .fg(FROSTING_PINK)
                .add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(Line::from(spans))
            .style(Style::default().fg(HEADER_TEXT))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
