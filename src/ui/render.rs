use crate::share::compose_summary;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FROSTING_PINK, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT, STATUS_ERROR,
    STATUS_OK,
};
use crate::wizard::Step;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let session = app.session();
    let step = session.current_step();

    let title = app.labels().step_title(step);
    frame.render_widget(Header::new(title, session.can_go_back()).widget(), header);

    frame.render_widget(Clear, body);
    let mut lines = match step {
        Step::Summary => summary_lines(app),
        _ => option_lines(app),
    };

    if let Some(status) = app.status() {
        let color = if status.is_error { STATUS_ERROR } else { STATUS_OK };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", status.text),
            Style::default().fg(color),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), body);

    frame.render_widget(
        Footer::new(step, session.can_go_back()).widget(footer),
        footer,
    );
}

fn option_lines(app: &App) -> Vec<Line<'static>> {
    let options = app.options();
    let chosen = app.chosen_index();
    let mut lines = vec![Line::from("")];

    for (idx, label) in app.option_labels().into_iter().enumerate() {
        let marker = if chosen == Some(idx) { "(•)" } else { "( )" };
        let mut line = Line::from(vec![
            Span::raw("  "),
            Span::styled(marker, Style::default().fg(FROSTING_PINK)),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(HEADER_TEXT)),
        ]);
        if options.focused() == Some(idx) {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    // The start step has no subtotal yet
    if app.session().current_step() != Step::Start {
        let subtotal = app
            .labels()
            .subtotal(&app.session().order().price_formatted());
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", subtotal),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

fn summary_lines(app: &App) -> Vec<Line<'static>> {
    let snapshot = app.session().order().snapshot();
    let mut lines = vec![Line::from("")];
    match compose_summary(&snapshot, app.labels()) {
        Ok(message) => {
            for row in message.body.lines() {
                lines.push(Line::from(format!("  {}", row)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  Send to {} with 's'", app.sink_name()),
                Style::default().fg(HINT_TEXT),
            )));
        }
        Err(err) => lines.push(Line::from(Span::styled(
            format!("  {}", err),
            Style::default().fg(STATUS_ERROR),
        ))),
    }
    lines
}
