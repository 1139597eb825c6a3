use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, SetupField};
use crate::preferences::Theme;

use super::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(56),
        Constraint::Fill(1),
    ])
    .split(chunks[1]);

    render_form(frame, horizontal[1], app, palette);
    render_status(frame, chunks[2], app, palette);
    render_controls(frame, chunks[4], app, palette);
}

fn render_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let settings = app.settings();
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "STUDENT AGE QUIZ",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from("How old is each student?".fg(palette.muted)),
        Line::from(""),
    ];

    let rows = [
        (
            SetupField::QuestionCount,
            "Questions",
            settings.question_count.to_string(),
        ),
        (
            SetupField::AnswerMode,
            "Answer type",
            settings.answer_mode.to_string(),
        ),
        (SetupField::Ordering, "Order", settings.ordering.to_string()),
    ];
    for (field, label, value) in rows {
        content.push(setting_line(
            label,
            &value,
            field == app.setup_field(),
            palette,
        ));
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled(
        "ENTER",
        Style::default().fg(palette.correct).bold(),
    )));
    content.push(Line::from("to start".fg(palette.muted)));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted),
    );
    frame.render_widget(widget, area);
}

fn setting_line<'a>(label: &'a str, value: &str, selected: bool, palette: &Palette) -> Line<'a> {
    let style = if selected {
        Style::default().fg(palette.accent).bold()
    } else {
        Style::default().fg(palette.text)
    };
    let marker = if selected { ">" } else { " " };

    Line::from(vec![
        Span::styled(format!("{} {:<12}", marker, label), style),
        Span::styled(format!("< {} >", value), style),
    ])
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = if app.is_loading() {
        Line::from(Span::styled(
            format!("Loading student data from {} ...", app.dataset().source().describe()),
            Style::default().fg(palette.accent),
        ))
    } else if let Some(error) = app.error() {
        Line::from(Span::styled(error.to_string(), Style::default().fg(palette.incorrect)))
    } else {
        Line::from("")
    };

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let theme = match app.theme() {
        Theme::Light => "dark",
        Theme::Dark => "light",
    };
    let widget = Paragraph::new(format!(
        "j/k field  ·  h/l change  ·  t {} theme  ·  enter start  ·  q quit",
        theme
    ))
    .alignment(Alignment::Center)
    .fg(palette.muted);
    frame.render_widget(widget, area);
}
