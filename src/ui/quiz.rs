use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{AnswerMode, AnswerRecord, Question};

use super::Palette;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app, palette);
    render_student(frame, chunks[1], question, palette);

    match session.settings().answer_mode {
        AnswerMode::MultipleChoice => render_options(frame, chunks[2], app, palette),
        AnswerMode::TypeIn => render_type_in(frame, chunks[2], app, palette),
    }

    if let Some(record) = session.last_answer() {
        render_feedback(frame, chunks[3], record, palette);
    }
    render_controls(frame, chunks[4], app, palette);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let progress = app.session().progress();
    let text = format!(
        "Question {}/{}  ·  Score {}",
        progress.current, progress.total, progress.score
    );
    let widget = Paragraph::new(text)
        .alignment(Alignment::Right)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}

fn render_student(frame: &mut Frame, area: Rect, question: &Question, palette: &Palette) {
    let character = &question.character;
    let content = vec![
        Line::from(Span::styled(
            character.name.as_str(),
            Style::default().fg(palette.text).bold(),
        )),
        Line::from(""),
        Line::from("How old is this student?".fg(palette.text)),
        Line::from(Span::styled(
            character.portrait_url(),
            Style::default().fg(palette.muted),
        )),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.muted),
    );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let session = app.session();
    let Some(options) = session.current_options() else {
        return;
    };
    let answered = session.last_answer();

    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);
    for (index, age) in options.iter().enumerate() {
        let is_selected = index == app.selected_option();
        let style = match answered {
            Some(record) if *age == record.correct_answer => {
                Style::default().fg(palette.correct).bold()
            }
            Some(record) if i64::from(*age) == record.user_answer => {
                Style::default().fg(palette.incorrect).bold()
            }
            Some(_) => Style::default().fg(palette.muted),
            None if is_selected => Style::default().fg(palette.accent).bold(),
            None => Style::default().fg(palette.text),
        };
        let marker = if is_selected && answered.is_none() {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index % OPTION_LABELS.len()]), style),
            Span::styled(format!("{} years old", age), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_type_in(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let locked = app.session().is_answered();
    let (text, style) = match app.session().last_answer() {
        Some(record) => (record.user_answer.to_string(), Style::default().fg(palette.muted)),
        None if app.input().is_empty() => (
            "Enter age".to_string(),
            Style::default().fg(palette.muted).italic(),
        ),
        None => (app.input().to_string(), Style::default().fg(palette.accent).bold()),
    };

    let title = if locked { " Answer (locked) " } else { " Answer " };
    let widget = Paragraph::new(Line::from(Span::styled(text, style))).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(palette.muted)
            .padding(Padding::horizontal(1)),
    );

    let input_area = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).split(area)[0];
    let input_area = Layout::horizontal([Constraint::Length(24), Constraint::Fill(1)])
        .split(input_area)[0];
    frame.render_widget(widget, input_area);
}

fn render_feedback(frame: &mut Frame, area: Rect, record: &AnswerRecord, palette: &Palette) {
    let name = record.question.name.as_str();
    let lines = if record.is_correct {
        vec![
            Line::from(Span::styled(
                "Correct!",
                Style::default().fg(palette.correct).bold(),
            )),
            Line::from(Span::styled(
                format!("{} is {} years old.", name, record.correct_answer),
                Style::default().fg(palette.text),
            )),
        ]
    } else {
        vec![
            Line::from(Span::styled(
                "Incorrect!",
                Style::default().fg(palette.incorrect).bold(),
            )),
            Line::from(Span::styled(
                format!(
                    "You guessed {}, but {} is {} years old.",
                    record.user_answer, name, record.correct_answer
                ),
                Style::default().fg(palette.text),
            )),
        ]
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let session = app.session();
    let text = if session.is_answered() {
        "enter next  ·  q quit"
    } else {
        match session.settings().answer_mode {
            AnswerMode::MultipleChoice => "j/k navigate  ·  enter select  ·  q quit",
            AnswerMode::TypeIn => "type a number  ·  enter submit  ·  esc quit",
        }
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}
