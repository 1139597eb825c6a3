use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::AnswerRecord;
use crate::quiz::QuizSummary;

use super::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(summary) = app.session().summarize() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_tally(frame, chunks[0], &summary, palette);
    render_score_summary(frame, chunks[1], &summary, palette);
    render_breakdown(frame, chunks[2], &summary.per_question, app.result_scroll(), palette);
    render_controls(frame, chunks[3], palette);
}

fn grade_color(percentage: u32, palette: &Palette) -> Color {
    match percentage {
        90..=100 => palette.correct,
        70..=89 => palette.accent,
        50..=69 => Color::Yellow,
        _ => palette.incorrect,
    }
}

fn render_tally(frame: &mut Frame, area: Rect, summary: &QuizSummary, palette: &Palette) {
    let text = format!(
        "Correct {}  ·  Incorrect {}",
        summary.score,
        summary.incorrect()
    );
    let widget = Paragraph::new(text)
        .alignment(Alignment::Right)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: &QuizSummary, palette: &Palette) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                summary.score, summary.total, summary.percentage
            ),
            Style::default()
                .fg(grade_color(summary.percentage, palette))
                .bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.muted),
    );
    frame.render_widget(widget, area);
}

fn render_breakdown(
    frame: &mut Frame,
    area: Rect,
    answers: &[AnswerRecord],
    scroll: usize,
    palette: &Palette,
) {
    let lines: Vec<Line> = answers
        .iter()
        .enumerate()
        .map(|(index, answer)| {
            let (symbol, color) = if answer.is_correct {
                ("+", palette.correct)
            } else {
                ("-", palette.incorrect)
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(
                    format!("{:<24}", answer.question.name),
                    Style::default().fg(palette.text).bold(),
                ),
                Span::styled(
                    format!(
                        "Your answer: {}  |  Correct answer: {}",
                        answer.user_answer, answer.correct_answer
                    ),
                    Style::default().fg(palette.muted),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, palette: &Palette) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}
