mod quiz;
mod result;
mod setup;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;
use crate::preferences::Theme;

/// Colours for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub correct: Color,
    pub incorrect: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                correct: Color::Green,
                incorrect: Color::Red,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                accent: Color::Cyan,
                correct: Color::LightGreen,
                incorrect: Color::LightRed,
            },
        }
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::for_theme(app.theme());
    frame.render_widget(Block::default().bg(palette.background), area);

    match app.state() {
        AppState::Setup => setup::render(frame, area, app, &palette),
        AppState::Quiz => quiz::render(frame, area, app, &palette),
        AppState::Result => result::render(frame, area, app, &palette),
    }
}
