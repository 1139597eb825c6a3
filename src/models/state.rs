/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Settings collected, no questions yet.
    #[default]
    Setup,
    /// Questions built, `current_index` points at an open or answered question.
    InProgress,
    /// Every question answered and the last one advanced past.
    Completed,
}

/// Screen shown by the terminal front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Setup,
    Quiz,
    Result,
}

impl From<SessionState> for AppState {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Setup => AppState::Setup,
            SessionState::InProgress => AppState::Quiz,
            SessionState::Completed => AppState::Result,
        }
    }
}
