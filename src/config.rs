use std::path::PathBuf;

use crate::data::DataSource;
use crate::models::QuizSettings;
use crate::preferences::DEFAULT_PREFERENCES_PATH;

/// Everything needed to launch the quiz front-end.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub source: DataSource,
    /// Initial values for the setup screen.
    pub settings: QuizSettings,
    pub preferences_path: PathBuf,
    /// Fixes question order and options when set.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            settings: QuizSettings::default(),
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            seed: None,
        }
    }
}
