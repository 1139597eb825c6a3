use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use age_quiz::{
    AnswerMode, DEFAULT_DATA_URL, DEFAULT_PREFERENCES_PATH, DEFAULT_QUESTION_COUNT, DataSource,
    MAX_QUESTION_COUNT, QuestionOrder, Quiz, QuizConfig, QuizSettings,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Guess the age of each student", long_about = None)]
struct Args {
    /// Local JSON file to load the students from instead of the remote dataset
    #[arg(short, long, conflicts_with = "url")]
    data: Option<PathBuf>,

    /// URL of the students JSON document
    #[arg(long, default_value = DEFAULT_DATA_URL)]
    url: String,

    /// Number of questions per quiz
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_QUESTION_COUNT as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_QUESTION_COUNT as i64)
    )]
    count: u16,

    /// How answers are given
    #[arg(short, long, value_enum, default_value_t = AnswerMode::MultipleChoice)]
    mode: AnswerMode,

    /// Order in which students are asked
    #[arg(short, long, value_enum, default_value_t = QuestionOrder::Random)]
    order: QuestionOrder,

    /// File holding the saved theme
    #[arg(long, default_value = DEFAULT_PREFERENCES_PATH)]
    prefs: PathBuf,

    /// Log file (the terminal is taken over by the quiz)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for question order and answer options
    #[arg(long)]
    seed: Option<u64>,
}

fn init_logging(path: PathBuf) -> std::io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("age_quiz=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_file = args
        .log_file
        .unwrap_or_else(|| std::env::temp_dir().join("age-quiz.log"));
    if let Err(e) = init_logging(log_file.clone()) {
        eprintln!("Logging disabled, cannot open {}: {}", log_file.display(), e);
    }

    let source = match args.data {
        Some(path) => DataSource::File(path),
        None => DataSource::Remote(args.url),
    };
    let config = QuizConfig {
        source,
        settings: QuizSettings::new(usize::from(args.count), args.mode, args.order),
        preferences_path: args.prefs,
        seed: args.seed,
    };

    tracing::info!(?config, "starting age quiz");
    if let Err(e) = Quiz::new(config).run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
