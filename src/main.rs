use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fadequiz::cli::Cli;
use fadequiz::model::Quiz;
use fadequiz::parser;
use fadequiz::state::AppState;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.log_file {
        init_logging(path)?;
    }

    let quiz = match cli.questions {
        Some(ref path) => parser::load_quiz(path)
            .with_context(|| format!("Cannot load questions from {}", path.display()))?,
        None => parser::bundled_quiz().context("Bundled questions are invalid")?,
    };

    if cli.check {
        print_summary(&quiz);
        return Ok(());
    }

    let state = AppState::new(quiz, cli.nav_config());
    fadequiz::tui::run_tui(state)
}

fn init_logging(path: &std::path::Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_summary(quiz: &Quiz) {
    println!("Quiz: {}", quiz.title());
    println!("Questions: {}", quiz.total_questions());
    for (i, q) in quiz.questions().iter().enumerate() {
        println!(
            "  {:>2}. {} ({} responses)",
            i + 1,
            q.text(),
            q.responses().len()
        );
    }
}
