use std::path::Path;

use serde_yaml::Value;

use crate::error::QuizError;
use crate::model::{QuestionRecord, Quiz};

/// Questions shipped inside the binary, used when no file is given.
pub const BUNDLED_QUESTIONS: &str = include_str!("../assets/questions.yaml");

pub const QUESTIONS_LIST_KEY: &str = "QuestionsList";
pub const TITLE_KEY: &str = "Title";

pub fn bundled_quiz() -> Result<Quiz, QuizError> {
    parse_quiz(BUNDLED_QUESTIONS)
}

pub fn load_quiz(path: &Path) -> Result<Quiz, QuizError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        QuizError::InvalidSource(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_quiz(&content)
}

/// Parses a question document. Parsing is all-or-nothing: the first bad
/// record fails the whole quiz.
pub fn parse_quiz(content: &str) -> Result<Quiz, QuizError> {
    let doc: Value = serde_yaml::from_str(content)
        .map_err(|e| QuizError::InvalidSource(format!("not a YAML document: {}", e)))?;

    if !doc.is_mapping() {
        return Err(QuizError::InvalidSource(
            "top level must be a mapping".to_string(),
        ));
    }

    let records = parse_records(&doc[QUESTIONS_LIST_KEY])?;
    let title = doc[TITLE_KEY].as_str().map(|s| s.to_string());

    let quiz = Quiz::from_records(records)?.with_title(title);
    tracing::info!(
        title = quiz.title(),
        questions = quiz.total_questions(),
        "quiz loaded"
    );
    Ok(quiz)
}

fn parse_records(list: &Value) -> Result<Vec<QuestionRecord>, QuizError> {
    let seq = match list {
        Value::Sequence(seq) => seq,
        Value::Null => {
            return Err(QuizError::InvalidSource(format!(
                "missing {}",
                QUESTIONS_LIST_KEY
            )))
        }
        _ => {
            return Err(QuizError::InvalidSource(format!(
                "{} must be a list",
                QUESTIONS_LIST_KEY
            )))
        }
    };

    if seq.is_empty() {
        return Err(QuizError::InvalidSource(format!(
            "{} is empty",
            QUESTIONS_LIST_KEY
        )));
    }

    seq.iter()
        .enumerate()
        .map(|(i, item)| {
            serde_yaml::from_value::<QuestionRecord>(item.clone()).map_err(|e| {
                QuizError::MalformedRecord(format!("question {}: {}", i + 1, e))
            })
        })
        .collect()
}
