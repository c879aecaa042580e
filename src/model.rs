use serde::Deserialize;

use crate::error::QuizError;

/// One entry of `QuestionsList` as it appears in the source document.
///
/// Every field is optional at this level so that a missing key is reported as
/// a malformed record rather than as a YAML error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "QuestionText", default)]
    pub text: Option<String>,
    #[serde(rename = "AnswerText", default)]
    pub responses: Vec<String>,
    #[serde(rename = "Answer", default)]
    pub answer: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    text: String,
    responses: Vec<String>,
    correct_response: usize,
    selected_response: Option<usize>,
}

impl Question {
    pub fn from_record(record: QuestionRecord) -> Result<Self, QuizError> {
        let text = record
            .text
            .ok_or_else(|| QuizError::MalformedRecord("missing QuestionText".to_string()))?;

        if record.responses.is_empty() {
            return Err(QuizError::MalformedRecord(
                "AnswerText must list at least one response".to_string(),
            ));
        }

        let answer = record
            .answer
            .ok_or_else(|| QuizError::MalformedRecord("missing Answer".to_string()))?;
        let correct_response = usize::try_from(answer)
            .ok()
            .filter(|&idx| idx < record.responses.len())
            .ok_or_else(|| {
                QuizError::MalformedRecord(format!(
                    "Answer {} is outside 0..{}",
                    answer,
                    record.responses.len()
                ))
            })?;

        Ok(Self {
            text,
            responses: record.responses,
            correct_response,
            selected_response: None,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    pub fn correct_response(&self) -> usize {
        self.correct_response
    }

    /// `None` until the user picks a response.
    pub fn selected_response(&self) -> Option<usize> {
        self.selected_response
    }

    pub fn set_selected_response(&mut self, index: usize) -> Result<(), QuizError> {
        if index >= self.responses.len() {
            return Err(QuizError::IndexOutOfRange {
                index,
                len: self.responses.len(),
            });
        }
        self.selected_response = Some(index);
        Ok(())
    }

    pub fn clear_selected_response(&mut self) {
        self.selected_response = None;
    }

    pub fn is_answered(&self) -> bool {
        self.selected_response.is_some()
    }

    pub fn is_correct(&self) -> bool {
        self.selected_response == Some(self.correct_response)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    title: Option<String>,
    questions: Vec<Question>,
}

impl Quiz {
    /// Builds a quiz from raw records. Either every record is valid or no quiz
    /// is produced.
    pub fn from_records(records: Vec<QuestionRecord>) -> Result<Self, QuizError> {
        let questions = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                Question::from_record(record).map_err(|e| match e {
                    QuizError::MalformedRecord(reason) => {
                        QuizError::MalformedRecord(format!("question {}: {}", i + 1, reason))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: None,
            questions,
        })
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Quiz")
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_at(&self, index: usize) -> Result<&Question, QuizError> {
        let len = self.questions.len();
        self.questions
            .get(index)
            .ok_or(QuizError::IndexOutOfRange { index, len })
    }

    pub fn question_at_mut(&mut self, index: usize) -> Result<&mut Question, QuizError> {
        let len = self.questions.len();
        self.questions
            .get_mut(index)
            .ok_or(QuizError::IndexOutOfRange { index, len })
    }

    /// Clears every selection in place. Question order and identity are kept.
    pub fn reset_quiz(&mut self) {
        for q in &mut self.questions {
            q.clear_selected_response();
        }
        tracing::info!(questions = self.questions.len(), "quiz reset");
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn answered_questions(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    pub fn correctly_answered_questions(&self) -> usize {
        self.questions.iter().filter(|q| q.is_correct()).count()
    }

    /// Correct answers as a percentage of answered questions. Defined as `0.0`
    /// when nothing has been answered yet.
    pub fn percentage_score(&self) -> f32 {
        let answered = self.answered_questions();
        if answered == 0 {
            return 0.0;
        }
        self.correctly_answered_questions() as f32 / answered as f32 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.questions.iter().all(|q| q.is_answered())
    }
}
