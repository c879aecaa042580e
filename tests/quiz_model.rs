use fadequiz::error::QuizError;
use fadequiz::model::{Question, QuestionRecord, Quiz};

fn record(text: &str, responses: &[&str], answer: i64) -> QuestionRecord {
    QuestionRecord {
        text: Some(text.to_string()),
        responses: responses.iter().map(|s| s.to_string()).collect(),
        answer: Some(answer),
    }
}

fn three_question_quiz() -> Quiz {
    Quiz::from_records(vec![
        record("one", &["a", "b", "c"], 0),
        record("two", &["a", "b", "c"], 1),
        record("three", &["a", "b", "c"], 2),
    ])
    .unwrap()
}

#[test]
fn test_new_question_is_unanswered() {
    let q = Question::from_record(record("Q", &["x", "y"], 1)).unwrap();
    assert!(!q.is_answered());
    assert!(!q.is_correct());
    assert_eq!(q.selected_response(), None);
}

#[test]
fn test_question_requires_fields() {
    let missing_text = QuestionRecord {
        text: None,
        ..record("Q", &["x"], 0)
    };
    assert!(matches!(
        Question::from_record(missing_text),
        Err(QuizError::MalformedRecord(_))
    ));

    let missing_answer = QuestionRecord {
        answer: None,
        ..record("Q", &["x"], 0)
    };
    assert!(matches!(
        Question::from_record(missing_answer),
        Err(QuizError::MalformedRecord(_))
    ));
}

#[test]
fn test_set_selected_response() {
    let mut q = Question::from_record(record("Q", &["x", "y", "z"], 2)).unwrap();

    for i in 0..3 {
        q.set_selected_response(i).unwrap();
        assert_eq!(q.selected_response(), Some(i));
        assert!(q.is_answered());
        assert_eq!(q.is_correct(), i == 2);
    }
}

#[test]
fn test_out_of_range_selection_keeps_previous() {
    let mut q = Question::from_record(record("Q", &["x", "y"], 0)).unwrap();
    assert_eq!(
        q.set_selected_response(2),
        Err(QuizError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(q.selected_response(), None);

    q.set_selected_response(1).unwrap();
    assert!(q.set_selected_response(5).is_err());
    assert_eq!(q.selected_response(), Some(1));
}

#[test]
fn test_question_at_bounds() {
    let quiz = three_question_quiz();
    assert_eq!(quiz.question_at(2).unwrap().text(), "three");
    assert_eq!(
        quiz.question_at(3).unwrap_err(),
        QuizError::IndexOutOfRange { index: 3, len: 3 }
    );
}

#[test]
fn test_statistics_track_current_selections() {
    let mut quiz = three_question_quiz();
    assert_eq!(quiz.total_questions(), 3);
    assert_eq!(quiz.answered_questions(), 0);
    assert_eq!(quiz.correctly_answered_questions(), 0);
    assert_eq!(quiz.percentage_score(), 0.0);

    quiz.question_at_mut(0).unwrap().set_selected_response(0).unwrap();
    assert_eq!(quiz.percentage_score(), 100.0);

    quiz.question_at_mut(1).unwrap().set_selected_response(2).unwrap();
    assert_eq!(quiz.answered_questions(), 2);
    assert_eq!(quiz.correctly_answered_questions(), 1);
    assert_eq!(quiz.percentage_score(), 50.0);
    assert!(!quiz.is_complete());

    // Changing an answer is reflected immediately
    quiz.question_at_mut(1).unwrap().set_selected_response(1).unwrap();
    assert_eq!(quiz.correctly_answered_questions(), 2);
    assert_eq!(quiz.percentage_score(), 100.0);
}

#[test]
fn test_statistics_for_partial_scores() {
    let mut quiz = three_question_quiz();
    quiz.question_at_mut(0).unwrap().set_selected_response(0).unwrap();
    quiz.question_at_mut(1).unwrap().set_selected_response(0).unwrap();
    quiz.question_at_mut(2).unwrap().set_selected_response(0).unwrap();

    assert!(quiz.is_complete());
    assert_eq!(quiz.answered_questions(), 3);
    assert_eq!(quiz.correctly_answered_questions(), 1);
    let expected = 1.0_f32 / 3.0 * 100.0;
    assert!((quiz.percentage_score() - expected).abs() < 1e-4);
}

#[test]
fn test_reset_is_idempotent_and_keeps_order() {
    let mut quiz = three_question_quiz();
    for i in 0..3 {
        quiz.question_at_mut(i).unwrap().set_selected_response(1).unwrap();
    }

    quiz.reset_quiz();
    assert_eq!(quiz.answered_questions(), 0);
    let once = quiz.clone();

    quiz.reset_quiz();
    assert_eq!(quiz, once);
    let texts: Vec<&str> = quiz.questions().iter().map(|q| q.text()).collect();
    assert_eq!(texts, ["one", "two", "three"]);
    assert!(quiz.questions().iter().all(|q| !q.is_answered()));
}

#[test]
fn test_three_question_scenario() {
    let mut quiz = three_question_quiz();
    quiz.question_at_mut(0).unwrap().set_selected_response(0).unwrap();
    quiz.question_at_mut(1).unwrap().set_selected_response(2).unwrap();

    assert_eq!(quiz.answered_questions(), 2);
    assert_eq!(quiz.correctly_answered_questions(), 1);
    assert_eq!(quiz.total_questions(), 3);
    assert_eq!(quiz.percentage_score(), 50.0);

    quiz.reset_quiz();
    assert_eq!(quiz.answered_questions(), 0);
    assert_eq!(quiz.percentage_score(), 0.0);
}

#[test]
fn test_from_records_names_bad_position() {
    let err = Quiz::from_records(vec![
        record("one", &["a"], 0),
        record("two", &["a"], 0),
        record("three", &["a"], 4),
    ])
    .unwrap_err();
    match err {
        QuizError::MalformedRecord(reason) => assert!(reason.starts_with("question 3")),
        other => panic!("Expected MalformedRecord, got {:?}", other),
    }
}
