//! Unit tests for counter questions and their button affordances

use tally::form::{CounterQuestion, QuestionDeclaration};

fn declaration(read_only: bool) -> QuestionDeclaration {
    QuestionDeclaration {
        name: "chickens".to_string(),
        label: "How many chickens?".to_string(),
        hint: Some("Adults only".to_string()),
        read_only,
    }
}

#[test]
fn test_new_question_copies_declaration() {
    let question = CounterQuestion::new(&declaration(false), Some(3));

    assert_eq!(question.name, "chickens");
    assert_eq!(question.label, "How many chickens?");
    assert_eq!(question.hint.as_deref(), Some("Adults only"));
    assert_eq!(question.answer(), Some(3));
}

#[test]
fn test_out_of_range_initial_answer_is_empty() {
    let question = CounterQuestion::new(&declaration(false), Some(-4));
    assert_eq!(question.answer(), None);
    assert_eq!(question.display_text(), "");
}

#[test]
fn test_read_only_disables_both_buttons() {
    let question = CounterQuestion::new(&declaration(true), Some(10));

    assert!(!question.decrease_enabled());
    assert!(!question.increase_enabled());
}

#[test]
fn test_read_only_ignores_presses() {
    let mut question = CounterQuestion::new(&declaration(true), Some(10));

    assert!(!question.increase());
    assert!(!question.decrease());
    assert!(!question.clear());
    assert_eq!(question.answer(), Some(10));
}

#[test]
fn test_affordances_are_rederived_after_each_press() {
    let mut question = CounterQuestion::new(&declaration(false), Some(1));
    assert!(question.decrease_enabled());

    assert!(question.decrease());
    assert_eq!(question.display_text(), "0");
    assert!(!question.decrease_enabled());
    assert!(question.increase_enabled());
}

#[test]
fn test_press_reports_whether_answer_changed() {
    let mut question = CounterQuestion::new(&declaration(false), Some(0));

    assert!(!question.decrease());
    assert!(question.increase());
    assert!(question.clear());
    assert!(!question.clear());
}

#[test]
fn test_increase_from_empty_answers_zero() {
    let mut question = CounterQuestion::new(&declaration(false), None);

    assert!(question.increase());
    assert_eq!(question.answer(), Some(0));
}

#[test]
fn test_set_answer_rebinds_value() {
    let mut question = CounterQuestion::new(&declaration(false), Some(2));

    question.set_answer(Some(40));
    assert_eq!(question.answer(), Some(40));

    question.set_answer(Some(1_000_000_000));
    assert_eq!(question.answer(), None);
}
