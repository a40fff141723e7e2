//! Unit tests for the JSON answers file

use std::fs;

use serde_json::json;
use tally::form::{AnswerSource, Form, FormDefinition, JsonAnswerFile};
use tempfile::TempDir;

const FORM: &str = r#"
title = "Livestock"

[[questions]]
name = "cows"
label = "Cows"

[[questions]]
name = "sheep"
label = "Sheep"
"#;

fn read_json(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_missing_file_has_no_answers() {
    let temp_dir = TempDir::new().unwrap();
    let answers = JsonAnswerFile::open(temp_dir.path().join("answers.json")).unwrap();

    assert_eq!(answers.answer("cows"), None);
    assert!(!answers.is_dirty());
}

#[test]
fn test_reads_integers_and_nulls() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.json");
    fs::write(&path, r#"{"cows": 4, "sheep": null}"#).unwrap();

    let answers = JsonAnswerFile::open(path).unwrap();

    assert_eq!(answers.answer("cows"), Some(4));
    assert_eq!(answers.answer("sheep"), None);
    assert!(answers.has_stored_value("cows"));
    assert!(!answers.has_stored_value("sheep"));
}

#[test]
fn test_non_integer_answer_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.json");
    fs::write(&path, r#"{"cows": "four"}"#).unwrap();

    let err = JsonAnswerFile::open(path).unwrap_err();
    assert!(format!("{:#}", err).contains("must be an integer or null"));
}

#[test]
fn test_fractional_answer_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.json");
    fs::write(&path, r#"{"cows": 1.5}"#).unwrap();

    assert!(JsonAnswerFile::open(path).is_err());
}

#[test]
fn test_out_of_range_stored_answer_binds_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.json");
    fs::write(&path, r#"{"cows": 1000000000, "sheep": -3}"#).unwrap();

    let answers = JsonAnswerFile::open(path).unwrap();
    let definition = FormDefinition::parse(FORM).unwrap();
    let form = Form::bind(&definition, &answers);

    assert_eq!(form.question("cows").unwrap().answer(), None);
    assert_eq!(form.question("sheep").unwrap().answer(), None);
    assert!(answers.has_stored_value("cows"));
}

#[test]
fn test_flush_writes_answers_and_keeps_unknown_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("answers.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"legacy": 7}"#).unwrap();

    let mut answers = JsonAnswerFile::open(path.clone()).unwrap();
    let definition = FormDefinition::parse(FORM).unwrap();
    let mut form = Form::bind(&definition, &answers);

    form.question_mut("cows").unwrap().increase();
    form.question_mut("cows").unwrap().increase();
    form.write_answers(&mut answers);
    assert!(answers.is_dirty());
    answers.flush().unwrap();
    assert!(!answers.is_dirty());

    assert_eq!(
        read_json(&path),
        json!({"legacy": 7, "cows": 1, "sheep": null})
    );
}

#[test]
fn test_flush_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a").join("b").join("answers.json");

    let mut answers = JsonAnswerFile::open(path.clone()).unwrap();
    answers.set_answer("cows", Some(2));
    answers.flush().unwrap();

    assert_eq!(read_json(&path), json!({"cows": 2}));
}

#[test]
fn test_reopened_file_rebinds_same_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.json");
    let definition = FormDefinition::parse(FORM).unwrap();

    let mut answers = JsonAnswerFile::open(path.clone()).unwrap();
    let mut form = Form::bind(&definition, &answers);
    form.question_mut("sheep").unwrap().set_answer(Some(999_999_999));
    form.write_answers(&mut answers);
    answers.flush().unwrap();

    let reopened = JsonAnswerFile::open(path).unwrap();
    let rebound = Form::bind(&definition, &reopened);

    assert_eq!(rebound, form);
}

#[test]
fn test_setting_same_answer_does_not_mark_dirty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.json");
    fs::write(&path, r#"{"cows": 4}"#).unwrap();

    let mut answers = JsonAnswerFile::open(path).unwrap();
    answers.set_answer("cows", Some(4));

    assert!(!answers.is_dirty());
}

#[test]
fn test_integer_beyond_i64_binds_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.json");
    fs::write(&path, r#"{"cows": 100000000000000000000, "sheep": 3}"#).unwrap();

    let answers = JsonAnswerFile::open(path).unwrap();
    let definition = FormDefinition::parse(FORM).unwrap();
    let form = Form::bind(&definition, &answers);

    assert_eq!(form.question("cows").unwrap().answer(), None);
    assert_eq!(form.question("sheep").unwrap().answer(), Some(3));
    assert!(answers.has_stored_value("cows"));
}
