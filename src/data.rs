// src/data.rs

use crate::model::{LessonBook, QuestionBank};

/// Loads the question bank from the embedded YAML.
pub fn read_question_bank() -> QuestionBank {
    let file_content = include_str!("data/questions.yaml");
    serde_yaml::from_str(file_content).expect("could not parse the embedded question bank")
}

/// Loads the per-category lesson content from the embedded YAML.
pub fn read_lessons() -> LessonBook {
    let file_content = include_str!("data/lessons.yaml");
    serde_yaml::from_str(file_content).expect("could not parse the embedded lesson content")
}
