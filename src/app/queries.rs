use super::*;
use crate::model::{Lesson, ProgressRecord};
use crate::stats::{self, ProgressSummary};
use std::collections::BTreeMap;

impl LearnApp {
    pub fn active_quiz(&self) -> Option<&ActiveQuiz> {
        self.quiz.as_ref()
    }

    pub fn lessons_for(&self, category: Category) -> &[Lesson] {
        self.lessons.lessons(category)
    }

    /// Fresh snapshot of the stored records.
    pub fn records(&self) -> BTreeMap<String, ProgressRecord> {
        self.store.load()
    }

    /// Dashboard numbers, recomputed from the store on every call.
    pub fn summary(&self) -> ProgressSummary {
        stats::summarize(&self.records())
    }

    pub fn display_name(&self) -> String {
        self.store.load_profile().display_name
    }
}
