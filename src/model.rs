use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Subject areas offered by the app. Each one has its own lesson set,
/// question bank and durable progress record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Html,
    Css,
    Bootstrap,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Html, Category::Css, Category::Bootstrap];

    /// Lower-case key used for progress records and data lookups.
    pub fn key(self) -> &'static str {
        match self {
            Category::Html => "html",
            Category::Css => "css",
            Category::Bootstrap => "bootstrap",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Html => "HTML Basics",
            Category::Css => "CSS Styling",
            Category::Bootstrap => "Bootstrap",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Category::Html => "Structure the web with semantic HTML.",
            Category::Css => "Create beautiful, responsive layouts.",
            Category::Bootstrap => "Fast prototypes with Bootstrap components.",
        }
    }

    /// Case-insensitive lookup by name ("HTML", "css", ...).
    pub fn parse(name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(name.trim()))
    }
}

/// Difficulty tiers within a category's question bank.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Basic, Level::Intermediate, Level::Advanced];

    pub fn key(self) -> &'static str {
        match self {
            Level::Basic => "basic",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Level::Basic => "Basic",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>, // four answer options, in display order
    pub correct: usize,       // index into options
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Static category → level → questions lookup, built once at startup.
/// A (category, level) pair with no entry resolves to an empty slice.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct QuestionBank {
    categories: BTreeMap<Category, BTreeMap<Level, Vec<Question>>>,
}

impl QuestionBank {
    pub fn questions(&self, category: Category, level: Level) -> &[Question] {
        self.categories
            .get(&category)
            .and_then(|levels| levels.get(&level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn question_count(&self, category: Category, level: Level) -> usize {
        self.questions(category, level).len()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    pub title: String,
    pub description: String,
    pub example: String, // snippet handed to the try-it editor
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct LessonBook {
    categories: BTreeMap<Category, Vec<Lesson>>,
}

impl LessonBook {
    pub fn lessons(&self, category: Category) -> &[Lesson] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Durable summary of the most recent finished attempt for a category.
/// Invariant: `score <= total`. A record with `completed == false` means the
/// same thing as no record at all.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRecord {
    pub score: u32,
    pub total: u32,
    pub completed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            display_name: "Student".to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Lessons,
    LevelMenu,
    Quiz,
    Summary,
    Dashboard,
    Certificate,
    Editor,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(Category::parse("HTML"), Some(Category::Html));
        assert_eq!(Category::parse(" css "), Some(Category::Css));
        assert_eq!(Category::parse("Bootstrap"), Some(Category::Bootstrap));
        assert_eq!(Category::parse("javascript"), None);
    }

    #[test]
    fn empty_bank_resolves_every_pair_to_an_empty_slice() {
        let bank = QuestionBank::default();
        for category in Category::ALL {
            for level in Level::ALL {
                assert!(bank.questions(category, level).is_empty());
                assert_eq!(bank.question_count(category, level), 0);
            }
        }
    }
}
