use crate::data::{read_lessons, read_question_bank};
use crate::model::{AppState, Category, Level, LessonBook, QuestionBank};
use crate::progress::ProgressStore;
use crate::session::QuizSession;
use serde::{Deserialize, Serialize};

pub mod actions;
pub mod navigation;
pub mod queries;
pub mod view_models;

// Re-export the view model rows next to their builders.
pub use crate::view_models::{CategoryCard, LevelRow, ScoreRow};

/// The quiz attempt currently on screen. Owned by the quiz view for its
/// lifetime; dropped silently when the learner navigates away.
pub struct ActiveQuiz {
    pub category: Category,
    pub level: Level,
    pub session: QuizSession,
}

#[derive(Serialize, Deserialize)]
pub struct LearnApp {
    #[serde(skip)]
    pub bank: QuestionBank,
    #[serde(skip)]
    pub lessons: LessonBook,
    #[serde(skip)]
    pub store: ProgressStore,
    #[serde(skip)]
    pub quiz: Option<ActiveQuiz>,
    pub selected_category: Category,
    #[serde(skip)]
    pub open_lesson: Option<usize>,
    pub editor_source: String,
    #[serde(skip)]
    pub name_input: String,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub message: String,
}

impl Default for LearnApp {
    fn default() -> Self {
        LearnApp::with_store(ProgressStore::default())
    }
}

impl LearnApp {
    /// Build the app around a progress store. Tests hand in an in-memory
    /// store; the desktop entry point uses the file-backed default.
    pub fn with_store(store: ProgressStore) -> Self {
        let name_input = store.load_profile().display_name;
        LearnApp {
            bank: read_question_bank(),
            lessons: read_lessons(),
            store,
            quiz: None,
            selected_category: Category::Html,
            open_lesson: None,
            editor_source: String::new(),
            name_input,
            state: AppState::Home,
            message: String::new(),
        }
    }

    /// Entry point for eframe: restore persisted UI preferences, then
    /// rebuild everything that is never persisted (bank, lessons, session).
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: LearnApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.bank = read_question_bank();
        app.lessons = read_lessons();
        app.name_input = app.store.load_profile().display_name;
        app
    }
}
