use super::*;
use crate::certificate;

impl LearnApp {
    pub fn open_home(&mut self) {
        self.abandon_quiz();
        self.state = AppState::Home;
        self.message.clear();
    }

    pub fn open_lessons(&mut self, category: Category) {
        self.abandon_quiz();
        self.selected_category = category;
        self.open_lesson = None;
        self.state = AppState::Lessons;
        self.message.clear();
    }

    pub fn select_lesson(&mut self, index: usize) {
        if index < self.lessons.lessons(self.selected_category).len() {
            self.open_lesson = Some(index);
        }
    }

    pub fn open_level_menu(&mut self, category: Category) {
        self.abandon_quiz();
        self.selected_category = category;
        self.state = AppState::LevelMenu;
        self.message.clear();
    }

    /// "Change level" from the quiz or summary: drops the attempt.
    pub fn change_level(&mut self) {
        let category = self
            .quiz
            .as_ref()
            .map(|active| active.category)
            .unwrap_or(self.selected_category);
        self.open_level_menu(category);
    }

    pub fn open_dashboard(&mut self) {
        self.abandon_quiz();
        self.state = AppState::Dashboard;
        self.message.clear();
    }

    /// Gate check runs against a fresh snapshot on every entry; an
    /// ineligible visitor lands on the dashboard instead.
    pub fn open_certificate(&mut self) {
        self.abandon_quiz();
        let records = self.store.load();
        if certificate::is_eligible(&records, &Category::ALL) {
            self.state = AppState::Certificate;
            self.message.clear();
        } else {
            self.state = AppState::Dashboard;
            self.message = "Complete all quizzes to unlock the certificate.".to_owned();
        }
    }

    /// Open the try-it editor seeded with a lesson example.
    pub fn open_editor_with(&mut self, category: Category, source: &str) {
        self.abandon_quiz();
        self.selected_category = category;
        self.editor_source = source.to_owned();
        self.state = AppState::Editor;
        self.message.clear();
    }

    /// Open the editor keeping whatever is in the buffer.
    pub fn open_editor(&mut self) {
        self.abandon_quiz();
        self.state = AppState::Editor;
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressStore;

    fn app() -> LearnApp {
        LearnApp::with_store(ProgressStore::in_memory())
    }

    fn finish_quiz(app: &mut LearnApp, category: Category) {
        app.start_quiz(category, Level::Basic);
        let total = app.quiz.as_ref().unwrap().session.total();
        for _ in 0..total {
            app.select_option(0);
            app.submit_answer();
            app.advance_question();
        }
    }

    #[test]
    fn certificate_redirects_until_all_categories_are_completed() {
        let mut app = app();
        app.open_certificate();
        assert_eq!(app.state, AppState::Dashboard);
        assert!(!app.message.is_empty());

        finish_quiz(&mut app, Category::Html);
        finish_quiz(&mut app, Category::Css);
        app.open_certificate();
        assert_eq!(app.state, AppState::Dashboard);

        finish_quiz(&mut app, Category::Bootstrap);
        app.open_certificate();
        assert_eq!(app.state, AppState::Certificate);
    }

    #[test]
    fn gate_is_recomputed_on_every_entry() {
        let mut app = app();
        for category in Category::ALL {
            finish_quiz(&mut app, category);
        }
        app.open_certificate();
        assert_eq!(app.state, AppState::Certificate);

        // a fresh empty store behind the same app means no certificate
        app.store = ProgressStore::in_memory();
        app.open_certificate();
        assert_eq!(app.state, AppState::Dashboard);
    }

    #[test]
    fn leaving_the_quiz_drops_the_session() {
        let mut app = app();
        app.start_quiz(Category::Css, Level::Advanced);
        assert!(app.quiz.is_some());
        app.open_lessons(Category::Css);
        assert!(app.quiz.is_none());
        assert_eq!(app.state, AppState::Lessons);
    }

    #[test]
    fn editor_seeding_replaces_the_buffer() {
        let mut app = app();
        app.open_editor_with(Category::Bootstrap, "<div class=\"row\"></div>");
        assert_eq!(app.state, AppState::Editor);
        assert_eq!(app.selected_category, Category::Bootstrap);
        assert_eq!(app.editor_source, "<div class=\"row\"></div>");
    }
}
