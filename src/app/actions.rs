use super::*;
use crate::model::UserProfile;
use crate::session::Advance;

impl LearnApp {
    /// Snapshot the bank entry for (category, level) and begin an attempt.
    /// An empty entry finalizes immediately with a 0/0 record.
    pub fn start_quiz(&mut self, category: Category, level: Level) {
        let questions = self.bank.questions(category, level).to_vec();
        let session = QuizSession::new(questions);
        let finished = session.is_finished();
        self.selected_category = category;
        self.quiz = Some(ActiveQuiz {
            category,
            level,
            session,
        });
        self.message.clear();
        if finished {
            self.finalize_quiz();
        } else {
            self.state = AppState::Quiz;
        }
    }

    pub fn select_option(&mut self, option: usize) {
        if let Some(active) = self.quiz.as_mut() {
            active.session.select_option(option);
        }
    }

    pub fn submit_answer(&mut self) {
        if let Some(active) = self.quiz.as_mut() {
            active.session.submit_answer();
        }
    }

    /// Move past a revealed answer. Finishing the last question writes the
    /// progress record before the summary appears.
    pub fn advance_question(&mut self) {
        let outcome = match self.quiz.as_mut() {
            Some(active) => active.session.advance(),
            None => return,
        };
        if outcome == Advance::Finished {
            self.finalize_quiz();
        }
    }

    /// Restart the current attempt on the same question snapshot. Stored
    /// progress keeps whatever the last finished attempt wrote.
    pub fn retake_quiz(&mut self) {
        if let Some(active) = self.quiz.as_mut() {
            active.session.retake();
            self.state = if active.session.is_finished() {
                AppState::Summary
            } else {
                AppState::Quiz
            };
            self.message.clear();
        }
    }

    /// Discard the attempt without writing anything durable.
    pub fn abandon_quiz(&mut self) {
        self.quiz = None;
    }

    /// Write the finished attempt's record. Synchronous: by the time the
    /// summary view renders, a fresh load already sees the record.
    fn finalize_quiz(&mut self) {
        let Some(active) = self.quiz.as_ref() else {
            return;
        };
        let score = active.session.score();
        let total = active.session.total();
        self.store.save(active.category, score, total);
        self.state = AppState::Summary;
    }

    /// Persist the name typed on the home view. Blank input keeps the
    /// stored profile untouched.
    pub fn save_display_name(&mut self) {
        let name = self.name_input.trim();
        if name.is_empty() {
            return;
        }
        self.store.save_profile(&UserProfile {
            display_name: name.to_owned(),
        });
        self.message = format!("Welcome, {name}!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressStore;

    fn app() -> LearnApp {
        LearnApp::with_store(ProgressStore::in_memory())
    }

    fn answer_current(app: &mut LearnApp, option: usize) {
        app.select_option(option);
        app.submit_answer();
        app.advance_question();
    }

    #[test]
    fn finishing_a_quiz_writes_exactly_one_record() {
        let mut app = app();
        app.start_quiz(Category::Css, Level::Basic);
        let total = app.quiz.as_ref().unwrap().session.total();
        assert!(total > 0);
        for _ in 0..total {
            answer_current(&mut app, 0);
        }
        assert_eq!(app.state, AppState::Summary);
        let record = app.store.record(Category::Css).expect("record written");
        assert!(record.completed);
        assert_eq!(record.total, total);
        assert!(record.score <= record.total);
        // the other categories stay untouched
        assert_eq!(app.store.record(Category::Html), None);
    }

    #[test]
    fn abandoning_mid_quiz_never_writes() {
        let mut app = app();
        app.start_quiz(Category::Html, Level::Basic);
        app.select_option(0);
        app.submit_answer();
        app.open_dashboard();
        assert!(app.quiz.is_none());
        assert_eq!(app.store.record(Category::Html), None);
    }

    #[test]
    fn refinishing_overwrites_the_previous_record() {
        let mut app = app();
        app.start_quiz(Category::Html, Level::Basic);
        let total = app.quiz.as_ref().unwrap().session.total();
        for _ in 0..total {
            answer_current(&mut app, 0);
        }
        let first = app.store.record(Category::Html).unwrap();

        app.retake_quiz();
        for _ in 0..total {
            answer_current(&mut app, 3);
        }
        let second = app.store.record(Category::Html).unwrap();
        assert_eq!(app.store.load().len(), 1);
        assert_eq!(second.total, first.total);
        assert_ne!(second.score, first.score);
    }

    #[test]
    fn retake_returns_to_the_quiz_without_touching_the_store() {
        let mut app = app();
        app.start_quiz(Category::Bootstrap, Level::Basic);
        let total = app.quiz.as_ref().unwrap().session.total();
        for _ in 0..total {
            answer_current(&mut app, 0);
        }
        let saved = app.store.record(Category::Bootstrap).unwrap();
        app.retake_quiz();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.quiz.as_ref().unwrap().session.score(), 0);
        assert_eq!(app.store.record(Category::Bootstrap), Some(saved));
    }

    #[test]
    fn blank_name_is_not_persisted() {
        let mut app = app();
        app.name_input = "   ".to_owned();
        app.save_display_name();
        assert_eq!(app.store.load_profile().display_name, "Student");
        app.name_input = "Ada".to_owned();
        app.save_display_name();
        assert_eq!(app.store.load_profile().display_name, "Ada");
    }
}
