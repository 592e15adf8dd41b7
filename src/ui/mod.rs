pub mod layout;
pub mod views;

use crate::app::LearnApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for LearnApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);
        bottom_panel(ctx);

        // Dispatch per state to the view functions
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Lessons => views::lessons::ui_lessons(self, ctx),
            AppState::LevelMenu => views::level_menu::ui_level_menu(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
            AppState::Dashboard => views::dashboard::ui_dashboard(self, ctx),
            AppState::Certificate => views::certificate::ui_certificate(self, ctx),
            AppState::Editor => views::editor::ui_editor(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
