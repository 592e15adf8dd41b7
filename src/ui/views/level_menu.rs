use crate::app::LearnApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, Vec2};

pub fn ui_level_menu(app: &mut LearnApp, ctx: &Context) {
    let category = app.selected_category;
    let rows = app.level_rows(category);

    centered_panel(ctx, 320.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("{} — Choose level", category.title()));
            ui.add_space(6.0);
            ui.label("Select a difficulty level. Each level contains curated questions.");
            ui.add_space(16.0);

            let btn_w = (ui.available_width() * 0.9).clamp(160.0, 380.0);
            for row in &rows {
                let label = format!(
                    "{} ({} questions)",
                    row.level.title(),
                    row.question_count
                );
                if ui
                    .add(Button::new(label).min_size(Vec2::new(btn_w, 40.0)))
                    .clicked()
                {
                    app.start_quiz(category, row.level);
                }
                ui.add_space(6.0);
            }

            ui.add_space(10.0);
            ui.label("Tip: you can switch level after finishing a quiz.");
        });
    });
}
