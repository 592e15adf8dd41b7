use crate::app::LearnApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Button, Context, RichText, Vec2};

pub fn ui_summary(app: &mut LearnApp, ctx: &Context) {
    // No session means the summary was reached by a stale navigation
    let Some(active) = app.active_quiz() else {
        app.open_home();
        return;
    };
    let category = active.category;
    let level = active.level;
    let score = active.session.score();
    let total = active.session.total();
    let percentage = active.session.percentage();

    centered_panel(ctx, 320.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!(
                "{} Quiz — {}",
                category.key().to_uppercase(),
                level.title()
            ));
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("{score} / {total}"))
                    .strong()
                    .size(40.0),
            );
            ui.add_space(4.0);
            ui.label(format!("You scored {percentage:.0}%"));
            ui.add_space(18.0);

            let (retake, change) = two_button_row(ui, 360.0, "🔄 Retake", "📂 Change level");
            if retake {
                app.retake_quiz();
            }
            if change {
                app.change_level();
            }
            ui.add_space(8.0);
            if ui
                .add(Button::new("📊 View dashboard").min_size(Vec2::new(180.0, 34.0)))
                .clicked()
            {
                app.open_dashboard();
            }
        });
    });
}
