use crate::app::LearnApp;
use crate::certificate;
use crate::model::{AppState, Category};
use crate::stats;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, RichText};

pub fn ui_certificate(app: &mut LearnApp, ctx: &Context) {
    // Re-check on every frame with fresh records: the store may have
    // changed since this view was last entered.
    let records = app.records();
    if !certificate::is_eligible(&records, &Category::ALL) {
        app.state = AppState::Dashboard;
        app.message = "Complete all quizzes to unlock the certificate.".to_owned();
        return;
    }

    let name = app.display_name();
    let completed = certificate::completed_of_offered(&records, &Category::ALL);
    let summary = stats::summarize(&records);
    let score_rows = app.score_rows();

    centered_panel(ctx, 440.0, 620.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🏆").size(48.0));
            ui.heading("Certificate of Completion");
            ui.add_space(14.0);
            ui.label("This certifies that");
            ui.add_space(4.0);
            ui.label(RichText::new(&name).strong().size(28.0));
            ui.add_space(4.0);
            ui.label("has successfully completed");
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "{completed} of {} quizzes with {:.1}% average score",
                    Category::ALL.len(),
                    summary.average_percentage
                ))
                .strong(),
            );
            ui.add_space(12.0);

            for row in &score_rows {
                ui.label(format!("{} — {:.0}%", row.key, row.percentage));
            }

            ui.add_space(20.0);
            let (dashboard, home) = two_button_row(ui, 380.0, "📊 Back to dashboard", "🏠 Home");
            if dashboard {
                app.open_dashboard();
            }
            if home {
                app.open_home();
            }
        });
    });
}
