use crate::app::LearnApp;
use crate::stats::CategoryStatus;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText, Vec2};

pub fn ui_home(app: &mut LearnApp, ctx: &Context) {
    let cards = app.category_cards();

    centered_panel(ctx, 480.0, 640.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎓 Learn Web Basics");
            ui.add_space(6.0);
            ui.label("Lessons, live examples and quizzes for HTML, CSS and Bootstrap.");
            ui.add_space(14.0);

            // Name chip: written here, read back by dashboard and certificate
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 360.0).max(0.0) / 2.0);
                ui.label("👤");
                let response = ui.add_sized(
                    [240.0, 24.0],
                    egui::TextEdit::singleline(&mut app.name_input)
                        .hint_text("Enter your name"),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Save").clicked() || submitted {
                    app.save_display_name();
                }
            });
            if !app.message.is_empty() {
                ui.add_space(4.0);
                ui.label(RichText::new(&app.message).strong());
            }
            ui.add_space(16.0);

            for card in &cards {
                let status_line = match card.status {
                    CategoryStatus::Completed {
                        score,
                        total,
                        percentage,
                    } => format!("✅ {score}/{total} correct ({percentage:.0}%)"),
                    CategoryStatus::NotAttempted => "Not attempted yet".to_owned(),
                };

                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width().min(560.0));
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(card.title).strong().size(16.0));
                            ui.label(card.blurb);
                            ui.label(RichText::new(status_line).weak());
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui
                                    .add(Button::new("📝 Quiz").min_size(Vec2::new(80.0, 30.0)))
                                    .clicked()
                                {
                                    app.open_level_menu(card.category);
                                }
                                if ui
                                    .add(
                                        Button::new("📖 Lessons")
                                            .min_size(Vec2::new(90.0, 30.0)),
                                    )
                                    .clicked()
                                {
                                    app.open_lessons(card.category);
                                }
                            },
                        );
                    });
                });
                ui.add_space(8.0);
            }
        });
    });
}
