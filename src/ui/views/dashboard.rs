use crate::app::LearnApp;
use crate::certificate;
use crate::model::Category;
use crate::stats::CategoryStatus;
use egui::{Button, CentralPanel, Context, Grid, ProgressBar, RichText, ScrollArea, Vec2};

pub fn ui_dashboard(app: &mut LearnApp, ctx: &Context) {
    let name = app.display_name();
    let summary = app.summary();
    let cards = app.category_cards();
    let score_rows = app.score_rows();
    let eligible = certificate::is_eligible(&app.records(), &Category::ALL);

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let panel_width = ui.available_width().min(640.0);

                ui.add_space(8.0);
                ui.heading("📊 Quiz Dashboard");
                ui.label("Track your progress and performance across all quizzes");
                ui.label(RichText::new(format!("👤 {name}")).strong());
                if !app.message.is_empty() {
                    ui.add_space(4.0);
                    ui.label(RichText::new(&app.message).strong());
                }
                ui.add_space(12.0);

                Grid::new("overall_stats")
                    .num_columns(3)
                    .spacing([32.0, 4.0])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new(format!(
                                    "{}/{}",
                                    summary.completed,
                                    Category::ALL.len()
                                ))
                                .strong()
                                .size(24.0),
                            );
                            ui.label("Quizzes completed");
                        });
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new(format!("{:.1}%", summary.average_percentage))
                                    .strong()
                                    .size(24.0),
                            );
                            ui.label("Average score");
                        });
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new(summary.tier().label())
                                    .strong()
                                    .size(24.0),
                            );
                            ui.label("Performance level");
                        });
                        ui.end_row();
                    });
                ui.add_space(16.0);

                ui.label(RichText::new("Individual quiz results").strong().size(16.0));
                ui.add_space(6.0);
                for card in &cards {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(panel_width);
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(card.title).strong());
                                match card.status {
                                    CategoryStatus::Completed {
                                        score,
                                        total,
                                        percentage,
                                    } => {
                                        ui.label(format!(
                                            "{percentage:.0}% — {score}/{total} correct answers"
                                        ));
                                    }
                                    CategoryStatus::NotAttempted => {
                                        ui.label(RichText::new("Not attempted yet").weak());
                                    }
                                }
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let label = match card.status {
                                        CategoryStatus::Completed { .. } => "🔄 Retake quiz",
                                        CategoryStatus::NotAttempted => "▶ Start quiz",
                                    };
                                    if ui
                                        .add(
                                            Button::new(label)
                                                .min_size(Vec2::new(120.0, 32.0)),
                                        )
                                        .clicked()
                                    {
                                        app.open_level_menu(card.category);
                                    }
                                },
                            );
                        });
                    });
                    ui.add_space(6.0);
                }

                if !score_rows.is_empty() {
                    ui.add_space(10.0);
                    ui.label(RichText::new("Score distribution").strong().size(16.0));
                    ui.add_space(6.0);
                    for row in &score_rows {
                        ui.horizontal(|ui| {
                            ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
                            ui.label(RichText::new(&row.key).strong());
                            ui.add(
                                ProgressBar::new(row.percentage / 100.0)
                                    .desired_width(panel_width - 120.0)
                                    .text(format!("{:.0}%", row.percentage)),
                            );
                        });
                    }
                }

                ui.add_space(16.0);
                if eligible
                    && ui
                        .add(Button::new("🏆 Get certificate").min_size(Vec2::new(200.0, 40.0)))
                        .clicked()
                {
                    app.open_certificate();
                }
                ui.add_space(12.0);
            });
        });
    });
}
