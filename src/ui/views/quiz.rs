use crate::app::LearnApp;
use crate::model::AppState;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Button, Color32, Context, ProgressBar, RichText, SelectableLabel, Vec2};

pub fn ui_quiz(app: &mut LearnApp, ctx: &Context) {
    // Copy this frame's display data out of the session before handling
    // clicks; a click may replace or finish the attempt.
    let Some(active) = app.active_quiz() else {
        app.open_home();
        return;
    };
    if active.session.is_finished() {
        app.state = AppState::Summary;
        return;
    }
    let category = active.category;
    let level = active.level;
    let index = active.session.current_index();
    let total = active.session.total();
    let Some(question) = active.session.current_question().cloned() else {
        app.state = AppState::Summary;
        return;
    };
    let locked = active.session.is_locked();
    let pending = active.session.pending();
    let frozen = active.session.selection(index);
    let progress = active.session.progress_fraction();
    let is_last = index as u32 + 1 == total;

    centered_panel(ctx, 540.0, 680.0, |ui| {
        ui.vertical_centered(|ui| {
            let panel_width = ui.available_width().min(620.0);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "{} Quiz — {}",
                        category.key().to_uppercase(),
                        level.title()
                    ))
                    .strong()
                    .size(17.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("Question {} of {}", index + 1, total)).weak(),
                    );
                });
            });
            ui.add_space(4.0);
            ui.add(ProgressBar::new(progress).desired_width(panel_width));
            ui.add_space(12.0);

            ui.label(RichText::new(&question.prompt).strong().size(16.0));
            ui.add_space(12.0);

            let option_width = panel_width * 0.92;
            for (i, option) in question.options.iter().enumerate() {
                let letter = (b'A' + i as u8) as char;
                let text = format!("{letter}.  {option}");
                if locked {
                    let is_correct = i == question.correct;
                    let was_picked = frozen == Some(i);
                    let rich = if is_correct {
                        RichText::new(format!("✅ {text}"))
                            .color(Color32::from_rgb(16, 185, 129))
                    } else if was_picked {
                        RichText::new(format!("❌ {text}"))
                            .color(Color32::from_rgb(239, 68, 68))
                    } else {
                        RichText::new(text).weak()
                    };
                    ui.add_sized([option_width, 30.0], egui::Label::new(rich));
                } else if ui
                    .add_sized(
                        [option_width, 30.0],
                        SelectableLabel::new(pending == Some(i), text),
                    )
                    .clicked()
                {
                    app.select_option(i);
                }
                ui.add_space(4.0);
            }

            if locked {
                ui.add_space(8.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(option_width);
                    ui.label(RichText::new("Explanation").strong());
                    ui.label(
                        question
                            .explanation
                            .as_deref()
                            .unwrap_or("No explanation available for this question."),
                    );
                });
            }

            ui.add_space(12.0);
            if locked {
                let label = if is_last { "🏁 Finish" } else { "➡ Next" };
                if ui
                    .add(Button::new(label).min_size(Vec2::new(160.0, 36.0)))
                    .clicked()
                {
                    app.advance_question();
                }
            } else {
                let check = ui.add_enabled(
                    pending.is_some(),
                    Button::new("✅ Check").min_size(Vec2::new(160.0, 36.0)),
                );
                if check.clicked() {
                    app.submit_answer();
                }
            }

            ui.add_space(10.0);
            let (change, restart) = two_button_row(ui, 340.0, "📂 Change level", "🔄 Restart level");
            if change {
                app.change_level();
            }
            if restart {
                app.retake_quiz();
            }
        });
    });
}
