use crate::app::LearnApp;
use crate::code_utils::syntax_for;
use crate::ui::layout::{centered_panel, code_editor_readonly};
use egui::{Context, RichText, ScrollArea};

pub fn ui_lessons(app: &mut LearnApp, ctx: &Context) {
    let category = app.selected_category;
    let lessons = app.lessons_for(category).to_vec();
    let open = app.open_lesson;

    centered_panel(ctx, 560.0, 720.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("📖 {} — Lessons", category.title()));
            ui.add_space(10.0);

            if lessons.is_empty() {
                ui.label("No lessons available for this category yet.");
                return;
            }

            ui.horizontal_wrapped(|ui| {
                for (i, lesson) in lessons.iter().enumerate() {
                    if ui
                        .selectable_label(open == Some(i), &lesson.title)
                        .clicked()
                    {
                        app.select_lesson(i);
                    }
                }
            });
            ui.add_space(10.0);

            let Some(lesson) = open.and_then(|i| lessons.get(i)) else {
                ui.label("Pick a lesson above to read it.");
                return;
            };

            ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                ui.label(RichText::new(&lesson.title).strong().size(18.0));
                ui.add_space(6.0);
                ui.label(&lesson.description);
                ui.add_space(10.0);
                ui.label(RichText::new("Example").strong());
                let width = ui.available_width().min(640.0);
                code_editor_readonly(
                    ui,
                    "lesson_example",
                    width,
                    10,
                    14.0,
                    syntax_for(category),
                    &lesson.example,
                    260.0,
                );
                ui.add_space(8.0);
                if ui.button("🔧 Try it yourself").clicked() {
                    app.open_editor_with(category, &lesson.example);
                }
            });
        });
    });
}
