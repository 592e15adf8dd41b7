use crate::app::LearnApp;
use crate::code_utils::syntax_for;
use crate::model::Category;
use crate::preview::build_preview_document;
use crate::ui::layout::{code_editor_input, code_editor_readonly};
use egui::{CentralPanel, Context, RichText};

pub fn ui_editor(app: &mut LearnApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.heading("🔧 Try it editor");
            ui.label("Edit the snippet on the left; the generated preview document is on the right.");
            ui.add_space(6.0);

            // Wrap mode follows the category the snippet came from
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 300.0).max(0.0) / 2.0);
                ui.label("Wrap as:");
                for category in Category::ALL {
                    if ui
                        .selectable_label(
                            app.selected_category == category,
                            category.key().to_uppercase(),
                        )
                        .clicked()
                    {
                        app.selected_category = category;
                    }
                }
            });
        });
        ui.add_space(8.0);

        let category = app.selected_category;
        ui.columns(2, |columns| {
            let left_width = columns[0].available_width() * 0.97;
            columns[0].label(RichText::new("Snippet").strong());
            code_editor_input(
                &mut columns[0],
                "try_editor",
                left_width,
                16,
                14.0,
                syntax_for(category),
                &mut app.editor_source,
                380.0,
            );

            let doc = build_preview_document(category, &app.editor_source);
            let right_width = columns[1].available_width() * 0.97;
            columns[1].label(RichText::new("Preview document").strong());
            code_editor_readonly(
                &mut columns[1],
                "preview_doc",
                right_width,
                16,
                14.0,
                syntax_for(Category::Html),
                &doc,
                380.0,
            );
        });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui.button("💾 Save preview.html").clicked() {
                let doc = build_preview_document(category, &app.editor_source);
                match std::fs::write("preview.html", &doc) {
                    Ok(()) => {
                        app.message = "Preview saved to preview.html".to_owned();
                    }
                    Err(e) => {
                        log::warn!("could not save preview: {e}");
                        app.message = "Could not save the preview document.".to_owned();
                    }
                }
            }
            if !app.message.is_empty() {
                ui.label(RichText::new(&app.message).strong());
            }
        });
    });
}
