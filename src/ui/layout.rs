use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Vec2, Visuals};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

use crate::app::LearnApp;

pub fn top_panel(app: &mut LearnApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🏠 Home").clicked() {
                app.open_home();
            }
            if ui.button("📖 Lessons").clicked() {
                app.open_lessons(app.selected_category);
            }
            if ui.button("📝 Quizzes").clicked() {
                app.open_level_menu(app.selected_category);
            }
            if ui.button("🔧 Try it").clicked() {
                app.open_editor();
            }
            if ui.button("📊 Dashboard").clicked() {
                app.open_dashboard();
            }
            if ui.button("🏆 Certificate").clicked() {
                app.open_certificate();
                ctx.request_repaint();
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centered vertically, with a maximum content width and an inner
/// content block.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Editable snippet editor with a fixed width.
pub fn code_editor_input(
    ui: &mut Ui,
    id: &str,
    width: f32,
    rows: usize,
    fontsize: f32,
    syntax: Syntax,
    text: &mut String,
    max_height: f32,
) {
    ScrollArea::vertical()
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(fontsize)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, text);
        });
}

/// Read-only rendering of a generated document or lesson example.
pub fn code_editor_readonly(
    ui: &mut Ui,
    id: &str,
    width: f32,
    rows: usize,
    fontsize: f32,
    syntax: Syntax,
    code: &str,
    max_height: f32,
) {
    let mut buf = code.to_owned();
    ScrollArea::vertical()
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(fontsize)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, &mut buf);
        });
}

/// Two equally sized buttons in one row, centered in the given width.
/// Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
        clicked_left = ui
            .add(Button::new(left_label).min_size(Vec2::new(btn_w, 36.0)))
            .clicked();
        ui.add_space(8.0);
        clicked_right = ui
            .add(Button::new(right_label).min_size(Vec2::new(btn_w, 36.0)))
            .clicked();
    });
    (clicked_left, clicked_right)
}
