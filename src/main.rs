use frontend_quiz::LearnApp;

fn main() -> eframe::Result {
    pretty_env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Learn Web Basics",
        native_options,
        Box::new(|cc| Ok(Box::new(LearnApp::new(cc)))),
    )
}
