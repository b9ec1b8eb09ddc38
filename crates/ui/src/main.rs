mod app;

use app::ChessApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 720.0])
            .with_title("Chess"),
        ..Default::default()
    };

    eframe::run_native(
        "Chess",
        options,
        Box::new(|_cc| Ok(Box::new(ChessApp::new()))),
    )
}
