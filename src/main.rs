// Entry point kept minimal: window config and app launch. All screen
// composition lives in the app module (src/app.rs).

use eframe::egui;

mod app;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();

    // Portrait-ish window so the paging slider reads like the phone demo it
    // reproduces.
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 900.0])
            .with_min_inner_size([320.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        "PageDeck",
        native_options,
        Box::new(|cc| Box::new(app::PageDeckApp::new(&cc.egui_ctx))),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
