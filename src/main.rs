mod app;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("dna_sketch=info"))
        .init();
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("DNA Structure Sketch"),
        ..Default::default()
    };
    eframe::run_native(
        "DNA Structure Sketch",
        native_options,
        Box::new(|cc| Ok(Box::new(app::DnaApp::new(cc)))),
    )
}
