use dna_sketch::settings::{self, AppSettings};
use dna_sketch::{Editor, Viewport};
use eframe::egui;
use std::path::PathBuf;

mod actions;
mod help;
mod render;
mod update;

/// An export waiting for the next viewport screenshot.
#[derive(Clone, Copy, Debug)]
struct PendingExport {
    canvas: egui::Rect,
}

pub struct DnaApp {
    editor: Editor,
    settings: AppSettings,
    settings_path: PathBuf,
    pending_export: Option<PendingExport>,
    canvas_rect: Option<egui::Rect>,
    status: Option<String>,
    show_instructions: bool,
    loaded_fonts: Vec<String>,
}

impl DnaApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = settings::config_path();
        let settings = settings::load_or_default(&settings_path);

        let loaded_fonts = match settings.font_directory.as_deref() {
            Some(dir) => Self::load_custom_fonts(&cc.egui_ctx, dir),
            None => Vec::new(),
        };
        if !loaded_fonts.is_empty() {
            log::info!("loaded font(s): {}", loaded_fonts.join(", "));
        }

        Self {
            editor: Editor::new(Viewport::with_zoom(settings.initial_zoom)),
            show_instructions: settings.show_instructions,
            settings,
            settings_path,
            pending_export: None,
            canvas_rect: None,
            status: None,
            loaded_fonts,
        }
    }

    /// Registers every `.ttf`/`.otf` in `font_dir` as a fallback for the
    /// proportional family, so CJK captions render.
    pub(super) fn load_custom_fonts(ctx: &egui::Context, font_dir: &str) -> Vec<String> {
        let path = std::path::Path::new(font_dir);
        if !path.is_dir() {
            log::warn!("font directory {font_dir} does not exist");
            return Vec::new();
        }

        let mut fonts = egui::FontDefinitions::default();
        let mut loaded_names = Vec::new();

        if let Ok(entries) = std::fs::read_dir(path) {
            for entry in entries.flatten() {
                let file_path = entry.path();
                let ext = file_path.extension().and_then(|e| e.to_str()).unwrap_or("");
                if !["ttf", "otf"].contains(&ext.to_lowercase().as_str()) {
                    continue;
                }

                match std::fs::read(&file_path) {
                    Ok(font_data) => {
                        let font_name = file_path
                            .file_stem()
                            .and_then(|s| s.to_str())
                            .unwrap_or("custom")
                            .to_string();

                        fonts.font_data.insert(
                            font_name.clone(),
                            std::sync::Arc::new(egui::FontData::from_owned(font_data)),
                        );
                        fonts
                            .families
                            .entry(egui::FontFamily::Proportional)
                            .or_default()
                            .push(font_name.clone());

                        loaded_names.push(font_name);
                    }
                    Err(e) => log::warn!("skipping font {}: {e}", file_path.display()),
                }
            }
        }

        if !loaded_names.is_empty() {
            ctx.set_fonts(fonts);
        }

        loaded_names
    }
}
