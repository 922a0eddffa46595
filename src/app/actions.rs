use dna_sketch::error::ExportError;
use dna_sketch::export;
use dna_sketch::model::Language;
use dna_sketch::settings;
use eframe::egui;
use std::path::PathBuf;

use super::{DnaApp, PendingExport};

impl DnaApp {
    pub(super) fn undo(&mut self) {
        if self.editor.undo() {
            self.status = None;
        }
    }

    pub(super) fn redo(&mut self) {
        if self.editor.redo() {
            self.status = None;
        }
    }

    pub(super) fn clear_canvas(&mut self) {
        self.editor.clear();
        self.status = None;
    }

    /// Asks the backend for a screenshot; the PNG is written once it arrives.
    pub(super) fn request_export(&mut self, ctx: &egui::Context) {
        let Some(canvas) = self.canvas_rect else {
            self.status = Some("Nothing to export yet".to_string());
            return;
        };
        self.pending_export = Some(PendingExport { canvas });
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
    }

    pub(super) fn handle_screenshots(&mut self, ctx: &egui::Context) {
        if self.pending_export.is_none() {
            return;
        }
        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(screenshot) = screenshot else {
            return;
        };
        let Some(pending) = self.pending_export.take() else {
            return;
        };
        let image = export::crop_canvas(&screenshot, pending.canvas, ctx.pixels_per_point());
        let Some(path) = self.export_target() else {
            log::debug!("export cancelled");
            return;
        };
        match export::save_png(&image, &path) {
            Ok(()) => self.status = Some(format!("Exported {}", path.display())),
            Err(e) => {
                if matches!(e, ExportError::EmptyCapture) {
                    log::warn!("export skipped: {e}");
                } else {
                    log::error!("export to {} failed: {e}", path.display());
                }
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    fn export_target(&self) -> Option<PathBuf> {
        if !self.settings.ask_export_path {
            return Some(PathBuf::from(&self.settings.export_file_name));
        }
        rfd::FileDialog::new()
            .set_file_name(&self.settings.export_file_name)
            .add_filter("PNG", &["png"])
            .save_file()
    }

    pub(super) fn set_language(&mut self, language: Language) {
        if self.settings.language == language {
            return;
        }
        self.settings.language = language;
        self.persist_settings();
    }

    pub(super) fn set_show_instructions(&mut self, show: bool) {
        self.show_instructions = show;
        if self.settings.show_instructions != show {
            self.settings.show_instructions = show;
            self.persist_settings();
        }
    }

    pub(super) fn persist_settings(&mut self) {
        if let Err(e) = settings::save_settings(&self.settings_path, &self.settings) {
            log::error!("saving {} failed: {e}", self.settings_path.display());
            self.status = Some(format!("Settings save failed: {e}"));
        }
    }
}
