use eframe::egui;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.1;

/// Zoom and drawing-surface size. Model space is independent of both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    zoom: f32,
    size: egui::Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            size: egui::vec2(800.0, 600.0),
        }
    }
}

impl Viewport {
    pub fn with_zoom(zoom: f32) -> Self {
        Self {
            zoom: snap_zoom(zoom),
            ..Self::default()
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn size(&self) -> egui::Vec2 {
        self.size
    }

    pub fn zoom_in(&mut self) {
        self.zoom = snap_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = snap_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > MIN_ZOOM
    }

    /// Returns whether the size actually changed.
    pub fn resize(&mut self, size: egui::Vec2) -> bool {
        if size == self.size {
            return false;
        }
        self.size = size;
        true
    }

    /// `device` is relative to the canvas top-left.
    pub fn device_to_model(&self, device: egui::Pos2) -> egui::Pos2 {
        (device.to_vec2() / self.zoom).to_pos2()
    }

    pub fn model_to_screen(&self, origin: egui::Pos2, model: egui::Pos2) -> egui::Pos2 {
        origin + model.to_vec2() * self.zoom
    }

    pub fn screen_to_model(&self, origin: egui::Pos2, screen: egui::Pos2) -> egui::Pos2 {
        ((screen - origin) / self.zoom).to_pos2()
    }
}

/// Non-finite input falls back to 1.0 since `clamp` passes NaN through.
fn snap_zoom(zoom: f32) -> f32 {
    if !zoom.is_finite() {
        return 1.0;
    }
    ((zoom * 10.0).round() / 10.0).clamp(MIN_ZOOM, MAX_ZOOM)
}
