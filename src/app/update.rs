use dna_sketch::model::{ElementKind, Language};
use dna_sketch::{Cursor, PointerEvent};
use eframe::egui;

use super::help::draw_instructions_window;
use super::render::{draw_background, draw_elements, draw_placement_hint, tool_button};
use super::DnaApp;

fn tr(language: Language, english: &'static str, chinese: &'static str) -> &'static str {
    match language {
        Language::English => english,
        Language::Chinese => chinese,
    }
}

impl eframe::App for DnaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshots(ctx);

        let wants_keyboard = ctx.wants_keyboard_input();
        ctx.input_mut(|i| {
            if wants_keyboard {
                return;
            }
            if i.consume_key(
                egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
                egui::Key::Z,
            ) || i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y)
            {
                self.redo();
            } else if i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z) {
                self.undo();
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
                self.editor.deselect_tool();
            }
            if i.consume_key(egui::Modifiers::NONE, egui::Key::F1) {
                self.set_show_instructions(!self.show_instructions);
            }
        });

        let language = self.settings.language;

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(tr(language, "DNA Structure Visualizer", "DNA 结构可视化工具"));
                    ui.small(tr(
                        language,
                        "Interactive teaching tool for exploring DNA components and secondary structure",
                        "交互式教学工具，用于探索 DNA 组件和二级结构",
                    ));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("Clear")
                        .on_hover_text(tr(language, "Clear the canvas", "清空画布"))
                        .clicked()
                    {
                        self.clear_canvas();
                    }
                    if ui
                        .button("Export PNG")
                        .on_hover_text(tr(language, "Export as PNG", "导出为PNG"))
                        .clicked()
                    {
                        self.request_export(ctx);
                    }
                    ui.separator();
                    if ui
                        .add_enabled(self.editor.view().can_zoom_in(), egui::Button::new("+"))
                        .on_hover_text(tr(language, "Zoom in", "放大"))
                        .clicked()
                    {
                        self.editor.zoom_in();
                    }
                    ui.label(format!("{}%", self.editor.view().zoom_percent()));
                    if ui
                        .add_enabled(self.editor.view().can_zoom_out(), egui::Button::new("−"))
                        .on_hover_text(tr(language, "Zoom out", "缩小"))
                        .clicked()
                    {
                        self.editor.zoom_out();
                    }
                    ui.separator();
                    if ui
                        .add_enabled(self.editor.can_redo(), egui::Button::new("Redo"))
                        .on_hover_text(tr(language, "Redo (Ctrl+Y)", "重做 (Ctrl+Y)"))
                        .clicked()
                    {
                        self.redo();
                    }
                    if ui
                        .add_enabled(self.editor.can_undo(), egui::Button::new("Undo"))
                        .on_hover_text(tr(language, "Undo (Ctrl+Z)", "撤销 (Ctrl+Z)"))
                        .clicked()
                    {
                        self.undo();
                    }
                });
            });
            ui.add_space(6.0);
        });

        if let Some(status) = &self.status {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.label(status.as_str());
            });
        }

        egui::SidePanel::left("toolbar")
            .resizable(false)
            .exact_width(300.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.heading(tr(language, "DNA components", "DNA 组件"));
                ui.add_space(6.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for kind in ElementKind::ALL {
                        let active = self.editor.selected_tool() == Some(kind);
                        if tool_button(ui, kind, language, active) {
                            self.editor.select_tool(kind);
                        }
                        ui.add_space(4.0);
                    }

                    ui.separator();
                    let mut next_language = language;
                    ui.horizontal(|ui| {
                        ui.label("Labels:");
                        ui.selectable_value(&mut next_language, Language::English, "English");
                        ui.selectable_value(&mut next_language, Language::Chinese, "Chinese");
                    });
                    self.set_language(next_language);
                    if ui.button(tr(language, "Instructions (F1)", "使用说明 (F1)")).clicked() {
                        self.set_show_instructions(!self.show_instructions);
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                let origin = rect.min;
                self.canvas_rect = Some(rect);
                self.editor.resize(rect.size());

                let to_device = |p: egui::Pos2| (p - origin).to_pos2();
                let (latest, pressed, released) = ctx.input(|i| {
                    (
                        i.pointer.latest_pos(),
                        i.pointer.primary_pressed(),
                        i.pointer.primary_released(),
                    )
                });
                let inside = latest.is_some_and(|p| rect.contains(p));

                if pressed && response.hovered() {
                    if let Some(p) = latest {
                        self.editor.handle_pointer(PointerEvent::Press(to_device(p)));
                    }
                }
                if let Some(p) = latest {
                    if inside {
                        self.editor.handle_pointer(PointerEvent::Move(to_device(p)));
                    } else if self.editor.dragged().is_some() {
                        self.editor.handle_pointer(PointerEvent::Leave);
                    }
                }
                if let Some(p) = response.interact_pointer_pos() {
                    if response.clicked() {
                        self.editor.handle_pointer(PointerEvent::Click(to_device(p)));
                    }
                    if response.double_clicked() {
                        self.editor.handle_pointer(PointerEvent::DoubleClick(to_device(p)));
                    }
                    if response.secondary_clicked() {
                        self.editor.handle_pointer(PointerEvent::ContextClick(to_device(p)));
                    }
                }
                if released {
                    self.editor.handle_pointer(PointerEvent::Release);
                }

                let painter = ui.painter_at(rect);
                draw_background(&painter, rect);
                draw_elements(
                    &painter,
                    origin,
                    self.editor.view(),
                    self.editor.elements(),
                    self.editor.hovered(),
                    language,
                );
                if let Some(kind) = self.editor.selected_tool() {
                    if self.pending_export.is_none() {
                        draw_placement_hint(&painter, rect, kind, language);
                    }
                }

                if inside {
                    ctx.set_cursor_icon(match self.editor.cursor() {
                        Cursor::Default => egui::CursorIcon::Default,
                        Cursor::Crosshair => egui::CursorIcon::Crosshair,
                        Cursor::Grab => egui::CursorIcon::Grab,
                        Cursor::Grabbing => egui::CursorIcon::Grabbing,
                    });
                }
            });

        let mut show_instructions = self.show_instructions;
        draw_instructions_window(ctx, &mut show_instructions, language, &self.loaded_fonts);
        if show_instructions != self.show_instructions {
            self.set_show_instructions(show_instructions);
        }
    }
}
