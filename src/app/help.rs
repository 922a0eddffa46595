use dna_sketch::model::Language;
use eframe::egui;

pub(super) fn draw_instructions_window(
    ctx: &egui::Context,
    open: &mut bool,
    language: Language,
    loaded_fonts: &[String],
) {
    let title = match language {
        Language::English => "Instructions",
        Language::Chinese => "使用说明",
    };
    egui::Window::new(title)
        .open(open)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            for (i, step) in steps(language).iter().enumerate() {
                ui.label(format!("{}. {step}", i + 1));
            }

            ui.add_space(10.0);
            ui.separator();
            help_row(ui, "⌘Z / Ctrl+Z", "Undo");
            help_row(ui, "⌘Y / ⌘⇧Z", "Redo");
            help_row(ui, "Escape", "Drop the selected component");
            help_row(ui, "F1", "Show or hide this window");

            if !loaded_fonts.is_empty() {
                ui.add_space(10.0);
                ui.small(format!("Fonts: {}", loaded_fonts.join(", ")));
            }
        });
}

fn steps(language: Language) -> [&'static str; 6] {
    match language {
        Language::English => [
            "Pick a component from the toolbar",
            "Click the canvas to place it",
            "Drag elements to reposition them",
            "Right-click an element to delete it",
            "Double-click an element to rotate it 180°",
            "Use the controls bar to undo, redo or clear",
        ],
        Language::Chinese => [
            "从上方选择一个组件",
            "点击画布放置组件",
            "拖动元素重新定位",
            "右键点击删除元素",
            "双击元素旋转180度",
            "使用控制栏撤销/重做/清空",
        ],
    }
}

fn help_row(ui: &mut egui::Ui, shortcut: &str, description: &str) {
    ui.horizontal(|ui| {
        ui.monospace(shortcut);
        ui.label(description);
    });
}
