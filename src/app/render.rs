use dna_sketch::geometry::{
    self, BASE_HALF_SIZE, BOND_LENGTH, DEOXYRIBOSE_RADIUS, PHOSPHATE_RADIUS,
};
use dna_sketch::model::{Element, ElementKind, Language, Rgba};
use dna_sketch::{ElementId, Viewport};
use eframe::egui;

const LABEL_COLOR: Rgba = Rgba::rgb(0xed, 0xed, 0xed);
const FILL_ALPHA: u8 = 0x20;
const FILL_ALPHA_HOVERED: u8 = 0x40;
const STROKE_ALPHA: u8 = 0x80;

pub(super) fn tool_button(
    ui: &mut egui::Ui,
    kind: ElementKind,
    language: Language,
    active: bool,
) -> bool {
    let accent = kind.accent();
    let mut clicked = false;
    ui.horizontal(|ui| {
        let (swatch, _) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::hover());
        ui.painter().rect_filled(swatch, 4.0, accent.with_alpha(FILL_ALPHA).to_color32());
        ui.painter()
            .circle_filled(swatch.center(), 6.0, accent.to_color32());
        ui.vertical(|ui| {
            let resp = ui
                .selectable_label(active, egui::RichText::new(kind.label(language)).strong())
                .on_hover_text(kind.description(language));
            clicked = resp.clicked();
            ui.small(kind.description(language));
        });
    });
    clicked
}

pub(super) fn draw_background(painter: &egui::Painter, rect: egui::Rect) {
    let bg = painter.ctx().style().visuals.extreme_bg_color;
    painter.rect_filled(rect, 0.0, bg);
}

pub(super) fn draw_elements(
    painter: &egui::Painter,
    origin: egui::Pos2,
    view: &Viewport,
    elements: &[Element],
    hovered: Option<ElementId>,
    language: Language,
) {
    for element in elements {
        let frame = LocalFrame {
            painter,
            origin,
            view,
            element,
        };
        draw_element(&frame, hovered == Some(element.id), language);
    }
}

/// Placement hint shown at the top of the canvas while a tool is armed.
pub(super) fn draw_placement_hint(
    painter: &egui::Painter,
    canvas: egui::Rect,
    kind: ElementKind,
    language: Language,
) {
    let text = match language {
        Language::English => format!("Click the canvas to place {}", kind.name(language)),
        Language::Chinese => format!("点击画布放置 {}", kind.name(language)),
    };
    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::proportional(14.0),
        painter.ctx().style().visuals.strong_text_color(),
    );
    let size = galley.size() + egui::vec2(32.0, 16.0);
    let rect = egui::Rect::from_center_size(
        egui::pos2(canvas.center().x, canvas.min.y + 16.0 + size.y * 0.5),
        size,
    );
    painter.rect_filled(rect, 8.0, painter.ctx().style().visuals.selection.bg_fill);
    painter.galley(rect.min + egui::vec2(16.0, 8.0), galley, egui::Color32::WHITE);
}

/// Drawing surface in one element's local frame. Coordinates passed in are
/// local; scale, rotation, translation and zoom are applied here.
struct LocalFrame<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    view: &'a Viewport,
    element: &'a Element,
}

impl LocalFrame<'_> {
    fn to_screen(&self, local: egui::Vec2) -> egui::Pos2 {
        let model = geometry::local_to_model(self.element, local);
        self.view.model_to_screen(self.origin, model)
    }

    /// Screen length of one local unit.
    fn unit(&self) -> f32 {
        self.element.scale() * self.view.zoom()
    }

    fn angle(&self) -> f32 {
        self.element.rotation.to_radians()
    }

    fn stroke(&self, width: f32, color: Rgba) -> egui::Stroke {
        egui::Stroke::new(width * self.unit(), color.to_color32())
    }

    fn polygon(&self, points: &[egui::Vec2], fill: Rgba, stroke: egui::Stroke) {
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            points,
            fill.to_color32(),
            stroke,
        ));
    }

    fn circle(&self, radius: f32, fill: Rgba, stroke: egui::Stroke) {
        self.painter.circle(
            self.to_screen(egui::Vec2::ZERO),
            radius * self.unit(),
            fill.to_color32(),
            stroke,
        );
    }

    fn polyline(&self, points: &[egui::Pos2], stroke: egui::Stroke) {
        let points: Vec<egui::Pos2> = points.iter().map(|p| self.to_screen(p.to_vec2())).collect();
        self.painter.add(egui::Shape::line(points, stroke));
    }

    fn dashed_line(&self, a: egui::Vec2, b: egui::Vec2, stroke: egui::Stroke, dash: f32, gap: f32) {
        let unit = self.unit();
        draw_dashed_line(
            self.painter,
            self.to_screen(a),
            self.to_screen(b),
            stroke,
            dash * unit,
            gap * unit,
        );
    }

    fn text(&self, at: egui::Vec2, text: &str, size: f32, color: Rgba) {
        self.text_anchored(at, text, size, color, egui::Align2::CENTER_CENTER);
    }

    fn text_anchored(
        &self,
        at: egui::Vec2,
        text: &str,
        size: f32,
        color: Rgba,
        anchor: egui::Align2,
    ) {
        let galley = self.painter.layout_no_wrap(
            text.to_string(),
            egui::FontId::proportional(size * self.unit()),
            color.to_color32(),
        );
        draw_rotated_galley(
            self.painter,
            self.to_screen(at),
            galley,
            anchor,
            color.to_color32(),
            self.angle(),
        );
    }
}

fn draw_element(frame: &LocalFrame<'_>, hovered: bool, language: Language) {
    match frame.element.kind {
        ElementKind::Deoxyribose => draw_deoxyribose(frame, hovered),
        ElementKind::Phosphate => draw_phosphate(frame, hovered),
        ElementKind::Adenine
        | ElementKind::Thymine
        | ElementKind::Guanine
        | ElementKind::Cytosine => draw_base(frame, hovered, language),
        ElementKind::HydrogenBond => draw_hydrogen_bond(frame, hovered),
        ElementKind::PhosphodiesterStraight => {
            draw_phosphodiester_straight(frame, hovered, language)
        }
        ElementKind::PhosphodiesterBent => draw_phosphodiester_bent(frame, hovered, language),
        ElementKind::ChemicalBond => draw_chemical_bond(frame, hovered),
    }
}

fn fill_alpha(hovered: bool) -> u8 {
    if hovered { FILL_ALPHA_HOVERED } else { FILL_ALPHA }
}

fn line_color(color: Rgba, hovered: bool) -> Rgba {
    if hovered { color } else { color.with_alpha(STROKE_ALPHA) }
}

fn polar(angle_deg: f32, radius: f32) -> egui::Vec2 {
    let a = angle_deg.to_radians();
    egui::vec2(a.cos() * radius, a.sin() * radius)
}

/// Colors the shapes are drawn with. Cytosine differs from its toolbar swatch.
fn ink(kind: ElementKind) -> Rgba {
    match kind {
        ElementKind::Cytosine => Rgba::rgb(0xf5, 0x9e, 0x0b),
        other => other.accent(),
    }
}

fn phosphodiester_caption(language: Language) -> &'static str {
    match language {
        Language::English => "Phosphodiester",
        Language::Chinese => "磷酸二酯键",
    }
}

fn draw_deoxyribose(frame: &LocalFrame<'_>, hovered: bool) {
    let color = ink(ElementKind::Deoxyribose);
    let pentagon: Vec<egui::Vec2> = (0..5)
        .map(|i| polar(i as f32 * 72.0 - 90.0, DEOXYRIBOSE_RADIUS))
        .collect();
    frame.polygon(
        &pentagon,
        color.with_alpha(fill_alpha(hovered)),
        frame.stroke(2.0, color),
    );

    // Ring oxygen on top, then C1' at the right going clockwise. C5' is
    // labelled on the bent phosphodiester bond instead.
    frame.text(polar(-90.0, 28.0), "O", 11.0, LABEL_COLOR);
    for (angle, label) in [(-18.0, "C1'"), (54.0, "C2'"), (126.0, "C3'"), (198.0, "C4'")] {
        frame.text(polar(angle, 28.0), label, 11.0, LABEL_COLOR);
    }
}

fn draw_phosphate(frame: &LocalFrame<'_>, hovered: bool) {
    let color = ink(ElementKind::Phosphate);
    frame.circle(
        PHOSPHATE_RADIUS,
        color.with_alpha(fill_alpha(hovered)),
        frame.stroke(2.0, color),
    );
    frame.text(egui::Vec2::ZERO, "P", 20.0, color);
    for at in [egui::vec2(0.0, -20.0), egui::vec2(-17.0, 10.0), egui::vec2(17.0, 10.0)] {
        frame.text(at, "O", 10.0, LABEL_COLOR);
    }
}

fn rounded_box(half: egui::Vec2, radius: f32) -> Vec<egui::Vec2> {
    const STEPS: usize = 4;
    let corners = [
        (egui::vec2(half.x - radius, -half.y + radius), -90.0),
        (egui::vec2(half.x - radius, half.y - radius), 0.0),
        (egui::vec2(-half.x + radius, half.y - radius), 90.0),
        (egui::vec2(-half.x + radius, -half.y + radius), 180.0),
    ];
    let mut points = Vec::with_capacity(corners.len() * (STEPS + 1));
    for (center, start) in corners {
        for i in 0..=STEPS {
            let angle = start + 90.0 * i as f32 / STEPS as f32;
            points.push(center + polar(angle, radius));
        }
    }
    points
}

fn draw_base(frame: &LocalFrame<'_>, hovered: bool, language: Language) {
    let kind = frame.element.kind;
    let color = ink(kind);
    frame.polygon(
        &rounded_box(BASE_HALF_SIZE, 8.0),
        color.with_alpha(fill_alpha(hovered)),
        frame.stroke(2.0, color),
    );
    if let Some(letter) = kind.base_letter() {
        frame.text(egui::vec2(0.0, -5.0), letter, 24.0, color);
    }
    frame.text(egui::vec2(0.0, 15.0), kind.name(language), 10.0, LABEL_COLOR);
}

fn draw_hydrogen_bond(frame: &LocalFrame<'_>, hovered: bool) {
    let color = ink(ElementKind::HydrogenBond);
    let half = BOND_LENGTH / 2.0;
    frame.dashed_line(
        egui::vec2(-half, 0.0),
        egui::vec2(half, 0.0),
        frame.stroke(2.0, line_color(color, hovered)),
        5.0,
        5.0,
    );
    frame.text(egui::vec2(-BOND_LENGTH / 4.0, -10.0), "H", 12.0, color);
    frame.text(egui::vec2(BOND_LENGTH / 4.0, -10.0), "H", 12.0, color);
}

fn draw_phosphodiester_straight(frame: &LocalFrame<'_>, hovered: bool, language: Language) {
    let color = ink(ElementKind::PhosphodiesterStraight);
    frame.polyline(
        &geometry::straight_bond_segment(),
        frame.stroke(3.0, line_color(color, hovered)),
    );
    frame.text(egui::vec2(0.0, -20.0), phosphodiester_caption(language), 9.0, color);
}

fn draw_phosphodiester_bent(frame: &LocalFrame<'_>, hovered: bool, language: Language) {
    let color = ink(ElementKind::PhosphodiesterBent);
    let points = geometry::bent_bond_polyline();
    frame.polyline(&points, frame.stroke(3.0, line_color(color, hovered)));
    let elbow = points[1].to_vec2();
    frame.text(
        elbow + egui::vec2(0.0, 15.0),
        phosphodiester_caption(language),
        9.0,
        color,
    );
    frame.text_anchored(
        elbow + egui::vec2(6.0, 0.0),
        "C5'",
        10.0,
        LABEL_COLOR,
        egui::Align2::LEFT_CENTER,
    );
}

fn draw_chemical_bond(frame: &LocalFrame<'_>, hovered: bool) {
    let color = ink(ElementKind::ChemicalBond);
    let half = BOND_LENGTH / 2.0;
    frame.polyline(
        &[egui::pos2(-half, 0.0), egui::pos2(half, 0.0)],
        frame.stroke(2.0, line_color(color, hovered)),
    );
}

/// Places `galley` so that `anchor` sits at `at`, then rotates it about `at`.
fn draw_rotated_galley(
    painter: &egui::Painter,
    at: egui::Pos2,
    galley: std::sync::Arc<egui::Galley>,
    anchor: egui::Align2,
    color: egui::Color32,
    rotation: f32,
) {
    let rect = anchor.anchor_size(at, galley.size());
    if rotation.abs() <= f32::EPSILON {
        painter.galley(rect.min, galley, color);
        return;
    }
    let offset = geometry::rotate_vec2(rect.min - at, rotation);
    let mut shape = egui::Shape::galley(at + offset, galley, color);
    if let egui::Shape::Text(ref mut text) = shape {
        text.angle = rotation;
    }
    painter.add(shape);
}

fn draw_dashed_line(
    painter: &egui::Painter,
    a: egui::Pos2,
    b: egui::Pos2,
    stroke: egui::Stroke,
    dash_len: f32,
    gap_len: f32,
) {
    let v = b - a;
    let len = v.length();
    if len <= f32::EPSILON || dash_len <= f32::EPSILON {
        return;
    }
    let dir = v / len;
    let mut pos = 0.0;
    let mut drawing = true;
    while pos < len {
        let seg_len = if drawing { dash_len } else { gap_len };
        let next_pos = (pos + seg_len).min(len);
        if drawing {
            painter.line_segment([a + dir * pos, a + dir * next_pos], stroke);
        }
        pos = next_pos;
        drawing = !drawing;
    }
}
