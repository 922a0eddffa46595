//! Point containment per element kind, plus the local-frame transforms shared
//! by hit-testing and rendering.
//!
//! Circles and boxes are tested at the element position in model axes and
//! ignore rotation and scale. Only the two phosphodiester kinds map the point
//! back into the element's local frame first.

use eframe::egui;

use crate::model::{Element, ElementKind};

pub const DEOXYRIBOSE_RADIUS: f32 = 40.0;
pub const PHOSPHATE_RADIUS: f32 = 30.0;
pub const BASE_HALF_SIZE: egui::Vec2 = egui::Vec2::new(35.0, 25.0);
pub const BOND_HALF_SIZE: egui::Vec2 = egui::Vec2::new(40.0, 5.0);
/// Span of every bond shape along its local x axis.
pub const BOND_LENGTH: f32 = 80.0;
/// Max distance from a phosphodiester stroke that still counts as a hit.
pub const LINE_HIT_TOLERANCE: f32 = 6.0;

pub fn rotate_vec2(v: egui::Vec2, angle: f32) -> egui::Vec2 {
    let sin = angle.sin();
    let cos = angle.cos();
    egui::vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Maps a point in the element's local frame to model space:
/// scale, then rotate, then translate.
pub fn local_to_model(element: &Element, local: egui::Vec2) -> egui::Pos2 {
    let scaled = local * element.scale();
    element.pos.to_pos2() + rotate_vec2(scaled, element.rotation.to_radians())
}

/// Inverse of [`local_to_model`].
pub fn model_to_local(element: &Element, p: egui::Pos2) -> egui::Vec2 {
    let d = p - element.pos.to_pos2();
    rotate_vec2(d, -element.rotation.to_radians()) / element.scale()
}

/// The straight phosphodiester stroke, drawn with a slight downward slope.
pub fn straight_bond_segment() -> [egui::Pos2; 2] {
    [
        egui::pos2(BOND_LENGTH / 2.0, -BOND_LENGTH / 10.0),
        egui::pos2(-BOND_LENGTH / 2.0, BOND_LENGTH / 10.0),
    ]
}

/// The bent phosphodiester polyline: a 45° leg down to the elbow, then flat.
pub fn bent_bond_polyline() -> [egui::Pos2; 3] {
    [
        egui::pos2(-BOND_LENGTH / 2.0, 0.0),
        egui::pos2(0.0, BOND_LENGTH / 2.0),
        egui::pos2(BOND_LENGTH / 2.0, BOND_LENGTH / 2.0),
    ]
}

pub fn point_to_segment_distance(p: egui::Pos2, a: egui::Pos2, b: egui::Pos2) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let ab_len2 = ab.x * ab.x + ab.y * ab.y;
    if ab_len2 <= f32::EPSILON {
        return (p - a).length();
    }
    let t = (ap.x * ab.x + ap.y * ab.y) / ab_len2;
    let t = t.clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).length()
}

pub fn hit_test(p: egui::Pos2, element: &Element) -> bool {
    let d = p - element.pos.to_pos2();
    match element.kind {
        ElementKind::Deoxyribose => d.length() < DEOXYRIBOSE_RADIUS,
        ElementKind::Phosphate => d.length() < PHOSPHATE_RADIUS,
        ElementKind::Adenine
        | ElementKind::Thymine
        | ElementKind::Guanine
        | ElementKind::Cytosine => inside_half_extent(d, BASE_HALF_SIZE),
        ElementKind::HydrogenBond | ElementKind::ChemicalBond => {
            inside_half_extent(d, BOND_HALF_SIZE)
        }
        ElementKind::PhosphodiesterStraight => {
            let local = model_to_local(element, p).to_pos2();
            let [a, b] = straight_bond_segment();
            point_to_segment_distance(local, a, b) <= LINE_HIT_TOLERANCE
        }
        ElementKind::PhosphodiesterBent => {
            let local = model_to_local(element, p).to_pos2();
            let [a, elbow, b] = bent_bond_polyline();
            let d = point_to_segment_distance(local, a, elbow)
                .min(point_to_segment_distance(local, elbow, b));
            d <= LINE_HIT_TOLERANCE
        }
    }
}

fn inside_half_extent(d: egui::Vec2, half: egui::Vec2) -> bool {
    d.x.abs() < half.x && d.y.abs() < half.y
}

/// Index of the topmost element containing `p`; later elements win.
pub fn topmost_hit(elements: &[Element], p: egui::Pos2) -> Option<usize> {
    elements.iter().rposition(|e| hit_test(p, e))
}
