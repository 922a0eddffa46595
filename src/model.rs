use eframe::egui;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseKindError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_pos2(p: egui::Pos2) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

/// Which label set the toolbar and shape captions use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Chinese,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of DNA components that can be placed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Deoxyribose,
    Phosphate,
    Adenine,
    Thymine,
    Guanine,
    Cytosine,
    HydrogenBond,
    PhosphodiesterStraight,
    PhosphodiesterBent,
    ChemicalBond,
}

impl ElementKind {
    /// Toolbar order.
    pub const ALL: [ElementKind; 10] = [
        ElementKind::Deoxyribose,
        ElementKind::Phosphate,
        ElementKind::Adenine,
        ElementKind::Thymine,
        ElementKind::Guanine,
        ElementKind::Cytosine,
        ElementKind::HydrogenBond,
        ElementKind::PhosphodiesterStraight,
        ElementKind::PhosphodiesterBent,
        ElementKind::ChemicalBond,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Deoxyribose => "deoxyribose",
            ElementKind::Phosphate => "phosphate",
            ElementKind::Adenine => "adenine",
            ElementKind::Thymine => "thymine",
            ElementKind::Guanine => "guanine",
            ElementKind::Cytosine => "cytosine",
            ElementKind::HydrogenBond => "hydrogen-bond",
            ElementKind::PhosphodiesterStraight => "phosphodiester-straight",
            ElementKind::PhosphodiesterBent => "phosphodiester-bent",
            ElementKind::ChemicalBond => "chemical-bond",
        }
    }

    /// Single-letter code drawn inside a base box.
    pub fn base_letter(self) -> Option<&'static str> {
        match self {
            ElementKind::Adenine => Some("A"),
            ElementKind::Thymine => Some("T"),
            ElementKind::Guanine => Some("G"),
            ElementKind::Cytosine => Some("C"),
            _ => None,
        }
    }

    /// Short name used on the canvas and in the placement hint.
    pub fn name(self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                ElementKind::Deoxyribose => "Deoxyribose",
                ElementKind::Phosphate => "Phosphate group",
                ElementKind::Adenine => "Adenine",
                ElementKind::Thymine => "Thymine",
                ElementKind::Guanine => "Guanine",
                ElementKind::Cytosine => "Cytosine",
                ElementKind::HydrogenBond => "Hydrogen bond",
                ElementKind::PhosphodiesterStraight => "Phosphodiester bond (straight)",
                ElementKind::PhosphodiesterBent => "Phosphodiester bond (bent)",
                ElementKind::ChemicalBond => "Chemical bond",
            },
            Language::Chinese => match self {
                ElementKind::Deoxyribose => "脱氧核糖",
                ElementKind::Phosphate => "磷酸基团",
                ElementKind::Adenine => "腺嘌呤",
                ElementKind::Thymine => "胸腺嘧啶",
                ElementKind::Guanine => "鸟嘌呤",
                ElementKind::Cytosine => "胞嘧啶",
                ElementKind::HydrogenBond => "氢键",
                ElementKind::PhosphodiesterStraight => "磷酸二酯键（直线）",
                ElementKind::PhosphodiesterBent => "磷酸二酯键（弯曲）",
                ElementKind::ChemicalBond => "化学键",
            },
        }
    }

    /// Toolbar label; bases carry their letter.
    pub fn label(self, language: Language) -> String {
        match self.base_letter() {
            Some(letter) => format!("{} ({letter})", self.name(language)),
            None => self.name(language).to_string(),
        }
    }

    pub fn description(self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                ElementKind::Deoxyribose => {
                    "Five-carbon sugar (pentose) forming the DNA backbone. C5' links to the phosphate group"
                }
                ElementKind::Phosphate => {
                    "Phosphate group (PO₄³⁻), links sugar molecules into the backbone"
                }
                ElementKind::Adenine => "Purine base, pairs with thymine (2 hydrogen bonds)",
                ElementKind::Thymine => "Pyrimidine base, pairs with adenine (2 hydrogen bonds)",
                ElementKind::Guanine => "Purine base, pairs with cytosine (3 hydrogen bonds)",
                ElementKind::Cytosine => "Pyrimidine base, pairs with guanine (3 hydrogen bonds)",
                ElementKind::HydrogenBond => "Weak bond between base pairs (dashed)",
                ElementKind::PhosphodiesterStraight | ElementKind::PhosphodiesterBent => {
                    "Covalent bond linking nucleotides"
                }
                ElementKind::ChemicalBond => "Ordinary covalent bond (solid)",
            },
            Language::Chinese => match self {
                ElementKind::Deoxyribose => "五碳糖（戊糖），形成DNA骨架。C5'连接磷酸基团",
                ElementKind::Phosphate => "磷酸基团（PO₄³⁻），连接糖分子形成骨架",
                ElementKind::Adenine => "嘌呤碱基，与胸腺嘧啶配对（2个氢键）",
                ElementKind::Thymine => "嘧啶碱基，与腺嘌呤配对（2个氢键）",
                ElementKind::Guanine => "嘌呤碱基，与胞嘧啶配对（3个氢键）",
                ElementKind::Cytosine => "嘧啶碱基，与鸟嘌呤配对（3个氢键）",
                ElementKind::HydrogenBond => "碱基对之间的弱键（虚线）",
                ElementKind::PhosphodiesterStraight | ElementKind::PhosphodiesterBent => {
                    "连接核苷酸的共价键"
                }
                ElementKind::ChemicalBond => "普通共价键（实线）",
            },
        }
    }

    /// Toolbar swatch color.
    pub fn accent(self) -> Rgba {
        match self {
            ElementKind::Deoxyribose => Rgba::rgb(0x3b, 0x82, 0xf6),
            ElementKind::Phosphate => Rgba::rgb(0xf5, 0x9e, 0x0b),
            ElementKind::Adenine => Rgba::rgb(0x10, 0xb9, 0x81),
            ElementKind::Thymine => Rgba::rgb(0xef, 0x44, 0x44),
            ElementKind::Guanine => Rgba::rgb(0x8b, 0x5c, 0xf6),
            ElementKind::Cytosine
            | ElementKind::PhosphodiesterStraight
            | ElementKind::PhosphodiesterBent => Rgba::rgb(0xec, 0x48, 0x99),
            ElementKind::HydrogenBond => Rgba::rgb(0x06, 0xb6, 0xd4),
            ElementKind::ChemicalBond => Rgba::rgb(0xa3, 0xa3, 0xa3),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ElementKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|k| k.tag() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub pos: Point,
    /// Degrees, clockwise on screen.
    pub rotation: f32,
    pub scale: Option<f32>,
}

impl Element {
    pub fn new(id: ElementId, kind: ElementKind, pos: Point) -> Self {
        Self {
            id,
            kind,
            pos,
            rotation: 0.0,
            scale: Some(1.0),
        }
    }

    /// Absent or non-positive scale counts as 1.
    pub fn scale(&self) -> f32 {
        match self.scale {
            Some(s) if s > 0.0 => s,
            _ => 1.0,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{}-{}", self.kind.tag(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip_through_from_str() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.tag().parse::<ElementKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "uracil".parse::<ElementKind>().unwrap_err();
        assert_eq!(err, ParseKindError("uracil".to_string()));
    }

    #[test]
    fn missing_or_degenerate_scale_defaults_to_one() {
        let mut e = Element::new(ElementId(1), ElementKind::Phosphate, Point::new(0.0, 0.0));
        e.scale = None;
        assert_eq!(e.scale(), 1.0);
        e.scale = Some(0.0);
        assert_eq!(e.scale(), 1.0);
        e.scale = Some(2.5);
        assert_eq!(e.scale(), 2.5);
    }

    #[test]
    fn base_labels_carry_letter() {
        assert_eq!(ElementKind::Guanine.label(Language::English), "Guanine (G)");
        assert_eq!(ElementKind::Adenine.label(Language::Chinese), "腺嘌呤 (A)");
        assert_eq!(ElementKind::Phosphate.label(Language::English), "Phosphate group");
    }
}
