//! RGB colors, highlight blending and the stage color lookup.

use std::fmt;

////////////////////////////////////////////////////////////////////////////////
// #region ColorRgb

/// 8-bit RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRgb(pub u8, pub u8, pub u8);

impl ColorRgb {
    pub const WHITE: ColorRgb = ColorRgb(255, 255, 255);
    pub const BLACK: ColorRgb = ColorRgb(0, 0, 0);

    /// Channels scaled to `[0, 1]`.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0,
        )
    }
}

impl fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Interpolate `rgb` toward white: `255 + (c - 255) * alpha` per channel.
///
/// `alpha` is clamped to `[0, 1]`; `0` yields white, `1` yields `rgb`.
pub fn blend_toward_white(rgb: ColorRgb, alpha: f64) -> ColorRgb {
    let n_alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    let blend = |c: u8| (255.0 + (f64::from(c) - 255.0) * n_alpha).round() as u8;
    ColorRgb(blend(rgb.0), blend(rgb.1), blend(rgb.2))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StageLookup

/// Production stage used for report coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumStage {
    /// Stage explicitly marked as not applicable.
    NotApplicable,
    /// Preliminary work.
    Preliminary,
    /// Robotic work.
    Robotic,
    /// Post-processing.
    PostProcess,
    /// Externally produced.
    External,
    /// Empty or unrecognized tag.
    Unclassified,
}

/// Substring markers in match priority order; earlier entries win.
const TUP_STAGE_MARKERS: [(&str, EnumStage); 5] = [
    ("N/A", EnumStage::NotApplicable),
    ("PRE", EnumStage::Preliminary),
    ("ROBOT", EnumStage::Robotic),
    ("POST", EnumStage::PostProcess),
    ("EXTERNO", EnumStage::External),
];

impl EnumStage {
    /// Stages listed in the schedule legend, left to right.
    pub const LEGEND: [EnumStage; 4] = [
        EnumStage::Preliminary,
        EnumStage::Robotic,
        EnumStage::PostProcess,
        EnumStage::External,
    ];

    pub fn color(self) -> ColorRgb {
        match self {
            Self::NotApplicable => ColorRgb(156, 163, 175),
            Self::Preliminary => ColorRgb(59, 130, 246),
            Self::Robotic => ColorRgb(16, 185, 129),
            Self::PostProcess => ColorRgb(139, 92, 246),
            Self::External => ColorRgb(245, 158, 11),
            Self::Unclassified => ColorRgb(107, 114, 128),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotApplicable => "N/A",
            Self::Preliminary => "Preliminar",
            Self::Robotic => "Robot",
            Self::PostProcess => "Post-proceso",
            Self::External => "Externo",
            Self::Unclassified => "Sin etapa",
        }
    }
}

/// Classify a stage tag by case-insensitive substring match.
pub fn derive_stage(tag: &str) -> EnumStage {
    if tag.is_empty() {
        return EnumStage::Unclassified;
    }
    let c_tag = tag.to_uppercase();
    TUP_STAGE_MARKERS
        .iter()
        .find(|(c_marker, _)| c_tag.contains(c_marker))
        .map_or(EnumStage::Unclassified, |(_, stage)| *stage)
}

/// Color for a stage tag; neutral gray when empty or unmatched.
pub fn stage_color(tag: &str) -> ColorRgb {
    derive_stage(tag).color()
}

/// Card accent: red family, amber family when `flagged`.
pub fn derive_card_accent(flagged: bool) -> ColorRgb {
    if flagged {
        ColorRgb(217, 119, 6)
    } else {
        ColorRgb(220, 38, 38)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
