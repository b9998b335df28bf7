use std::f64::consts::PI;

use strum::{Display, EnumIter};

use crate::domain::analysis::DisplayScore;

pub const ARC_LINE_WIDTH: f64 = 16.0;
pub const POINTER_LENGTH_RATIO: f64 = 0.9;
pub const POINTER_HALF_WIDTH: f64 = 6.0;
pub const HUB_RADIUS: f64 = 6.0;
pub const POINTER_COLOR: &str = "#444";
pub const HUB_COLOR: &str = "#888";

/// Placement of the half-donut inside a drawing surface. The dial sits on
/// the bottom edge with a 42px margin for the hub and pointer base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeLayout {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl GaugeLayout {
    pub fn for_surface(width: f64, height: f64) -> Self {
        Self {
            cx: width / 2.0,
            cy: height - 42.0,
            radius: width / 2.4,
        }
    }
}

/// Risk tiers, worst to best. Each owns a fifth of the semicircle and a
/// fixed color; declaration order is the drawing order of the band arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum RiskTier {
    #[strum(serialize = "Crítico")]
    Critico,
    #[strum(serialize = "Ruim")]
    Ruim,
    #[strum(serialize = "Neutro")]
    Neutro,
    #[strum(serialize = "Bom")]
    Bom,
    #[strum(serialize = "Ótimo")]
    Otimo,
}

impl RiskTier {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critico => "#e53935",
            Self::Ruim => "#f57c00",
            Self::Neutro => "#fbc02d",
            Self::Bom => "#9acb82",
            Self::Otimo => "#4caf50",
        }
    }

    /// Inclusive lower bound of the tier on the 0-100 scale.
    pub const fn lower_bound(self) -> u8 {
        match self {
            Self::Critico => 0,
            Self::Ruim => 20,
            Self::Neutro => 40,
            Self::Bom => 60,
            Self::Otimo => 80,
        }
    }

    pub fn for_score(score: DisplayScore) -> Self {
        match score.value() {
            80.. => Self::Otimo,
            60.. => Self::Bom,
            40.. => Self::Neutro,
            20.. => Self::Ruim,
            _ => Self::Critico,
        }
    }

    /// Start and end angles of the tier's band arc on the semicircle.
    pub fn band_angles(self) -> (f64, f64) {
        let from = f64::from(self.lower_bound()) / 100.0;
        (PI + from * PI, PI + (from + 0.2) * PI)
    }
}

/// Color associated with a score's tier.
pub fn score_color(score: DisplayScore) -> &'static str {
    RiskTier::for_score(score).color()
}

/// Angle of the pointer axis: `π` at score 0 sweeping to `2π` at 100.
pub fn pointer_angle(score: DisplayScore) -> f64 {
    PI + score.ratio() * PI
}

/// The three vertices of the pointer: the tip at `0.9·radius` along the
/// pointer axis, plus two base points offset perpendicular to it.
pub fn pointer_vertices(layout: GaugeLayout, score: DisplayScore) -> [(f64, f64); 3] {
    let angle = pointer_angle(score);
    let length = layout.radius * POINTER_LENGTH_RATIO;
    let tip = (
        layout.cx + length * angle.cos(),
        layout.cy + length * angle.sin(),
    );
    let base_left = (
        layout.cx + POINTER_HALF_WIDTH * (angle + PI / 2.0).cos(),
        layout.cy + POINTER_HALF_WIDTH * (angle + PI / 2.0).sin(),
    );
    let base_right = (
        layout.cx + POINTER_HALF_WIDTH * (angle - PI / 2.0).cos(),
        layout.cy + POINTER_HALF_WIDTH * (angle - PI / 2.0).sin(),
    );
    [tip, base_left, base_right]
}
