use strum::IntoEnumIterator;

use crate::domain::analysis::DisplayScore;
use crate::domain::errors::RenderingResult;

use super::geometry::{self, GaugeLayout, RiskTier};
use super::surface::DrawSurface;

/// One primitive drawing operation of a gauge scene.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    StrokeArc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: &'static str,
        line_width: f64,
    },
    FillTriangle {
        vertices: [(f64, f64); 3],
        color: &'static str,
    },
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: &'static str,
    },
}

/// Precomputed draw list for one gauge, independent of any canvas API:
/// five band arcs, the pointer, then the hub on top of the pointer base.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeScene {
    commands: Vec<DrawCommand>,
}

impl GaugeScene {
    pub fn build(width: f64, height: f64, score: DisplayScore) -> Self {
        let layout = GaugeLayout::for_surface(width, height);
        let mut commands = Vec::with_capacity(7);

        for tier in RiskTier::iter() {
            let (start_angle, end_angle) = tier.band_angles();
            commands.push(DrawCommand::StrokeArc {
                cx: layout.cx,
                cy: layout.cy,
                radius: layout.radius,
                start_angle,
                end_angle,
                color: tier.color(),
                line_width: geometry::ARC_LINE_WIDTH,
            });
        }

        commands.push(DrawCommand::FillTriangle {
            vertices: geometry::pointer_vertices(layout, score),
            color: geometry::POINTER_COLOR,
        });

        commands.push(DrawCommand::FillCircle {
            cx: layout.cx,
            cy: layout.cy,
            radius: geometry::HUB_RADIUS,
            color: geometry::HUB_COLOR,
        });

        Self { commands }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Replay the scene onto a drawing surface, stopping at the first
    /// failing primitive.
    pub fn replay(&self, surface: &mut dyn DrawSurface) -> RenderingResult<()> {
        for command in &self.commands {
            match *command {
                DrawCommand::StrokeArc {
                    cx,
                    cy,
                    radius,
                    start_angle,
                    end_angle,
                    color,
                    line_width,
                } => surface.stroke_arc(cx, cy, radius, start_angle, end_angle, color, line_width)?,
                DrawCommand::FillTriangle { vertices, color } => {
                    surface.fill_triangle(vertices, color)?
                }
                DrawCommand::FillCircle {
                    cx,
                    cy,
                    radius,
                    color,
                } => surface.fill_circle(cx, cy, radius, color)?,
            }
        }
        Ok(())
    }
}
