use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::errors::{DashboardError, RenderingResult};
use crate::domain::gauge::{DrawSurface, SurfaceFactory};
use crate::domain::logging::LogComponent;
use crate::log_error;

/// `DrawSurface` over a real `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Resolve a canvas element by id. `Ok(None)` when the element is
    /// absent from the page, `Err` when it exists but yields no usable 2D
    /// context.
    pub fn from_element_id(canvas_id: &str) -> RenderingResult<Option<Self>> {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return Err(DashboardError::Dom("document not available".to_string()));
        };

        let Some(element) = document.get_element_by_id(canvas_id) else {
            return Ok(None);
        };

        let canvas: HtmlCanvasElement = element
            .dyn_into()
            .map_err(|_| DashboardError::Dom(format!("{} is not a canvas element", canvas_id)))?;

        let context = canvas
            .get_context("2d")
            .map_err(|_| DashboardError::Rendering("failed to get 2D context".to_string()))?
            .ok_or_else(|| DashboardError::Rendering("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DashboardError::Rendering("failed to cast to 2D context".to_string()))?;

        Ok(Some(Self { canvas, context }))
    }
}

fn draw_failure(error: JsValue) -> DashboardError {
    DashboardError::Rendering(format!("{:?}", error))
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    fn clear(&mut self) -> RenderingResult<()> {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn stroke_arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: &str,
        line_width: f64,
    ) -> RenderingResult<()> {
        self.context.begin_path();
        self.context
            .arc(cx, cy, radius, start_angle, end_angle)
            .map_err(draw_failure)?;
        self.context.set_stroke_style(&JsValue::from(color));
        self.context.set_line_width(line_width);
        self.context.stroke();
        Ok(())
    }

    fn fill_triangle(&mut self, vertices: [(f64, f64); 3], color: &str) -> RenderingResult<()> {
        let [tip, base_left, base_right] = vertices;
        self.context.begin_path();
        self.context.move_to(tip.0, tip.1);
        self.context.line_to(base_left.0, base_left.1);
        self.context.line_to(base_right.0, base_right.1);
        self.context.close_path();
        self.context.set_fill_style(&JsValue::from(color));
        self.context.fill();
        Ok(())
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str) -> RenderingResult<()> {
        self.context.begin_path();
        self.context
            .arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI)
            .map_err(draw_failure)?;
        self.context.set_fill_style(&JsValue::from(color));
        self.context.fill();
        Ok(())
    }
}

/// Factory resolving canvases from the live document.
#[derive(Clone, Copy, Default)]
pub struct CanvasSurfaceFactory;

impl CanvasSurfaceFactory {
    pub fn new() -> Self {
        Self
    }
}

impl SurfaceFactory for CanvasSurfaceFactory {
    type Surface = CanvasSurface;

    fn acquire(&self, canvas_id: &str) -> Option<CanvasSurface> {
        match CanvasSurface::from_element_id(canvas_id) {
            Ok(surface) => surface,
            Err(error) => {
                log_error!(
                    LogComponent::Infrastructure("CanvasSurface"),
                    "Cannot use canvas {}: {}",
                    canvas_id,
                    error
                );
                None
            }
        }
    }
}
