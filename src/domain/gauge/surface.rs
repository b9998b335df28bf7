use crate::domain::errors::RenderingResult;

/// Minimal 2D drawing contract needed by a gauge scene. Implemented over
/// the canvas context in infrastructure and by in-memory recorders in
/// tests, so the geometry never needs a real canvas to be exercised.
pub trait DrawSurface {
    /// Pixel dimensions the scene is laid out against.
    fn size(&self) -> (f64, f64);

    fn clear(&mut self) -> RenderingResult<()>;

    fn stroke_arc(
        &mut self,
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: &str,
        line_width: f64,
    ) -> RenderingResult<()>;

    fn fill_triangle(&mut self, vertices: [(f64, f64); 3], color: &str) -> RenderingResult<()>;

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str) -> RenderingResult<()>;
}

/// Resolves drawing surfaces from gauge canvas identifiers.
pub trait SurfaceFactory {
    type Surface: DrawSurface;

    /// `None` when the identifier does not resolve to a usable surface.
    fn acquire(&self, canvas_id: &str) -> Option<Self::Surface>;
}
