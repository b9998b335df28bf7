pub mod canvas_surface;
pub mod gauge_renderer;

pub use canvas_surface::{CanvasSurface, CanvasSurfaceFactory};
pub use gauge_renderer::{GaugeRenderer, GaugeState};
