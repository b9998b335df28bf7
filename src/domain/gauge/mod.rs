pub mod geometry;
pub mod scene;
pub mod surface;

pub use geometry::{GaugeLayout, RiskTier};
pub use scene::{DrawCommand, GaugeScene};
pub use surface::{DrawSurface, SurfaceFactory};
