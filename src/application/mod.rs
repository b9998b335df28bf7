pub mod dashboard;
pub mod plan;

pub use dashboard::Dashboard;
pub use plan::{GaugeUpdate, RenderPlan};
