pub mod entities;
pub mod mapping;
pub mod value_objects;

pub use entities::{AnalysisSnapshot, BlockScore};
pub use mapping::map_block_key;
pub use value_objects::{DisplayScore, GaugeId, RawScore, StandardGauge};
