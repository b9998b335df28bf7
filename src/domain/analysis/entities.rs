use super::value_objects::RawScore;

/// Domain entity - one decoded analysis snapshot. Immutable once received;
/// a new fetch produces a new snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSnapshot {
    pub score: RawScore,
    pub classification: String,
    pub kelly: Option<String>,
    pub action: Option<String>,
    pub blocks: Vec<BlockScore>,
}

impl AnalysisSnapshot {
    pub fn block(&self, key: &str) -> Option<&BlockScore> {
        self.blocks.iter().find(|block| block.key == key)
    }
}

/// Domain entity - consolidated sub-score of one analysis category.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockScore {
    pub key: String,
    pub score: Option<RawScore>,
    pub classification: Option<String>,
}
