use crate::domain::analysis::{
    AnalysisSnapshot, DisplayScore, GaugeId, StandardGauge, map_block_key,
};

/// One gauge's share of a render pass: where to draw, what score, and the
/// text that goes next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeUpdate {
    pub gauge: GaugeId,
    pub score: DisplayScore,
    pub label: String,
}

/// Everything a snapshot changes on screen, computed without touching the
/// DOM. The overall gauge comes first, then the category blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub gauges: Vec<GaugeUpdate>,
    pub status: String,
    pub subtitle: Option<String>,
}

impl RenderPlan {
    pub fn from_snapshot(snapshot: &AnalysisSnapshot) -> Self {
        let overall = snapshot.score.to_display();

        let mut gauges = vec![GaugeUpdate {
            gauge: GaugeId::from(StandardGauge::Geral),
            score: overall,
            label: format!("Score: {} - {}", overall, snapshot.classification),
        }];

        for block in &snapshot.blocks {
            // blocks without a consolidated score have nothing to show
            let Some(raw) = block.score else { continue };
            let score = raw.to_display();
            let classification = block.classification.clone().unwrap_or_default();
            gauges.push(GaugeUpdate {
                gauge: map_block_key(&block.key),
                score,
                label: format!("Score: {} - {}", score, classification),
            });
        }

        let subtitle = match (&snapshot.kelly, &snapshot.action) {
            (Some(kelly), Some(action)) => Some(format!("Kelly: {} | {}", kelly, action)),
            _ => None,
        };

        Self {
            gauges,
            status: format!("✅ Dados carregados - Score: {}", overall),
            subtitle,
        }
    }
}
