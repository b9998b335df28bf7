use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::analysis::{AnalysisSnapshot, BlockScore, RawScore};
use crate::domain::errors::DashboardError;

/// Message used when the API signals a failure without saying why.
pub const FALLBACK_API_ERROR: &str = "Erro na API";

/// Wire shape of `GET /api/v1/analise-btc`. Error payloads omit the score
/// fields, so everything defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub score_final: f64,
    #[serde(default)]
    pub classificacao: String,
    pub kelly: Option<String>,
    pub acao: Option<String>,
    #[serde(default)]
    pub blocos: HashMap<String, BlocoResponse>,
    #[serde(default)]
    pub error: bool,
    pub erro: Option<String>,
}

/// DTO for one analysis category inside `blocos`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlocoResponse {
    pub score_consolidado: Option<f64>,
    pub classificacao_consolidada: Option<String>,
}

impl AnalysisResponse {
    /// Convert into the domain snapshot. An API-signaled error turns the
    /// whole response into a failure carrying the human-readable message.
    /// Blocks come out sorted by key for deterministic presentation.
    pub fn into_snapshot(self) -> Result<AnalysisSnapshot, DashboardError> {
        if self.error {
            return Err(DashboardError::Api(
                self.erro.unwrap_or_else(|| FALLBACK_API_ERROR.to_string()),
            ));
        }

        let mut blocks: Vec<BlockScore> = self
            .blocos
            .into_iter()
            .map(|(key, bloco)| BlockScore {
                key,
                score: bloco.score_consolidado.map(RawScore::from),
                classification: bloco.classificacao_consolidada,
            })
            .collect();
        blocks.sort_by(|a, b| a.key.cmp(&b.key));

        Ok(AnalysisSnapshot {
            score: RawScore::from(self.score_final),
            classification: self.classificacao,
            kelly: self.kelly,
            action: self.acao,
            blocks,
        })
    }
}
