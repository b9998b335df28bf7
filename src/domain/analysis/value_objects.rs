use derive_more::{Display, From, Into};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter};

/// Value Object - raw analysis score as the API reports it, nominal 0-10.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into)]
pub struct RawScore(f64);

impl RawScore {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Gauge-facing transform: `round(score * 10)`, clamped to 0-100.
    pub fn to_display(&self) -> DisplayScore {
        DisplayScore::new(self.0 * 10.0)
    }
}

/// Value Object - integer gauge score, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct DisplayScore(u8);

impl DisplayScore {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Coerce an arbitrary number onto the gauge scale. NaN counts as 0;
    /// everything else is rounded and clamped.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Position on the semicircle as a fraction in [0, 1].
    pub fn ratio(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

/// Value Object - the five gauges of the dashboard template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum StandardGauge {
    Geral,
    Tecnico,
    Ciclos,
    Momentum,
    Riscos,
}

/// Value Object - open gauge identifier. Category keys without a fixed
/// translation pass through as their own identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct GaugeId(String);

impl GaugeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Id of the `<canvas>` this gauge draws on.
    pub fn canvas_element_id(&self) -> String {
        format!("gaugeChart_{}", self.0)
    }

    /// Id of the text label updated alongside the gauge.
    pub fn label_element_id(&self) -> String {
        format!("classificacao_{}", self.0)
    }
}

impl From<StandardGauge> for GaugeId {
    fn from(gauge: StandardGauge) -> Self {
        Self(gauge.as_ref().to_string())
    }
}

impl From<&str> for GaugeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
