use std::collections::HashMap;

use crate::domain::analysis::DisplayScore;
use crate::domain::gauge::{DrawSurface, GaugeScene, SurfaceFactory};
use crate::domain::logging::{LogComponent, get_logger};

/// Last-drawn state of one gauge. Replaced wholesale on redraw, never
/// mutated, so the previous surface binding can't leak past a render.
pub struct GaugeState<S> {
    score: DisplayScore,
    #[allow(dead_code)]
    surface: S,
}

impl<S> GaugeState<S> {
    pub fn score(&self) -> DisplayScore {
        self.score
    }
}

/// Draws gauge scenes onto surfaces resolved by the injected factory and
/// tracks exactly one binding per canvas identifier.
pub struct GaugeRenderer<F: SurfaceFactory> {
    factory: F,
    bound: HashMap<String, GaugeState<F::Surface>>,
}

impl<F: SurfaceFactory> GaugeRenderer<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            bound: HashMap::new(),
        }
    }

    /// Draw `score` on the canvas `canvas_id`, releasing any surface
    /// already bound there first. Missing canvases and drawing failures
    /// are logged per gauge and never propagated.
    pub fn render(&mut self, canvas_id: &str, score: f64) {
        if !(0.0..=100.0).contains(&score) {
            get_logger().warn(
                LogComponent::Infrastructure("GaugeRenderer"),
                &format!("Invalid score {} for {}, clamping", score, canvas_id),
            );
        }
        let score = DisplayScore::new(score);

        // release before re-acquiring: one binding per canvas at all times
        self.bound.remove(canvas_id);

        let Some(mut surface) = self.factory.acquire(canvas_id) else {
            get_logger().warn(
                LogComponent::Infrastructure("GaugeRenderer"),
                &format!("Canvas not found: {}", canvas_id),
            );
            return;
        };

        let (width, height) = surface.size();
        let scene = GaugeScene::build(width, height, score);

        let drawn = surface.clear().and_then(|_| scene.replay(&mut surface));
        match drawn {
            Ok(()) => {
                self.bound
                    .insert(canvas_id.to_string(), GaugeState { score, surface });
                get_logger().debug(
                    LogComponent::Infrastructure("GaugeRenderer"),
                    &format!("✅ Gauge {} rendered: {}", canvas_id, score),
                );
            }
            Err(error) => {
                get_logger().error(
                    LogComponent::Infrastructure("GaugeRenderer"),
                    &format!("❌ Failed to render gauge {}: {}", canvas_id, error),
                );
            }
        }
    }

    /// Redraw every bound gauge at its last score (resize path).
    pub fn redraw_all(&mut self) {
        let bound: Vec<(String, DisplayScore)> = self
            .bound
            .iter()
            .map(|(canvas_id, state)| (canvas_id.clone(), state.score()))
            .collect();
        for (canvas_id, score) in bound {
            self.render(&canvas_id, f64::from(score.value()));
        }
    }

    /// Drop the binding for one canvas, if any.
    pub fn release(&mut self, canvas_id: &str) -> bool {
        self.bound.remove(canvas_id).is_some()
    }

    /// Drop every binding.
    pub fn release_all(&mut self) {
        self.bound.clear();
    }

    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    pub fn bound_score(&self, canvas_id: &str) -> Option<DisplayScore> {
        self.bound.get(canvas_id).map(GaugeState::score)
    }
}
