use std::cell::RefCell;

use strum::IntoEnumIterator;

use crate::domain::analysis::{GaugeId, StandardGauge};
use crate::domain::errors::DashboardError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::AnalysisApiClient;
use crate::infrastructure::rendering::{CanvasSurfaceFactory, GaugeRenderer};
use crate::infrastructure::ui::DomNotifier;

use super::plan::RenderPlan;

pub const LOADING_STATUS: &str = "🔄 Carregando dados...";

/// The dashboard coordinator: one per page, owning the API client, the
/// gauge renderer and the DOM notifier. Constructed once at startup and
/// handed to event handlers explicitly - there is no ambient singleton.
pub struct Dashboard {
    client: AnalysisApiClient,
    renderer: RefCell<GaugeRenderer<CanvasSurfaceFactory>>,
    notifier: DomNotifier,
}

impl Dashboard {
    pub fn new(client: AnalysisApiClient) -> Self {
        Self {
            client,
            renderer: RefCell::new(GaugeRenderer::new(CanvasSurfaceFactory::new())),
            notifier: DomNotifier::new(),
        }
    }

    /// Fetch one snapshot and bring every gauge and label up to date. On
    /// failure only the status line changes; gauges keep their last state.
    pub async fn load(&self, force_refresh: bool) -> Result<(), DashboardError> {
        self.notifier.update_status(LOADING_STATUS);

        match self.client.fetch_analysis(force_refresh).await {
            Ok(snapshot) => {
                self.apply(&RenderPlan::from_snapshot(&snapshot));
                Ok(())
            }
            Err(error) => {
                get_logger().error(
                    LogComponent::Application("Dashboard"),
                    &format!("❌ Load failed: {}", error),
                );
                self.notifier
                    .update_status(&format!("❌ Erro: {}", error.user_message()));
                Err(error)
            }
        }
    }

    fn apply(&self, plan: &RenderPlan) {
        let mut renderer = self.renderer.borrow_mut();
        for update in &plan.gauges {
            self.notifier.update_gauge_label(&update.gauge, &update.label);
            renderer.render(
                &update.gauge.canvas_element_id(),
                f64::from(update.score.value()),
            );
        }
        self.notifier.update_status(&plan.status);
        if let Some(subtitle) = &plan.subtitle {
            self.notifier.update_subtitle(subtitle);
        }
    }

    /// Draw every standard gauge at zero while the first fetch is in
    /// flight. Canvases missing from the template are skipped.
    pub fn init_gauges(&self) {
        let mut renderer = self.renderer.borrow_mut();
        for gauge in StandardGauge::iter() {
            renderer.render(&GaugeId::from(gauge).canvas_element_id(), 0.0);
        }
    }

    /// Redraw every bound gauge at its last score (resize path).
    pub fn redraw_gauges(&self) {
        self.renderer.borrow_mut().redraw_all();
    }

    /// Ad-hoc render of one gauge; invalid scores are clamped downstream.
    pub fn render_gauge(&self, canvas_id: &str, score: f64) {
        self.renderer.borrow_mut().render(canvas_id, score);
    }

    /// User-triggered refresh with the cache-bypass flag and button
    /// feedback. Failures keep the button disabled behind an error label
    /// for a fixed window before it reverts.
    pub async fn force_update(&self) {
        self.notifier.refresh_started();
        match self.load(true).await {
            Ok(()) => self.notifier.refresh_finished(),
            Err(_) => self.notifier.refresh_failed(),
        }
    }
}
