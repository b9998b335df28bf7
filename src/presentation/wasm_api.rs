use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::Dashboard;
use crate::domain::logging::{LogComponent, get_logger};
use crate::event_utils;
use crate::infrastructure::http::AnalysisApiClient;

/// JavaScript-facing dashboard handle. Bridge only - all behavior lives in
/// the application layer.
#[wasm_bindgen]
pub struct DashboardApp {
    inner: Rc<Dashboard>,
    resize_listener: RefCell<Option<EventListener>>,
}

#[wasm_bindgen]
impl DashboardApp {
    /// Build a dashboard against the default endpoint, or `endpoint` when
    /// given.
    #[wasm_bindgen(constructor)]
    pub fn new(endpoint: Option<String>) -> DashboardApp {
        let client = match endpoint {
            Some(url) => AnalysisApiClient::with_endpoint(url),
            None => AnalysisApiClient::new(),
        };
        DashboardApp {
            inner: Rc::new(Dashboard::new(client)),
            resize_listener: RefCell::new(None),
        }
    }

    /// Draw every gauge at zero, attach the resize hook and load live
    /// data.
    #[wasm_bindgen(js_name = start)]
    pub fn start(&self) -> Promise {
        get_logger().info(
            LogComponent::Presentation("DashboardApp"),
            "🚀 Dashboard starting...",
        );

        self.inner.init_gauges();

        let dashboard = Rc::clone(&self.inner);
        self.resize_listener
            .replace(Some(event_utils::on_window_resize(move || {
                dashboard.redraw_gauges()
            })));

        self.load_data()
    }

    /// Fetch and render the current snapshot.
    #[wasm_bindgen(js_name = loadData)]
    pub fn load_data(&self) -> Promise {
        let dashboard = Rc::clone(&self.inner);
        future_to_promise(async move {
            dashboard.load(false).await?;
            Ok(JsValue::from_str("loaded"))
        })
    }

    /// Refresh with the backend cache bypassed - the `btnForceUpdate`
    /// action. Errors surface on the button and status line, so the
    /// promise always resolves.
    #[wasm_bindgen(js_name = forceUpdate)]
    pub fn force_update(&self) -> Promise {
        let dashboard = Rc::clone(&self.inner);
        future_to_promise(async move {
            dashboard.force_update().await;
            Ok(JsValue::from_str("refreshed"))
        })
    }

    /// Draw one gauge directly; invalid scores are clamped.
    #[wasm_bindgen(js_name = renderGauge)]
    pub fn render_gauge(&self, canvas_id: &str, score: f64) {
        self.inner.render_gauge(canvas_id, score);
    }
}
