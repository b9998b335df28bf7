pub mod dto;
pub mod http;
pub mod rendering;
pub mod services;

/// UI interaction services (separate from domain logic)
pub mod ui {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlButtonElement};

    use crate::domain::analysis::GaugeId;
    use crate::domain::logging::{LogComponent, get_logger};

    pub const STATUS_ELEMENT_ID: &str = "statusInfo";
    pub const SUBTITLE_ELEMENT_ID: &str = "subtitle";
    pub const REFRESH_BUTTON_ID: &str = "btnForceUpdate";

    const BUTTON_IDLE_LABEL: &str = "🔄 Atualizar Dados";
    const BUTTON_BUSY_LABEL: &str = "⏳ Atualizando...";
    const BUTTON_ERROR_LABEL: &str = "❌ Erro";
    const BUTTON_ERROR_REVERT_MS: u32 = 3_000;

    /// Updates the dashboard template's text elements. Elements missing
    /// from the page are skipped so a trimmed template keeps working.
    #[derive(Clone, Default)]
    pub struct DomNotifier;

    impl DomNotifier {
        pub fn new() -> Self {
            Self
        }

        fn document(&self) -> Option<Document> {
            web_sys::window().and_then(|window| window.document())
        }

        fn element(&self, id: &str) -> Option<Element> {
            let found = self.document().and_then(|document| document.get_element_by_id(id));
            if found.is_none() {
                get_logger().debug(
                    LogComponent::Infrastructure("UI"),
                    &format!("Element not found, skipping: {}", id),
                );
            }
            found
        }

        pub fn update_status(&self, message: &str) {
            if let Some(element) = self.element(STATUS_ELEMENT_ID) {
                element.set_inner_html(&format!("<strong>{}</strong>", message));
            }
        }

        /// Set a gauge's text label and drop its loading indicator.
        pub fn update_gauge_label(&self, gauge: &GaugeId, label: &str) {
            if let Some(element) = self.element(&gauge.label_element_id()) {
                element.set_text_content(Some(label));
                let _ = element.class_list().remove_1("loading");
            }
        }

        pub fn update_subtitle(&self, text: &str) {
            if let Some(element) = self.element(SUBTITLE_ELEMENT_ID) {
                element.set_text_content(Some(text));
            }
        }

        fn refresh_button(&self) -> Option<HtmlButtonElement> {
            self.element(REFRESH_BUTTON_ID)
                .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
        }

        pub fn refresh_started(&self) {
            if let Some(button) = self.refresh_button() {
                button.set_disabled(true);
                button.set_inner_html(BUTTON_BUSY_LABEL);
            }
        }

        pub fn refresh_finished(&self) {
            if let Some(button) = self.refresh_button() {
                button.set_disabled(false);
                button.set_inner_html(BUTTON_IDLE_LABEL);
            }
        }

        /// Show the error label on the trigger control, reverting after a
        /// fixed window regardless of any refresh started meanwhile.
        pub fn refresh_failed(&self) {
            if let Some(button) = self.refresh_button() {
                button.set_inner_html(BUTTON_ERROR_LABEL);
                let notifier = self.clone();
                Timeout::new(BUTTON_ERROR_REVERT_MS, move || notifier.refresh_finished()).forget();
            }
        }
    }
}
