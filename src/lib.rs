use wasm_bindgen::prelude::*;

pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

/// Wire the browser implementations into the domain seams before any other
/// export runs.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(ConsoleLogger::new_development()));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Gauge dashboard initialized",
    );
}
