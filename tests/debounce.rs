#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use btc_gauge_wasm::event_utils::debounce;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn a_burst_collapses_into_one_run() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let mut tick = debounce(50, move || counter.set(counter.get() + 1));

    tick();
    tick();
    tick();
    TimeoutFuture::new(150).await;
    assert_eq!(runs.get(), 1);
}

#[wasm_bindgen_test]
async fn separate_bursts_each_fire() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let mut tick = debounce(50, move || counter.set(counter.get() + 1));

    tick();
    TimeoutFuture::new(150).await;
    tick();
    TimeoutFuture::new(150).await;
    assert_eq!(runs.get(), 2);
}

#[wasm_bindgen_test]
async fn nothing_fires_before_the_delay() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let mut tick = debounce(5_000, move || counter.set(counter.get() + 1));

    tick();
    TimeoutFuture::new(50).await;
    assert_eq!(runs.get(), 0);
}
