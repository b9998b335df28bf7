use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::utils::window;
use gloo_timers::callback::Timeout;

pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Coalesce bursts of calls into one `action` run `delay_ms` after the
/// last call. Each new call replaces (and thereby cancels) the pending
/// timer.
pub fn debounce<F>(delay_ms: u32, action: F) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let action = Rc::new(RefCell::new(action));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move || {
        let action = Rc::clone(&action);
        let slot = Rc::clone(&pending);
        let timeout = Timeout::new(delay_ms, move || {
            slot.borrow_mut().take();
            (&mut *action.borrow_mut())();
        });
        *pending.borrow_mut() = Some(timeout);
    }
}

/// Attach a debounced window-resize hook. The listener detaches when the
/// returned handle is dropped, so the caller keeps it alive for the page
/// lifetime.
pub fn on_window_resize<F>(action: F) -> EventListener
where
    F: FnMut() + 'static,
{
    let mut debounced = debounce(RESIZE_DEBOUNCE_MS, action);
    EventListener::new(&window(), "resize", move |_event| debounced())
}
