//! Window scroll subscription feeding float re-evaluation.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use hone_menubar::MenuBarView;

use crate::dom_host::DomHost;

/// Registered `scroll` listener on the window. `dispose` deregisters it
/// and is idempotent; dropping an undisposed handle deregisters too.
pub struct ScrollSubscription {
    window: Window,
    closure: Option<Closure<dyn FnMut()>>,
}

impl ScrollSubscription {
    /// Register a listener that re-runs float evaluation on every scroll.
    pub fn register(view: Rc<RefCell<MenuBarView<DomHost>>>) -> Result<Self, JsValue> {
        let window = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window to observe scrolling on"))?;
        let closure = Closure::wrap(Box::new(move || {
            if let Ok(mut view) = view.try_borrow_mut() {
                view.evaluate_float();
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            closure: Some(closure),
        })
    }

    pub fn dispose(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.dispose();
    }
}
