//! Web menu bar positioning for Hone Editor.
//!
//! Compiled to WASM via wasm-bindgen. Builds the wrapper and menu strip
//! as DOM elements, hosts the embedded editing surface between them, and
//! drives the core float/refresh/caret logic against live geometry:
//! - The strip is a <div> kept as the wrapper's first in-flow child
//! - While floating it pins with position:fixed and a spacer <div>
//!   reserves its slot
//! - A window scroll listener re-evaluates the float state

use wasm_bindgen::prelude::*;

mod dom_host;
mod menu_bar;
mod style;
mod subscription;
mod surface;

use hone_menubar::MenuBarOptions;
use menu_bar::{MenuBar, MenuBarHooks, MountTarget};

/// Create a menu bar around an embedded editing surface.
///
/// `target` is a container element or a callback receiving the wrapper;
/// `hooks` carries `{ surface, render, menuContent, surfaceConfig? }`.
/// Surface and renderer failures propagate as thrown errors.
#[wasm_bindgen]
pub fn hone_menubar_create(
    target: JsValue,
    state: JsValue,
    options_json: &str,
    hooks: JsValue,
) -> Result<*mut MenuBar, JsValue> {
    let target = MountTarget::from_js(target)?;
    let options = MenuBarOptions::from_json(options_json);
    let hooks = MenuBarHooks::from_js(&hooks)?;
    let bar = MenuBar::create(target, &state, options, hooks)?;
    Ok(Box::into_raw(Box::new(bar)))
}

/// Forward new editor state (and optionally new options and hooks), then
/// refresh the strip.
#[wasm_bindgen]
pub fn hone_menubar_update(
    bar: *mut MenuBar,
    state: JsValue,
    options_json: Option<String>,
    hooks: JsValue,
) -> Result<(), JsValue> {
    let bar = unsafe { &mut *bar };
    let options = options_json.as_deref().map(MenuBarOptions::from_json);
    let hooks = if hooks.is_null() || hooks.is_undefined() {
        None
    } else {
        Some(MenuBarHooks::from_js(&hooks)?)
    };
    bar.update(&state, options, hooks)
}

/// Re-evaluate the float state against current scroll geometry.
#[wasm_bindgen]
pub fn hone_menubar_update_float(bar: *mut MenuBar) {
    let bar = unsafe { &mut *bar };
    bar.update_float();
}

/// Whether the strip is currently pinned to the viewport.
#[wasm_bindgen]
pub fn hone_menubar_is_floating(bar: *mut MenuBar) -> bool {
    let bar = unsafe { &*bar };
    bar.is_floating()
}

/// Destroy a menu bar: deregister the scroll listener, release the
/// injected styles, free the owner. The wrapper node stays in the
/// document for the caller to detach.
#[wasm_bindgen]
pub fn hone_menubar_destroy(bar: *mut MenuBar) {
    if !bar.is_null() {
        drop(unsafe { Box::from_raw(bar) });
    }
}
