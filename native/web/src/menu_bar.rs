//! MenuBar assembly: wrapper and strip construction, hook wiring, owner
//! lifecycle.
//!
//! Construction order matters: the wrapper mounts first, the embedded
//! surface builds inside it, then the strip is inserted before the
//! surface's DOM so it stays the wrapper's first in-flow child.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use hone_menubar::{wrapper_class, MenuBarOptions, MenuBarView, MENU_CLASS};

use crate::dom_host::DomHost;
use crate::style::StyleHandle;
use crate::subscription::ScrollSubscription;
use crate::surface::EmbeddedSurface;

// ── Mount target ─────────────────────────────────────────────────

/// Where the wrapper lands: a container element gets it appended, a
/// callback receives it once, before the surface is constructed.
pub enum MountTarget {
    Container(Element),
    Receiver(Function),
}

impl MountTarget {
    pub fn from_js(target: JsValue) -> Result<Self, JsValue> {
        if let Some(element) = target.dyn_ref::<Element>() {
            return Ok(Self::Container(element.clone()));
        }
        if let Ok(receiver) = target.dyn_into::<Function>() {
            return Ok(Self::Receiver(receiver));
        }
        Err(JsValue::from_str(
            "mount target must be an element or a function",
        ))
    }

    fn mount(&self, wrapper: &HtmlElement) -> Result<(), JsValue> {
        match self {
            Self::Container(container) => {
                container.append_child(wrapper.as_ref())?;
            }
            Self::Receiver(receiver) => {
                receiver.call1(&JsValue::NULL, wrapper)?;
            }
        }
        Ok(())
    }
}

// ── Hooks ────────────────────────────────────────────────────────

/// Collaborator hooks handed across the boundary as live JS values:
/// `{ surface, render, menuContent, surfaceConfig? }`.
pub struct MenuBarHooks {
    pub surface_factory: Function,
    pub render: Function,
    pub menu_content: JsValue,
    pub surface_config: JsValue,
}

impl MenuBarHooks {
    pub fn from_js(hooks: &JsValue) -> Result<Self, JsValue> {
        Ok(Self {
            surface_factory: required_function(hooks, "surface")?,
            render: required_function(hooks, "render")?,
            menu_content: Reflect::get(hooks, &JsValue::from_str("menuContent"))?,
            surface_config: Reflect::get(hooks, &JsValue::from_str("surfaceConfig"))?,
        })
    }
}

fn required_function(hooks: &JsValue, key: &str) -> Result<Function, JsValue> {
    Reflect::get(hooks, &JsValue::from_str(key))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("hook {key} must be a function")))
}

// ── MenuBar ──────────────────────────────────────────────────────

/// One embedded menu bar: the owner the WASM exports hold a pointer to.
pub struct MenuBar {
    view: Rc<RefCell<MenuBarView<DomHost>>>,
    surface: EmbeddedSurface,
    _scroll: Option<ScrollSubscription>,
    _style: StyleHandle,
}

impl MenuBar {
    /// Build the wrapper and strip, mount them, construct the embedded
    /// surface, render initial content, and (when enabled) start
    /// scroll-driven float evaluation.
    pub fn create(
        target: MountTarget,
        state: &JsValue,
        options: MenuBarOptions,
        hooks: MenuBarHooks,
    ) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document to build the menu bar in"))?;

        let wrapper = create_div(&document, &wrapper_class())?;
        target.mount(&wrapper)?;

        let surface = EmbeddedSurface::mount(
            &hooks.surface_factory,
            &wrapper,
            state,
            hooks.surface_config,
        )?;

        let menu = create_div(&document, MENU_CLASS)?;
        wrapper.insert_before(menu.as_ref(), wrapper.first_child().as_ref())?;

        let style = StyleHandle::acquire(&document)?;
        let host = DomHost::new(wrapper, menu, &surface, hooks.render, hooks.menu_content)?;
        let floating = options.floating_menu;
        let view = Rc::new(RefCell::new(MenuBarView::new(host, options)?));

        let scroll = if floating {
            Some(ScrollSubscription::register(Rc::clone(&view))?)
        } else {
            None
        };

        Ok(Self {
            view,
            surface,
            _scroll: scroll,
            _style: style,
        })
    }

    /// Forward new state (and optionally new options and hooks) to the
    /// surface, then refresh the strip.
    pub fn update(
        &mut self,
        state: &JsValue,
        options: Option<MenuBarOptions>,
        hooks: Option<MenuBarHooks>,
    ) -> Result<(), JsValue> {
        match hooks {
            Some(hooks) => {
                self.surface.update(state, Some(hooks.surface_config))?;
                let mut view = self.view.borrow_mut();
                view.host_mut()
                    .set_render_hooks(hooks.render, hooks.menu_content);
                view.update(options)
            }
            None => {
                self.surface.update(state, None)?;
                self.view.borrow_mut().update(options)
            }
        }
    }

    /// Explicit float re-evaluation, the non-scroll trigger.
    pub fn update_float(&mut self) {
        self.view.borrow_mut().evaluate_float();
    }

    pub fn is_floating(&self) -> bool {
        self.view.borrow().is_floating()
    }
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element("div")?;
    element.set_class_name(class);
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("created element is not an html element"))
}
