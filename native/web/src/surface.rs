//! Bridge to the embedded editing surface.
//!
//! The surface arrives as a JS factory: called with (container, state,
//! config) it returns a live instance exposing an `update` method and,
//! optionally, a `root` document for selection queries.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

pub struct EmbeddedSurface {
    instance: JsValue,
    config: JsValue,
    root: Document,
}

impl EmbeddedSurface {
    /// Construct the surface inside `container`. Factory failures
    /// propagate to the embedding caller unmodified.
    pub fn mount(
        factory: &Function,
        container: &HtmlElement,
        state: &JsValue,
        config: JsValue,
    ) -> Result<Self, JsValue> {
        let instance = factory.call3(&JsValue::NULL, container, state, &config)?;
        let root = surface_root(&instance, container)?;
        Ok(Self {
            instance,
            config,
            root,
        })
    }

    /// Forward a state update to the surface, replacing the stored config
    /// when a new one is supplied.
    pub fn update(&mut self, state: &JsValue, config: Option<JsValue>) -> Result<(), JsValue> {
        if let Some(config) = config {
            self.config = config;
        }
        let update = Reflect::get(&self.instance, &JsValue::from_str("update"))?;
        if let Some(update) = update.dyn_ref::<Function>() {
            update.call2(&self.instance, state, &self.config)?;
        }
        Ok(())
    }

    /// Handle passed to the content renderer on every refresh.
    pub fn handle(&self) -> JsValue {
        self.instance.clone()
    }

    /// Document the surface's selection is read from.
    pub fn root(&self) -> &Document {
        &self.root
    }
}

/// The surface's `root` property when it is a document, otherwise the
/// container's owning document. Embedded contexts resolve their own
/// selection through this.
fn surface_root(instance: &JsValue, container: &HtmlElement) -> Result<Document, JsValue> {
    let root = Reflect::get(instance, &JsValue::from_str("root"))?;
    if let Ok(document) = root.dyn_into::<Document>() {
        return Ok(document);
    }
    container
        .owner_document()
        .ok_or_else(|| JsValue::from_str("menu bar container has no owning document"))
}
