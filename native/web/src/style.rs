//! Default menu strip styling and process-wide sheet management.
//!
//! One sheet per class name, shared by every menu bar in the page: the
//! first owner injects it, the last owner's teardown removes it. The
//! reference counting lives in the core registry; only the `<style>`
//! element handling is DOM-specific.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use hone_menubar::{StyleRegistry, MENU_CLASS};

thread_local! {
    static REGISTRY: RefCell<StyleRegistry> = RefCell::new(StyleRegistry::new());
    static SHEETS: RefCell<HashMap<String, Element>> = RefCell::new(HashMap::new());
}

/// Generates the default rules for the menu strip class.
///
/// External stylesheets overriding this class must preserve `position`,
/// `min-height`, and `box-sizing: border-box`; the float geometry math
/// depends on them.
pub fn menubar_css(class: &str) -> String {
    format!(
        r#"
.{class} {{
  border-top-left-radius: inherit;
  border-top-right-radius: inherit;
  position: relative;
  min-height: 1em;
  color: #666;
  padding: 1px 6px;
  top: 0; left: 0; right: 0;
  border-bottom: 1px solid silver;
  background: white;
  z-index: 10;
  -moz-box-sizing: border-box;
  box-sizing: border-box;
  overflow: visible;
}}
"#
    )
}

/// An owner's reference on the injected default sheet. Dropping releases
/// the reference; the sheet leaves the document with the last one.
pub struct StyleHandle {
    class: String,
}

impl StyleHandle {
    pub fn acquire(document: &Document) -> Result<Self, JsValue> {
        let class = MENU_CLASS.to_string();
        let first = REGISTRY.with(|registry| registry.borrow_mut().acquire(&class));
        if first {
            match inject_sheet(document, &menubar_css(&class)) {
                Ok(sheet) => {
                    SHEETS.with(|sheets| sheets.borrow_mut().insert(class.clone(), sheet));
                }
                Err(err) => {
                    REGISTRY.with(|registry| registry.borrow_mut().release(&class));
                    return Err(err);
                }
            }
        }
        Ok(Self { class })
    }
}

impl Drop for StyleHandle {
    fn drop(&mut self) {
        let last = REGISTRY.with(|registry| registry.borrow_mut().release(&self.class));
        if last {
            if let Some(sheet) = SHEETS.with(|sheets| sheets.borrow_mut().remove(&self.class)) {
                sheet.remove();
            }
        }
    }
}

fn inject_sheet(document: &Document, css: &str) -> Result<Element, JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(css));
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head to hold menu bar styles"))?;
    head.append_child(&style)?;
    Ok(style)
}
