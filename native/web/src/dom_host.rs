//! web-sys implementation of the core capability traits.
//!
//! Geometry reads come from bounding boxes and offset metrics; chrome
//! writes land as inline styles on the menu node. Style writes cannot
//! usefully fail, so their results are discarded; only content rendering
//! is fallible.

use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};

use hone_menubar::{
    spacer_class, EndpointOrder, MenuChrome, ScrollableRegion, SelectionSnapshot, ViewRect,
    ViewportGeometry,
};

use crate::surface::EmbeddedSurface;

pub struct DomHost {
    document: Document,
    wrapper: HtmlElement,
    menu: HtmlElement,
    spacer: Option<HtmlElement>,
    render: Function,
    menu_content: JsValue,
    surface_handle: JsValue,
    root: Document,
}

impl DomHost {
    pub fn new(
        wrapper: HtmlElement,
        menu: HtmlElement,
        surface: &EmbeddedSurface,
        render: Function,
        menu_content: JsValue,
    ) -> Result<Self, JsValue> {
        let document = wrapper
            .owner_document()
            .ok_or_else(|| JsValue::from_str("menu bar wrapper has no owning document"))?;
        Ok(Self {
            document,
            wrapper,
            menu,
            spacer: None,
            render,
            menu_content,
            surface_handle: surface.handle(),
            root: surface.root().clone(),
        })
    }

    /// Swap in a new renderer and content description on a configuration
    /// update.
    pub fn set_render_hooks(&mut self, render: Function, menu_content: JsValue) {
        self.render = render;
        self.menu_content = menu_content;
    }
}

fn rect_of(element: &HtmlElement) -> ViewRect {
    let rect = element.get_bounding_client_rect();
    ViewRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

struct DomScrollable {
    element: Element,
}

impl ScrollableRegion for DomScrollable {
    fn scroll_top(&self) -> f64 {
        self.element.scroll_top() as f64
    }

    fn set_scroll_top(&self, px: f64) {
        self.element.set_scroll_top(px.round() as i32);
    }
}

impl ViewportGeometry for DomHost {
    fn viewport_height(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn wrapper_rect(&self) -> ViewRect {
        rect_of(&self.wrapper)
    }

    fn wrapper_frame_extent(&self) -> f64 {
        (self.wrapper.offset_width() - self.wrapper.client_width()) as f64
    }

    fn menu_rect(&self) -> ViewRect {
        rect_of(&self.menu)
    }

    fn menu_offset_width(&self) -> f64 {
        self.menu.offset_width() as f64
    }

    fn menu_offset_height(&self) -> f64 {
        self.menu.offset_height() as f64
    }

    fn selection(&self) -> Option<SelectionSnapshot> {
        let selection = self.root.get_selection().ok().flatten()?;
        let focus = selection.focus_node()?;
        let anchor = selection.anchor_node()?;

        let endpoints = if anchor.is_same_node(Some(&focus)) {
            EndpointOrder::SameNode
        } else if anchor.compare_document_position(&focus) == Node::DOCUMENT_POSITION_FOLLOWING {
            EndpointOrder::AnchorFollowsFocus
        } else {
            EndpointOrder::FocusFollowsAnchor
        };

        let mut rects = Vec::new();
        let list = selection
            .get_range_at(0)
            .ok()
            .and_then(|range| range.get_client_rects());
        if let Some(list) = list {
            for index in 0..list.length() {
                if let Some(rect) = list.item(index) {
                    rects.push(ViewRect::new(
                        rect.left(),
                        rect.top(),
                        rect.width(),
                        rect.height(),
                    ));
                }
            }
        }

        Some(SelectionSnapshot {
            anchor_offset: selection.anchor_offset(),
            focus_offset: selection.focus_offset(),
            endpoints,
            rects,
        })
    }

    fn wrapping_scrollable(&self) -> Option<Box<dyn ScrollableRegion>> {
        let mut cursor = self.wrapper.parent_node();
        while let Some(node) = cursor {
            if let Some(element) = node.dyn_ref::<Element>() {
                if element.scroll_height() > element.client_height() {
                    return Some(Box::new(DomScrollable {
                        element: element.clone(),
                    }));
                }
            }
            cursor = node.parent_node();
        }
        None
    }
}

impl MenuChrome for DomHost {
    type Error = JsValue;

    fn rebuild_content(&mut self) -> Result<(), JsValue> {
        self.menu.set_text_content(Some(""));
        let content = self
            .render
            .call2(&JsValue::NULL, &self.surface_handle, &self.menu_content)?;
        let node = content
            .dyn_into::<Node>()
            .map_err(|_| JsValue::from_str("menu renderer did not return a node"))?;
        self.menu.append_child(&node)?;
        Ok(())
    }

    fn set_menu_min_height(&mut self, px: f64) {
        let _ = self
            .menu
            .style()
            .set_property("min-height", &format!("{px}px"));
    }

    fn pin_menu(&mut self, left: f64, width: f64) {
        let style = self.menu.style();
        let _ = style.set_property("left", &format!("{left}px"));
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("position", "fixed");
    }

    fn set_menu_left(&mut self, left: f64) {
        let _ = self.menu.style().set_property("left", &format!("{left}px"));
    }

    fn set_menu_hidden(&mut self, hidden: bool) {
        let style = self.menu.style();
        if hidden {
            let _ = style.set_property("display", "none");
        } else {
            let _ = style.remove_property("display");
        }
    }

    fn release_menu(&mut self) {
        let style = self.menu.style();
        let _ = style.remove_property("position");
        let _ = style.remove_property("left");
        let _ = style.remove_property("width");
        let _ = style.remove_property("display");
    }

    fn insert_placeholder(&mut self, height: f64) {
        if self.spacer.is_some() {
            return;
        }
        let Ok(element) = self.document.create_element("div") else {
            return;
        };
        let Ok(spacer) = element.dyn_into::<HtmlElement>() else {
            return;
        };
        spacer.set_class_name(&spacer_class());
        let _ = spacer
            .style()
            .set_property("height", &format!("{height}px"));
        let _ = self.wrapper.insert_before(&spacer, Some(self.menu.as_ref()));
        self.spacer = Some(spacer);
    }

    fn remove_placeholder(&mut self) {
        if let Some(spacer) = self.spacer.take() {
            spacer.remove();
        }
    }
}
