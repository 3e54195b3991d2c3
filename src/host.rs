//! Capability traits between the positioning core and its host surface.
//!
//! The float controller and caret guard never touch a real document tree;
//! they read geometry through [`ViewportGeometry`] and write menu styling
//! through [`MenuChrome`]. The web backend implements both over live DOM
//! nodes, the synthetic host over plain structs, which is what makes the
//! state machine testable without a rendering surface.

use crate::geometry::{SelectionSnapshot, ViewRect};

/// Read side: bounding boxes, selection geometry, and scroll containers.
///
/// `wrapper` is the container that holds the menu strip and the editing
/// surface; `menu` is the strip itself. Offset sizes are the element's
/// layout size (border box), which while floating differs from the
/// bounding-box width captured at detach time.
pub trait ViewportGeometry {
    /// Height of the visual viewport.
    fn viewport_height(&self) -> f64;

    /// Bounding box of the wrapper container.
    fn wrapper_rect(&self) -> ViewRect;

    /// The wrapper's horizontal frame: offset width minus client width,
    /// i.e. both vertical borders plus any scrollbar.
    fn wrapper_frame_extent(&self) -> f64;

    /// Bounding box of the menu strip.
    fn menu_rect(&self) -> ViewRect;

    /// The menu strip's layout width.
    fn menu_offset_width(&self) -> f64;

    /// The menu strip's layout height.
    fn menu_offset_height(&self) -> f64;

    /// The editing surface's current selection, if one exists and has a
    /// focus endpoint.
    fn selection(&self) -> Option<SelectionSnapshot>;

    /// Nearest ancestor of the wrapper whose content overflows its visible
    /// height. `None` when nothing up the chain scrolls.
    fn wrapping_scrollable(&self) -> Option<Box<dyn ScrollableRegion>>;
}

/// A scroll container found by [`ViewportGeometry::wrapping_scrollable`].
pub trait ScrollableRegion {
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&self, px: f64);
}

/// Write side: the mutations the core applies to the menu strip and its
/// placeholder. Style writes are infallible (failures degrade silently);
/// only content rebuilding can fail, because it runs the external renderer.
pub trait MenuChrome {
    /// Error produced by the external content renderer; propagated out of
    /// the embedding API unmodified.
    type Error;

    /// Clear the menu strip and fill it with freshly rendered content.
    fn rebuild_content(&mut self) -> Result<(), Self::Error>;

    /// Apply a minimum height to the menu strip.
    fn set_menu_min_height(&mut self, px: f64);

    /// Detach the menu strip from flow: fixed positioning at the captured
    /// left offset and width.
    fn pin_menu(&mut self, left: f64, width: f64);

    /// Adjust the pinned strip's left offset.
    fn set_menu_left(&mut self, left: f64);

    /// Hide or show the pinned strip via a display override.
    fn set_menu_hidden(&mut self, hidden: bool);

    /// Return the strip to normal flow: clear position, left, width, and
    /// display overrides.
    fn release_menu(&mut self);

    /// Insert the flow-preserving placeholder, sized to the given height,
    /// immediately before the menu strip.
    fn insert_placeholder(&mut self, height: f64);

    /// Remove and discard the placeholder.
    fn remove_placeholder(&mut self);
}
