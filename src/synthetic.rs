//! Synthetic host: an in-memory stand-in for a real document tree.
//!
//! Geometry is plain data and style mutations land in an inspectable
//! record, so the positioning logic can be exercised deterministically.
//! The crate's own tests run on it; embedders can use it the same way.

use std::cell::Cell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use crate::geometry::{SelectionSnapshot, ViewRect};
use crate::host::{MenuChrome, ScrollableRegion, ViewportGeometry};

/// The style state a real backend would have written to the menu element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedStyles {
    pub position_fixed: bool,
    pub left: Option<f64>,
    pub width: Option<f64>,
    pub display_none: bool,
    pub min_height: Option<f64>,
}

/// Scripted host backing both capability traits with plain fields.
///
/// Content renders are scripted through `content_sizes`: each rebuild pops
/// the next `(width, height)` pair and reports it as the measured size.
#[derive(Debug, Default)]
pub struct SyntheticHost {
    pub viewport_height: f64,
    pub wrapper: ViewRect,
    pub wrapper_frame_extent: f64,
    pub menu: ViewRect,
    pub menu_width: f64,
    pub menu_height: f64,
    pub selection: Option<SelectionSnapshot>,
    /// Measured sizes to report after successive rebuilds.
    pub content_sizes: VecDeque<(f64, f64)>,
    /// How many times content has been rebuilt.
    pub rebuilds: usize,
    /// Height of the inserted placeholder, if any.
    pub placeholder: Option<f64>,
    styles: AppliedStyles,
    scroll: Option<Rc<Cell<f64>>>,
}

impl SyntheticHost {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            ..Self::default()
        }
    }

    /// Give the host a scrollable ancestor with the given scroll offset.
    pub fn attach_scrollable(&mut self, scroll_top: f64) {
        self.scroll = Some(Rc::new(Cell::new(scroll_top)));
    }

    /// Current scroll offset of the attached scrollable, if one exists.
    pub fn scroll_position(&self) -> Option<f64> {
        self.scroll.as_ref().map(|cell| cell.get())
    }

    pub fn applied_styles(&self) -> AppliedStyles {
        self.styles.clone()
    }
}

struct SyntheticScrollable {
    top: Rc<Cell<f64>>,
}

impl ScrollableRegion for SyntheticScrollable {
    fn scroll_top(&self) -> f64 {
        self.top.get()
    }

    fn set_scroll_top(&self, px: f64) {
        self.top.set(px);
    }
}

impl ViewportGeometry for SyntheticHost {
    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn wrapper_rect(&self) -> ViewRect {
        self.wrapper
    }

    fn wrapper_frame_extent(&self) -> f64 {
        self.wrapper_frame_extent
    }

    fn menu_rect(&self) -> ViewRect {
        self.menu
    }

    fn menu_offset_width(&self) -> f64 {
        self.menu_width
    }

    fn menu_offset_height(&self) -> f64 {
        self.menu_height
    }

    fn selection(&self) -> Option<SelectionSnapshot> {
        self.selection.clone()
    }

    fn wrapping_scrollable(&self) -> Option<Box<dyn ScrollableRegion>> {
        self.scroll.as_ref().map(|cell| {
            Box::new(SyntheticScrollable {
                top: Rc::clone(cell),
            }) as Box<dyn ScrollableRegion>
        })
    }
}

impl MenuChrome for SyntheticHost {
    type Error = Infallible;

    fn rebuild_content(&mut self) -> Result<(), Self::Error> {
        self.rebuilds += 1;
        if let Some((width, height)) = self.content_sizes.pop_front() {
            self.menu_width = width;
            self.menu_height = height;
            self.menu.width = width;
            self.menu.height = height;
        }
        Ok(())
    }

    fn set_menu_min_height(&mut self, px: f64) {
        self.styles.min_height = Some(px);
    }

    fn pin_menu(&mut self, left: f64, width: f64) {
        self.styles.position_fixed = true;
        self.styles.left = Some(left);
        self.styles.width = Some(width);
    }

    fn set_menu_left(&mut self, left: f64) {
        self.styles.left = Some(left);
    }

    fn set_menu_hidden(&mut self, hidden: bool) {
        self.styles.display_none = hidden;
    }

    fn release_menu(&mut self) {
        self.styles.position_fixed = false;
        self.styles.left = None;
        self.styles.width = None;
        self.styles.display_none = false;
    }

    fn insert_placeholder(&mut self, height: f64) {
        self.placeholder = Some(height);
    }

    fn remove_placeholder(&mut self) {
        self.placeholder = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_pops_scripted_sizes_in_order() {
        let mut host = SyntheticHost::new(800.0);
        host.content_sizes.push_back((400.0, 20.0));
        host.content_sizes.push_back((420.0, 26.0));

        host.rebuild_content().unwrap();
        assert_eq!((host.menu_width, host.menu_height), (400.0, 20.0));
        host.rebuild_content().unwrap();
        assert_eq!((host.menu_width, host.menu_height), (420.0, 26.0));
        // Script exhausted: size holds steady.
        host.rebuild_content().unwrap();
        assert_eq!((host.menu_width, host.menu_height), (420.0, 26.0));
        assert_eq!(host.rebuilds, 3);
    }

    #[test]
    fn release_clears_pin_but_keeps_min_height() {
        let mut host = SyntheticHost::new(800.0);
        host.set_menu_min_height(24.0);
        host.pin_menu(10.0, 500.0);
        host.set_menu_hidden(true);

        host.release_menu();
        let styles = host.applied_styles();
        assert!(!styles.position_fixed);
        assert_eq!(styles.left, None);
        assert_eq!(styles.width, None);
        assert!(!styles.display_none);
        assert_eq!(styles.min_height, Some(24.0));
    }

    #[test]
    fn scrollable_round_trips_offset() {
        let mut host = SyntheticHost::new(800.0);
        assert!(host.wrapping_scrollable().is_none());

        host.attach_scrollable(150.0);
        let scrollable = host.wrapping_scrollable().unwrap();
        assert_eq!(scrollable.scroll_top(), 150.0);
        scrollable.set_scroll_top(75.0);
        assert_eq!(host.scroll_position(), Some(75.0));
    }
}
