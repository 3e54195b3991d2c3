//! Viewport-space geometry for the menu bar.
//!
//! Rectangles are in viewport coordinates (the coordinate space of
//! `getBoundingClientRect`): y grows downward, a negative `top` means the box
//! has scrolled above the viewport. All values are CSS pixels.

/// A bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// True when the two boxes share any vertical extent. Boxes that merely
    /// touch (top == other bottom) do not overlap.
    pub fn overlaps_vertically(&self, other: &ViewRect) -> bool {
        self.top < other.bottom() && self.bottom() > other.top
    }
}

impl From<(f64, f64, f64, f64)> for ViewRect {
    fn from((left, top, width, height): (f64, f64, f64, f64)) -> Self {
        Self::new(left, top, width, height)
    }
}

/// Document-order relation between the selection's anchor and focus nodes.
///
/// Backends collapse their native position query into these three cases;
/// containment and disconnected relations count as `FocusFollowsAnchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointOrder {
    /// Anchor and focus sit in the same node; offsets decide direction.
    SameNode,
    /// The anchor node comes after the focus node (backward selection).
    AnchorFollowsFocus,
    /// The focus node comes after the anchor node (forward selection).
    FocusFollowsAnchor,
}

/// The current selection as the caret guard sees it: endpoint offsets, the
/// endpoint node relation, and the client rectangles of the primary range.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSnapshot {
    pub anchor_offset: u32,
    pub focus_offset: u32,
    pub endpoints: EndpointOrder,
    pub rects: Vec<ViewRect>,
}

impl SelectionSnapshot {
    /// Whether the selection runs backward (anchor after focus).
    ///
    /// Not precise, but close enough: the node relation is a single
    /// document-order query, so edge cases like one endpoint containing the
    /// other resolve as forward.
    pub fn is_inverted(&self) -> bool {
        match self.endpoints {
            EndpointOrder::SameNode => self.anchor_offset > self.focus_offset,
            EndpointOrder::AnchorFollowsFocus => true,
            EndpointOrder::FocusFollowsAnchor => false,
        }
    }

    /// The trailing edge rectangle: the first rect for a backward selection,
    /// the last otherwise. `None` when the range produced no rectangles.
    pub fn edge_rect(&self) -> Option<ViewRect> {
        if self.is_inverted() {
            self.rects.first().copied()
        } else {
            self.rects.last().copied()
        }
    }
}
