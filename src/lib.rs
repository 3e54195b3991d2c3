//! Floating menu bar positioning for Hone Editor.
//!
//! Host-agnostic core: decides when the menu strip above an embedded
//! editing surface detaches from normal flow and pins to the viewport,
//! keeps a placeholder in the vacated slot, holds the strip's height
//! steady across content changes, and scrolls the caret clear when the
//! pinned strip covers it.
//!
//! Geometry reads and style writes go through the capability traits in
//! [`host`]; platform backends (see `native/web`) implement them against
//! a real document tree, and [`synthetic`] provides an in-memory host
//! for tests.

pub mod caret_guard;
pub mod float;
pub mod geometry;
pub mod host;
pub mod style;
pub mod synthetic;
pub mod view;

pub use caret_guard::reveal_caret;
pub use float::{FloatController, FloatState, FLOAT_DETACH_MARGIN};
pub use geometry::{EndpointOrder, SelectionSnapshot, ViewRect};
pub use host::{MenuChrome, ScrollableRegion, ViewportGeometry};
pub use style::{spacer_class, wrapper_class, StyleRegistry, MENU_CLASS};
pub use synthetic::{AppliedStyles, SyntheticHost};
pub use view::{MenuBarOptions, MenuBarView};
