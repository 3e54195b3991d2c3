//! Caret visibility guard: keeps the text cursor out from under a pinned
//! menu strip.
//!
//! Runs only while floating, after every content refresh. Every missing
//! piece of geometry (no selection, no range rectangles, no scrollable
//! ancestor) is a silent no-op; an occasionally obscured caret is cosmetic.

use log::trace;

use crate::host::ViewportGeometry;

/// Scroll the nearest scrollable ancestor just far enough that the
/// selection's trailing edge clears the menu strip's bottom edge.
pub fn reveal_caret<H: ViewportGeometry>(host: &H) {
    let Some(selection) = host.selection() else {
        return;
    };
    let Some(edge) = selection.edge_rect() else {
        return;
    };
    let menu = host.menu_rect();
    if edge.overlaps_vertically(&menu) {
        if let Some(scrollable) = host.wrapping_scrollable() {
            let lift = menu.bottom() - edge.top;
            scrollable.set_scroll_top(scrollable.scroll_top() - lift);
            trace!("caret under menu strip, lifting scroll by {lift}");
        }
    }
}
