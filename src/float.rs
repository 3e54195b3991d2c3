//! The float controller: a two-state machine that detaches the menu strip
//! from document flow while the wrapper's top edge is scrolled out of view.
//!
//! Transitions are driven entirely by wrapper geometry relative to the
//! viewport. On detach the strip is pinned at the bounding box it had in
//! flow and a placeholder keeps the document's height; on re-dock every
//! override is cleared and the placeholder is discarded.

use log::debug;

use crate::host::{MenuChrome, ViewportGeometry};

/// Minimum clearance, in pixels, between the wrapper's bottom edge and the
/// viewport top for the strip to float. Below this the pinned strip would
/// hang past its own wrapper.
pub const FLOAT_DETACH_MARGIN: f64 = 10.0;

/// Controller state. The placeholder exists exactly while `Floating`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatState {
    Docked,
    Floating { placeholder_height: f64 },
}

/// Two-state machine deciding whether the menu strip is in flow or pinned
/// to the viewport. Owned by the menu bar view; re-evaluated on every
/// window scroll and on explicit request.
#[derive(Debug)]
pub struct FloatController {
    state: FloatState,
}

impl Default for FloatController {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatController {
    pub fn new() -> Self {
        Self {
            state: FloatState::Docked,
        }
    }

    pub fn state(&self) -> FloatState {
        self.state
    }

    pub fn is_floating(&self) -> bool {
        matches!(self.state, FloatState::Floating { .. })
    }

    /// Re-evaluate against current geometry, transitioning if the guards
    /// say so. Re-running with unchanged geometry reapplies the same values
    /// and is observationally a no-op.
    pub fn evaluate<H>(&mut self, host: &mut H)
    where
        H: ViewportGeometry + MenuChrome,
    {
        let wrapper = host.wrapper_rect();
        if self.is_floating() {
            if wrapper.top >= 0.0
                || wrapper.bottom() < host.menu_offset_height() + FLOAT_DETACH_MARGIN
            {
                self.dock(host);
            } else {
                let border = host.wrapper_frame_extent() / 2.0;
                host.set_menu_left(wrapper.left + border);
                host.set_menu_hidden(wrapper.top > host.viewport_height());
            }
        } else if wrapper.top < 0.0
            && wrapper.bottom() >= host.menu_offset_height() + FLOAT_DETACH_MARGIN
        {
            // Capture the in-flow bounding box before any style mutation;
            // left, width, and placeholder height all come from it.
            let menu = host.menu_rect();
            host.pin_menu(menu.left, menu.width);
            host.insert_placeholder(menu.height);
            self.state = FloatState::Floating {
                placeholder_height: menu.height,
            };
            debug!(
                "menu strip detached at left={} width={} height={}",
                menu.left, menu.width, menu.height
            );
        }
    }

    /// Return to `Docked` regardless of geometry. Used when floating is
    /// disabled by a configuration update. No-op when already docked.
    pub fn force_dock<H: MenuChrome>(&mut self, host: &mut H) {
        if self.is_floating() {
            self.dock(host);
        }
    }

    fn dock<H: MenuChrome>(&mut self, host: &mut H) {
        host.release_menu();
        host.remove_placeholder();
        self.state = FloatState::Docked;
        debug!("menu strip docked");
    }
}
