//! MenuBarView: the long-lived owner tying refresh, float, and caret
//! handling together over one host.
//!
//! The owner never touches a document tree itself; backends hand it a host
//! implementing the capability traits and call `update` on state changes
//! and `evaluate_float` on scroll.

use log::trace;
use serde::Deserialize;

use crate::caret_guard;
use crate::float::{FloatController, FloatState};
use crate::host::{MenuChrome, ViewportGeometry};

// ── Configuration ────────────────────────────────────────────────

/// Feature flags crossing the embedding boundary as JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuBarOptions {
    /// Enables the float controller and caret guard. Off, the strip stays
    /// in normal flow and only height management runs.
    pub floating_menu: bool,
}

impl MenuBarOptions {
    /// Parse options from JSON. Malformed input degrades to defaults.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }
}

// ── MenuBarView ──────────────────────────────────────────────────

/// Owner of the menu strip's behavior: content refresh with the
/// width-keyed height high-water-mark, the float state machine, and the
/// caret guard hookup.
pub struct MenuBarView<H> {
    host: H,
    options: MenuBarOptions,
    float: FloatController,
    max_height: f64,
    width_for_max_height: f64,
}

impl<H> MenuBarView<H>
where
    H: ViewportGeometry + MenuChrome,
{
    /// Build the owner, render initial content, and (when enabled) run the
    /// first float evaluation.
    pub fn new(host: H, options: MenuBarOptions) -> Result<Self, H::Error> {
        let mut view = Self {
            host,
            options,
            float: FloatController::new(),
            max_height: 0.0,
            width_for_max_height: 0.0,
        };
        view.refresh_menu()?;
        view.evaluate_float();
        Ok(view)
    }

    /// Apply a configuration change (if any) and refresh content. Called
    /// after the embedded surface has taken the new state.
    pub fn update(&mut self, options: Option<MenuBarOptions>) -> Result<(), H::Error> {
        if let Some(options) = options {
            self.options = options;
            if !self.options.floating_menu {
                self.float.force_dock(&mut self.host);
            }
        }
        self.refresh_menu()
    }

    /// Clear, re-render, and re-measure the menu strip. While floating the
    /// measurement is skipped and the caret guard runs instead.
    pub fn refresh_menu(&mut self) -> Result<(), H::Error> {
        self.host.rebuild_content()?;
        if self.float.is_floating() {
            caret_guard::reveal_caret(&self.host);
        } else {
            let width = self.host.menu_offset_width();
            if width != self.width_for_max_height {
                self.width_for_max_height = width;
                self.max_height = 0.0;
            }
            let height = self.host.menu_offset_height();
            if height > self.max_height {
                self.max_height = height;
                self.host.set_menu_min_height(height);
                trace!("menu strip min-height raised to {height} at width {width}");
            }
        }
        Ok(())
    }

    /// Run the float state machine against current geometry. When floating
    /// is disabled this only makes sure the strip is docked.
    pub fn evaluate_float(&mut self) {
        if self.options.floating_menu {
            self.float.evaluate(&mut self.host);
        } else {
            self.float.force_dock(&mut self.host);
        }
    }

    pub fn is_floating(&self) -> bool {
        self.float.is_floating()
    }

    pub fn float_state(&self) -> FloatState {
        self.float.state()
    }

    pub fn options(&self) -> &MenuBarOptions {
        &self.options
    }

    /// Largest strip height observed at the current width.
    pub fn max_observed_height(&self) -> f64 {
        self.max_height
    }

    /// The width the high-water-mark was measured at.
    pub fn width_at_max_height(&self) -> f64 {
        self.width_for_max_height
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{EndpointOrder, SelectionSnapshot, ViewRect};
    use crate::synthetic::SyntheticHost;

    fn scripted_host(sizes: &[(f64, f64)]) -> SyntheticHost {
        let mut host = SyntheticHost::new(800.0);
        host.wrapper = ViewRect::new(0.0, 10.0, 600.0, 900.0);
        host.menu = ViewRect::new(0.0, 10.0, 600.0, 30.0);
        for &size in sizes {
            host.content_sizes.push_back(size);
        }
        host
    }

    #[test]
    fn options_parse_and_default() {
        assert!(MenuBarOptions::from_json(r#"{"floatingMenu": true}"#).floating_menu);
        assert!(!MenuBarOptions::from_json("{}").floating_menu);
        assert!(!MenuBarOptions::from_json("not json").floating_menu);
    }

    #[test]
    fn construction_renders_and_measures() {
        let host = scripted_host(&[(400.0, 20.0)]);
        let view = MenuBarView::new(host, MenuBarOptions::default()).unwrap();
        assert_eq!(view.host().rebuilds, 1);
        assert_eq!(view.host().applied_styles().min_height, Some(20.0));
        assert_eq!(view.max_observed_height(), 20.0);
        assert_eq!(view.width_at_max_height(), 400.0);
    }

    #[test]
    fn min_height_is_monotonic_at_fixed_width() {
        let host = scripted_host(&[(400.0, 20.0), (400.0, 28.0), (400.0, 24.0)]);
        let mut view = MenuBarView::new(host, MenuBarOptions::default()).unwrap();
        assert_eq!(view.host().applied_styles().min_height, Some(20.0));

        view.update(None).unwrap();
        assert_eq!(view.host().applied_styles().min_height, Some(28.0));

        view.update(None).unwrap();
        // Shrinking content does not lower the applied minimum.
        assert_eq!(view.host().applied_styles().min_height, Some(28.0));
        assert_eq!(view.max_observed_height(), 28.0);
    }

    #[test]
    fn width_change_resets_high_water_mark() {
        let host = scripted_host(&[(400.0, 30.0), (500.0, 18.0)]);
        let mut view = MenuBarView::new(host, MenuBarOptions::default()).unwrap();
        assert_eq!(view.host().applied_styles().min_height, Some(30.0));

        view.update(None).unwrap();
        // New width: the mark restarts from the fresh measurement, even
        // though it is lower than the old maximum.
        assert_eq!(view.host().applied_styles().min_height, Some(18.0));
        assert_eq!(view.max_observed_height(), 18.0);
        assert_eq!(view.width_at_max_height(), 500.0);
    }

    #[test]
    fn floating_refresh_skips_measurement_and_guards_caret() {
        let mut host = scripted_host(&[(400.0, 20.0), (400.0, 36.0)]);
        host.wrapper = ViewRect::new(0.0, -50.0, 600.0, 750.0);
        host.menu = ViewRect::new(0.0, 0.0, 600.0, 30.0);
        host.attach_scrollable(300.0);
        host.selection = Some(SelectionSnapshot {
            anchor_offset: 0,
            focus_offset: 3,
            endpoints: EndpointOrder::FocusFollowsAnchor,
            rects: vec![ViewRect::new(40.0, 12.0, 2.0, 18.0)],
        });

        let mut view = MenuBarView::new(
            host,
            MenuBarOptions {
                floating_menu: true,
            },
        )
        .unwrap();
        assert!(view.is_floating());
        let pre_float_min = view.host().applied_styles().min_height;

        view.update(None).unwrap();
        // The taller remeasure did not raise the minimum, and the caret was
        // lifted clear of the now 36px strip: 300 - (36 - 12).
        assert_eq!(view.host().applied_styles().min_height, pre_float_min);
        assert_eq!(view.host().scroll_position(), Some(276.0));
    }

    #[test]
    fn evaluate_float_is_inert_when_disabled() {
        let mut host = scripted_host(&[(400.0, 20.0)]);
        host.wrapper = ViewRect::new(0.0, -50.0, 600.0, 750.0);

        let mut view = MenuBarView::new(host, MenuBarOptions::default()).unwrap();
        view.evaluate_float();
        assert!(!view.is_floating());
        assert!(!view.host().applied_styles().position_fixed);
    }

    #[test]
    fn disabling_floating_docks_on_update() {
        let mut host = scripted_host(&[(400.0, 20.0), (400.0, 20.0)]);
        host.wrapper = ViewRect::new(0.0, -50.0, 600.0, 750.0);
        host.menu = ViewRect::new(0.0, 0.0, 600.0, 30.0);

        let mut view = MenuBarView::new(
            host,
            MenuBarOptions {
                floating_menu: true,
            },
        )
        .unwrap();
        assert!(view.is_floating());
        assert!(view.options().floating_menu);

        view.update(Some(MenuBarOptions::default())).unwrap();
        assert!(!view.options().floating_menu);
        assert!(!view.is_floating());
        assert_eq!(view.host().placeholder, None);
        assert!(!view.host().applied_styles().position_fixed);
    }
}
