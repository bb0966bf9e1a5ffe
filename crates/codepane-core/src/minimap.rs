//! Minimap scrollbar geometry.
//!
//! All values are in host units (usually pixels). The minimap content itself is the highlighted
//! text drawn small; only the scroll coupling lives here.

/// Scroll state of the main text view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset.
    pub scroll_top: f64,
    /// Total content height.
    pub scroll_height: f64,
    /// Visible height.
    pub client_height: f64,
}

impl ScrollMetrics {
    fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// Position and size of the minimap's viewport indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarGeometry {
    /// Offset from the top of the minimap.
    pub top: f64,
    /// Indicator height.
    pub height: f64,
}

/// Indicator geometry for a minimap `minimap_height` tall.
///
/// The indicator is as tall as the visible fraction of the content and travels the remaining
/// height proportionally to the scroll position.
pub fn scrollbar_geometry(view: ScrollMetrics, minimap_height: f64) -> ScrollbarGeometry {
    if view.scroll_height <= 0.0 || view.max_scroll() == 0.0 {
        return ScrollbarGeometry {
            top: 0.0,
            height: minimap_height,
        };
    }

    let height = (view.client_height / view.scroll_height * minimap_height).min(minimap_height);
    let fraction = (view.scroll_top / view.max_scroll()).clamp(0.0, 1.0);
    ScrollbarGeometry {
        top: fraction * (minimap_height - height),
        height,
    }
}

/// Scroll offset of the main view after a click `offset_y` into the minimap.
pub fn scroll_for_click(offset_y: f64, minimap_height: f64, view: ScrollMetrics) -> f64 {
    if minimap_height <= 0.0 {
        return view.scroll_top;
    }
    let fraction = (offset_y / minimap_height).clamp(0.0, 1.0);
    fraction * view.max_scroll()
}
