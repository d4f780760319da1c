use glam::Vec2;

/// Raw pointer position, overwritten on every mousemove and read once per
/// animation frame.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub position: Vec2,
}

// ---------------- Easing ----------------

/// One easing step: move `current` toward `target` by `factor` of the
/// remaining distance. With 0 < factor < 1 the step never overshoots.
#[inline]
pub fn ease_toward(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

// ---------------- Proximity ----------------

#[inline]
pub fn rect_center(left: f32, top: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(left + width * 0.5, top + height * 0.5)
}

/// Strict less-than, so a point exactly on the radius does not reveal.
#[inline]
pub fn within_radius(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}

// ---------------- Scroll math ----------------

/// Absolute scroll target for an in-page anchor: the target's viewport top
/// plus the current scroll offset, minus the fixed header height.
#[inline]
pub fn anchor_scroll_top(rect_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    rect_top + page_y_offset - header_offset
}

/// Parallax mapping for the hero image at a given scroll offset.
///
/// Returns `(translate_y_px, scale)` while the offset is under one viewport
/// height and `None` at or past it. The caller writes nothing on `None`, so
/// the last transform stays in place past the first viewport.
#[inline]
pub fn hero_transform(
    scrolled: f64,
    viewport_height: f64,
    rate: f64,
    shrink_per_px: f64,
) -> Option<(f64, f64)> {
    if scrolled < viewport_height {
        Some((scrolled * rate, 1.0 - scrolled * shrink_per_px))
    } else {
        None
    }
}
