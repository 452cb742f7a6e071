//! Pointer-drag session state and raw-input conversion.
//!
//! A drag session is transient interaction state, not domain state: it
//! lives only between press and release and never appears in the persisted
//! transform. The session is a two-state machine (idle ↔ dragging) that
//! turns a stream of pointer positions into per-move deltas.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::transform::ZOOM_STEP;

/// Tracks one pointer-drag session.
///
/// `start` records the pointer's screen position; each `update` returns
/// the pixel delta since the previous position; `end` returns to idle.
/// Release outside the container and pointer-leave both end the session
/// the same way — no partial deltas are replayed or undone.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragState {
    start_pos: Option<(f32, f32)>,
    last_pos: Option<(f32, f32)>,
}

impl DragState {
    /// Begin a drag at the given screen position.
    pub fn start(&mut self, pos: (f32, f32)) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Record a pointer move, returning the pixel delta since the last
    /// recorded position. Returns `None` while idle.
    pub fn update(&mut self, pos: (f32, f32)) -> Option<(f32, f32)> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        Some((pos.0 - last.0, pos.1 - last.1))
    }

    /// End the drag and return to idle.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Screen position where the drag began, while dragging.
    pub fn origin(&self) -> Option<(f32, f32)> {
        self.start_pos
    }
}

/// Convert a pointer delta in screen pixels to an offset delta in percent
/// of the container's reference box.
///
/// The stored offset is interpreted in the image's own pre-scale
/// coordinate frame, so a desired on-screen displacement needs a
/// proportionally smaller percentage change as zoom increases — hence the
/// division by zoom. Returns 0 when the container size or zoom is
/// degenerate (nothing moves).
pub fn drag_delta_percent(delta_px: f32, container_px: f32, zoom: f32) -> f32 {
    if container_px > 0.0 && container_px.is_finite() && zoom > 0.0 && zoom.is_finite() {
        delta_px / container_px * 100.0 / zoom
    } else {
        0.0
    }
}

/// Snap an absolute zoom request to the fixed control granularity.
///
/// Wheel ticks move in whole [`ZOOM_STEP`] increments already; the
/// explicit zoom control rounds to the same lattice so both input sources
/// land on identical values. The result is not clamped — it goes through
/// the usual zoom clamp afterwards.
pub fn quantize_zoom(zoom: f32) -> f32 {
    if zoom.is_finite() {
        (zoom / ZOOM_STEP).round() * ZOOM_STEP
    } else {
        zoom
    }
}
