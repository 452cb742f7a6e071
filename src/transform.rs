//! The zoom/pan transform value and its reconciliation rule.
//!
//! [`Transform`] is the only entity callers persist: a zoom factor in
//! `[1.0, 3.0]` and a pan offset per axis in percent of the container's
//! reference box. It is a plain `Copy` value; all invariant enforcement is
//! expressed as pure functions so it can be tested without a UI harness.
//!
//! [`Transform::reconcile`] is the single re-clamping path: every mutation
//! (zoom change, offset write, aspect-ratio change) runs through it before
//! the new state becomes observable, so a stale out-of-bounds offset never
//! survives even transiently.

use crate::constraint::{Axis, OffsetBounds};

/// Minimum zoom. At 1.0 the image exactly covers the container; values
/// below would under-cover and are never stored.
pub const MIN_ZOOM: f32 = 1.0;

/// Maximum zoom.
pub const MAX_ZOOM: f32 = 3.0;

/// Granularity of wheel ticks and the explicit zoom control.
pub const ZOOM_STEP: f32 = 0.05;

/// A cover-fit zoom/pan transform.
///
/// Offsets are percentages of the container's own untransformed size.
/// Positive moves the image right/down relative to the container's frame;
/// visually the crop window appears to move left/up.
///
/// # Example
///
/// ```
/// use coverfit::{OffsetBounds, Transform};
///
/// // Sub-1.0 zoom from a caller is silently raised, never rejected.
/// let t = Transform::new(0.3, 80.0, 0.0);
/// assert_eq!(t.zoom, 1.0);
///
/// // Reconciling against the permitted travel bounces the offset back.
/// let t = t.reconcile(&OffsetBounds::compute(2.0, 1.0, t.zoom));
/// assert_eq!(t.offset_x, 50.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Zoom factor, always in `[1.0, 3.0]`.
    pub zoom: f32,
    /// Horizontal offset in percent of container width.
    pub offset_x: f32,
    /// Vertical offset in percent of container height.
    pub offset_y: f32,
}

impl Transform {
    /// No magnification, centered.
    pub const IDENTITY: Self = Self {
        zoom: MIN_ZOOM,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    /// Create a transform from caller-supplied values.
    ///
    /// Zoom is silently corrected into `[1.0, 3.0]` (a presentation-layer
    /// convenience, not a validating API boundary). Offsets are stored
    /// as-is: before aspect ratios are known no constraint can be
    /// computed, and the first reconcile zeroes anything out of range.
    pub fn new(zoom: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            zoom: clamp_zoom(zoom),
            offset_x,
            offset_y,
        }
    }

    /// The identity transform (zoom 1.0, no pan).
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Whether this is the identity transform.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Offset for one axis.
    pub fn offset(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.offset_x,
            Axis::Y => self.offset_y,
        }
    }

    /// Return a copy with one axis replaced (unclamped — callers
    /// reconcile immediately after).
    pub(crate) fn with_offset(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => self.offset_x = value,
            Axis::Y => self.offset_y = value,
        }
        self
    }

    /// Re-clamp this transform against the given bounds.
    ///
    /// Corrects the zoom domain and bounces both offsets back inside
    /// `[-limit, limit]` (sign preserved, magnitude clamped to the
    /// boundary). Idempotent: reconciling a valid transform is a no-op.
    #[must_use]
    pub fn reconcile(self, bounds: &OffsetBounds) -> Self {
        Self {
            zoom: clamp_zoom(self.zoom),
            offset_x: bounds.clamp(Axis::X, self.offset_x),
            offset_y: bounds.clamp(Axis::Y, self.offset_y),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Clamp a zoom factor into `[1.0, 3.0]`. Non-finite input resolves to
/// the minimum (nothing moves, nothing panics).
pub fn clamp_zoom(zoom: f32) -> f32 {
    if zoom.is_finite() {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        MIN_ZOOM
    }
}
