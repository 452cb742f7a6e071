//! Offset constraint computation for cover-fit transforms.
//!
//! Given the image and container aspect ratios and a zoom factor, computes
//! how far the image may be panned on each axis while still covering every
//! pixel of the container. Pure geometry — no pixel operations, no
//! allocations, `no_std` compatible.
//!
//! All offsets are percentages of the container's own untransformed size
//! (the reference box). The image is centered before panning, so the
//! available travel on each side is half the overflow beyond 100%.
//!
//! # Example
//!
//! ```
//! use coverfit::constraint::{Axis, max_offset};
//!
//! // A 2:1 landscape image in a square container at zoom 1.0 fills
//! // 200% of the width and exactly 100% of the height.
//! assert_eq!(max_offset(Axis::X, 2.0, 1.0, 1.0), 50.0);
//! assert_eq!(max_offset(Axis::Y, 2.0, 1.0, 1.0), 0.0);
//! ```

/// Pan axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal (offset measured against container width).
    X,
    /// Vertical (offset measured against container height).
    Y,
}

/// Rendered image size as percentages of the container, `(width, height)`.
///
/// At zoom 1.0 the tight dimension is exactly 100 and the loose dimension
/// is the quotient of the two aspect ratios × 100. Both scale linearly
/// with zoom. Which dimension is tight depends on which aspect ratio is
/// larger: a proportionally wider image fills its height and overflows
/// its width; a narrower (or equal) image fills its width.
pub fn fill_percentages(image_ratio: f32, container_ratio: f32, zoom: f32) -> (f32, f32) {
    if image_ratio > container_ratio {
        // Image is proportionally wider — height is tight, width overflows.
        (image_ratio / container_ratio * 100.0 * zoom, 100.0 * zoom)
    } else {
        // Image is proportionally taller or equal — width is tight.
        (100.0 * zoom, container_ratio / image_ratio * 100.0 * zoom)
    }
}

/// Maximum pan offset for one axis, as a percentage of the container size
/// on that axis. Always ≥ 0.
///
/// Returns 0 when the ratios are non-finite or non-positive — panning is
/// locked rather than erroring, since unmeasured dimensions are a normal
/// transient state. Behavior below `zoom = 1.0` is unspecified (callers
/// clamp first) but never panics and never goes negative.
pub fn max_offset(axis: Axis, image_ratio: f32, container_ratio: f32, zoom: f32) -> f32 {
    if !(image_ratio > 0.0 && image_ratio.is_finite())
        || !(container_ratio > 0.0 && container_ratio.is_finite())
    {
        return 0.0;
    }
    let (width_pct, height_pct) = fill_percentages(image_ratio, container_ratio, zoom);
    let fill = match axis {
        Axis::X => width_pct,
        Axis::Y => height_pct,
    };
    // Centered before panning: half the overflow is available on each side.
    0.0f32.max((fill - 100.0) / 2.0)
}

/// Permitted pan range on both axes at a given zoom.
///
/// An offset is valid when `|offset_x| <= x` and `|offset_y| <= y`;
/// within that range the rendered image box contains the container box on
/// both axes (the cover contract), with equality only at the boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OffsetBounds {
    /// Maximum `|offset_x|` in percent of container width.
    pub x: f32,
    /// Maximum `|offset_y|` in percent of container height.
    pub y: f32,
}

impl OffsetBounds {
    /// Pan fully locked on both axes.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Compute bounds from defined aspect ratios.
    pub fn compute(image_ratio: f32, container_ratio: f32, zoom: f32) -> Self {
        Self {
            x: max_offset(Axis::X, image_ratio, container_ratio, zoom),
            y: max_offset(Axis::Y, image_ratio, container_ratio, zoom),
        }
    }

    /// Compute bounds from possibly-unmeasured ratios.
    ///
    /// `None` (image not loaded or container not measured) locks panning
    /// entirely — the transform stays centered until both ratios exist.
    pub fn from_ratios(ratios: Option<(f32, f32)>, zoom: f32) -> Self {
        match ratios {
            Some((image, container)) => Self::compute(image, container, zoom),
            None => Self::ZERO,
        }
    }

    /// Maximum offset magnitude for one axis.
    pub fn limit(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Clamp an offset into the permitted range for one axis.
    ///
    /// Idempotent: clamping an in-range value is a no-op.
    pub fn clamp(&self, axis: Axis, offset: f32) -> f32 {
        let limit = self.limit(axis);
        offset.clamp(-limit, limit)
    }
}
