//! Aspect-ratio state derived from image and container measurements.
//!
//! The engine never touches the DOM, windowing system, or image decoder;
//! the caller owns those handles and reports measurements as they happen
//! (image load completion, container resize). This module derives the two
//! aspect ratios the constraint calculator needs and guarantees downstream
//! code observes either both ratios or neither — never a half-initialized
//! state that would make offset bounds nonsensical.

/// Measured aspect state for one editing session.
///
/// Starts unmeasured; [`set_image_size`](Self::set_image_size) and
/// [`set_container_size`](Self::set_container_size) feed it as readiness
/// signals arrive. Non-positive or non-finite measurements are ignored —
/// a failed image load simply never produces a ratio.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AspectState {
    image_ratio: Option<f32>,
    container_ratio: Option<f32>,
    container_size: Option<(f32, f32)>,
}

impl AspectState {
    /// Fresh, unmeasured state. Panning is locked until both the image
    /// and the container have been measured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the image's natural pixel dimensions (image-ready signal).
    pub fn set_image_size(&mut self, width: f32, height: f32) {
        if let Some(ratio) = ratio_of(width, height) {
            self.image_ratio = Some(ratio);
        }
    }

    /// Record the container's live size (initial mount or resize).
    pub fn set_container_size(&mut self, width: f32, height: f32) {
        if let Some(ratio) = ratio_of(width, height) {
            self.container_ratio = Some(ratio);
            self.container_size = Some((width, height));
        }
    }

    /// Forget the image measurement (image swapped out, new one loading).
    pub fn clear_image(&mut self) {
        self.image_ratio = None;
    }

    /// Both ratios as `(image, container)`, or `None` until both exist.
    pub fn ratios(&self) -> Option<(f32, f32)> {
        match (self.image_ratio, self.container_ratio) {
            (Some(image), Some(container)) => Some((image, container)),
            _ => None,
        }
    }

    /// Container size in pixels, once measured. Needed to convert pointer
    /// deltas from pixels into percent of the reference box.
    pub fn container_size(&self) -> Option<(f32, f32)> {
        self.container_size
    }

    /// Whether both measurements have arrived.
    pub fn is_ready(&self) -> bool {
        self.ratios().is_some()
    }
}

fn ratio_of(width: f32, height: f32) -> Option<f32> {
    if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
        Some(width / height)
    } else {
        None
    }
}
