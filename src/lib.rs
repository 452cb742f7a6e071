//! Cover-fit zoom/pan transform engine.
//!
//! Lets a caller interactively zoom and pan a rectangular image so it
//! always fully covers a container of a different — and dynamically
//! changing — aspect ratio. Pure geometry and state machines — no pixel
//! operations, no I/O, no allocations, `no_std` compatible. The caller
//! owns image loading, measurement plumbing, rendering, and persistence;
//! this crate owns the numeric invariants.
//!
//! # Modules
//!
//! - [`constraint`] — Aspect-aware offset bounds (the cover contract)
//! - [`transform`] — The persisted `{zoom, offset_x, offset_y}` value and its reconciliation rule
//! - [`aspect`] — Image/container measurement state with a both-or-none guarantee
//! - [`interaction`] — Drag session state machine and raw-input conversion
//! - [`editor`] — Input routing, synchronous re-clamping, explicit/continuous commit
//!
//! # Example
//!
//! ```
//! use coverfit::{Editor, Event, Input, Transform};
//!
//! // Continuous mode: every value change is forwarded for live preview.
//! let mut editor = Editor::new(Transform::identity()).continuous();
//! editor.update(Input::ImageLoaded { width: 2000.0, height: 1000.0 });
//! editor.update(Input::ContainerResized { width: 300.0, height: 300.0 });
//!
//! match editor.update(Input::Wheel { steps: 1 }) {
//!     Event::Committed(t) => assert!((t.zoom - 1.05).abs() < 1e-6),
//!     other => panic!("expected a forwarded change, got {other:?}"),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod aspect;
pub mod constraint;
pub mod editor;
pub mod interaction;
pub mod transform;

// Re-exports: core types from each module
pub use aspect::AspectState;
pub use constraint::{Axis, OffsetBounds, fill_percentages, max_offset};
pub use editor::{CommitMode, Editor, Event, Input, Key};
pub use interaction::{DragState, drag_delta_percent, quantize_zoom};
pub use transform::{MAX_ZOOM, MIN_ZOOM, Transform, ZOOM_STEP, clamp_zoom};
