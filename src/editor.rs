//! The editing session: input routing, synchronous re-clamping, and the
//! commit protocol.
//!
//! [`Editor`] owns one session's [`Transform`] plus the transient
//! measurement and drag state, and processes raw inputs one at a time with
//! [`Editor::update`]. Inputs are applied in dispatch order with no
//! batching — each mutation's clamping depends on the state immediately
//! before it. Every mutation path runs through the constraint calculator
//! before returning, so no observer can see an out-of-bounds offset, even
//! between two inputs.
//!
//! Commits surface as returned [`Event`]s rather than stored callbacks
//! ("state down, messages up"): the caller persists the transform when it
//! receives [`Event::Committed`]. In explicit mode that happens once, on
//! [`Input::Commit`] or Enter; in continuous mode every value-changing
//! mutation emits it, for surfaces whose enclosing dialog has its own
//! confirm step.
//!
//! # Example
//!
//! ```
//! use coverfit::{Editor, Event, Input, Key, Transform};
//!
//! let mut editor = Editor::new(Transform::identity());
//! editor.update(Input::ImageLoaded { width: 2000.0, height: 1000.0 });
//! editor.update(Input::ContainerResized { width: 300.0, height: 300.0 });
//!
//! // Drag 60px left: -20% of the 300px reference box at zoom 1.
//! editor.update(Input::PointerPressed { x: 150.0, y: 150.0 });
//! editor.update(Input::PointerMoved { x: 90.0, y: 150.0 });
//! editor.update(Input::PointerReleased);
//! assert_eq!(editor.transform().offset_x, -20.0);
//!
//! // Enter commits in explicit mode (the default).
//! let event = editor.update(Input::KeyPressed(Key::Enter));
//! assert!(matches!(event, Event::Committed(t) if t.offset_x == -20.0));
//! ```

use log::{debug, trace};

use crate::aspect::AspectState;
use crate::constraint::{Axis, OffsetBounds};
use crate::interaction::{DragState, drag_delta_percent, quantize_zoom};
use crate::transform::{Transform, ZOOM_STEP, clamp_zoom};

/// When the caller receives the edited transform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CommitMode {
    /// The session ends with an explicit commit or cancel. Enter and
    /// Escape are bound in this mode only.
    #[default]
    Explicit,
    /// Every value-changing mutation is forwarded immediately; there is
    /// no discrete commit or cancel and no keyboard bindings.
    Continuous,
}

/// Keys the engine binds (explicit mode only).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Commit the session.
    Enter,
    /// Cancel the session, when the editor was built [`cancellable`](Editor::cancellable).
    Escape,
}

/// Raw inputs fed to [`Editor::update`].
///
/// Pointer coordinates are screen pixels; image and container sizes are
/// the natural pixel dimensions and live layout size respectively.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Input {
    /// The image finished loading and reports its natural dimensions.
    ImageLoaded { width: f32, height: f32 },
    /// The container was measured (initial mount) or resized.
    ContainerResized { width: f32, height: f32 },
    /// Pointer pressed inside the editing surface.
    PointerPressed { x: f32, y: f32 },
    /// Pointer moved.
    PointerMoved { x: f32, y: f32 },
    /// Pointer released.
    PointerReleased,
    /// Pointer left the interactive area (terminates a drag like a release).
    PointerLeft,
    /// Wheel scroll; each tick is one [`ZOOM_STEP`] in the scroll
    /// direction (positive zooms in).
    Wheel { steps: i32 },
    /// Absolute zoom from an explicit control; snapped to the
    /// [`ZOOM_STEP`] lattice, then clamped.
    SetZoom(f32),
    /// A bound key was pressed.
    KeyPressed(Key),
    /// Programmatic commit (explicit mode).
    Commit,
    /// Programmatic cancel (explicit mode).
    Cancel,
}

/// What the caller must do with a processed input.
///
/// `Handled` and richer variants mean the input belonged to this editor:
/// the caller must stop the underlying event from propagating to any
/// enclosing drag-and-drop listener (the editing surface is frequently
/// nested inside a draggable card). `Ignored` inputs may propagate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// Not relevant in the current state; let the event propagate.
    Ignored,
    /// Consumed; stop propagation. No caller-visible value change to act on.
    Handled,
    /// A transform to persist: the explicit commit, or any value change
    /// in continuous mode.
    Committed(Transform),
    /// The session was cancelled; the caller's stored transform stands.
    Cancelled,
}

/// One editing session over a single stored transform.
///
/// Exclusive owner of the in-progress value: the engine does not support
/// two concurrent editors over the same stored transform. All mutation is
/// synchronous within [`update`](Self::update); there is no suspension
/// point and no I/O.
#[derive(Debug)]
pub struct Editor {
    transform: Transform,
    baseline: Transform,
    aspects: AspectState,
    drag: DragState,
    mode: CommitMode,
    cancellable: bool,
}

impl Editor {
    /// Start a session from the caller's stored transform.
    ///
    /// Zoom is silently corrected into the valid domain; offsets are kept
    /// as-is until the first re-clamp (they may predate measurement).
    /// Defaults: explicit mode, Escape unbound.
    pub fn new(initial: Transform) -> Self {
        let initial = Transform::new(initial.zoom, initial.offset_x, initial.offset_y);
        Self {
            transform: initial,
            baseline: initial,
            aspects: AspectState::new(),
            drag: DragState::default(),
            mode: CommitMode::default(),
            cancellable: false,
        }
    }

    /// Forward every value change instead of waiting for an explicit
    /// commit. Disables the keyboard bindings.
    pub fn continuous(mut self) -> Self {
        self.mode = CommitMode::Continuous;
        self
    }

    /// Bind Escape to cancel. Without this the key has no effect —
    /// equivalent to the caller not registering a cancel handler.
    pub fn cancellable(mut self) -> Self {
        self.cancellable = true;
        self
    }

    /// The current in-progress transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Measurement state for this session.
    pub fn aspects(&self) -> &AspectState {
        &self.aspects
    }

    /// The commit mode chosen at construction.
    pub fn mode(&self) -> CommitMode {
        self.mode
    }

    /// Whether a pointer drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Process one input event. See [`Event`] for the propagation
    /// contract on the return value.
    pub fn update(&mut self, input: Input) -> Event {
        match input {
            Input::ImageLoaded { width, height } => {
                self.aspects.set_image_size(width, height);
                let changed = self.reclamp();
                self.acknowledge(changed)
            }
            Input::ContainerResized { width, height } => {
                self.aspects.set_container_size(width, height);
                let changed = self.reclamp();
                self.acknowledge(changed)
            }
            Input::PointerPressed { x, y } => {
                // Captured even while pan is locked: the gesture must not
                // fall through to an ancestor drag-and-drop listener.
                self.drag.start((x, y));
                debug!("drag started at ({x}, {y})");
                Event::Handled
            }
            Input::PointerMoved { x, y } => match self.drag.update((x, y)) {
                Some((dx, dy)) => {
                    let changed = self.apply_pan_delta(dx, dy);
                    self.acknowledge(changed)
                }
                None => Event::Ignored,
            },
            Input::PointerReleased | Input::PointerLeft => {
                if self.drag.is_dragging() {
                    self.drag.end();
                    debug!("drag ended");
                    Event::Handled
                } else {
                    Event::Ignored
                }
            }
            Input::Wheel { steps } => {
                let requested = self.transform.zoom + steps as f32 * ZOOM_STEP;
                let changed = self.set_zoom(requested);
                self.acknowledge(changed)
            }
            Input::SetZoom(value) => {
                let changed = self.set_zoom(quantize_zoom(value));
                self.acknowledge(changed)
            }
            Input::KeyPressed(key) => self.handle_key(key),
            Input::Commit => match self.mode {
                CommitMode::Explicit => self.commit(),
                CommitMode::Continuous => Event::Ignored,
            },
            Input::Cancel => match self.mode {
                CommitMode::Explicit => {
                    self.cancel();
                    Event::Cancelled
                }
                CommitMode::Continuous => Event::Ignored,
            },
        }
    }

    /// Set the zoom, clamped to the valid domain, and immediately
    /// re-clamp both offsets against the new zoom (bounce-back). Returns
    /// whether the stored transform changed.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        let zoom = clamp_zoom(zoom);
        let next = Transform { zoom, ..self.transform }.reconcile(&self.bounds_at(zoom));
        let changed = next != self.transform;
        if changed {
            trace!(
                "zoom {} -> {}, offsets ({}, {})",
                self.transform.zoom, next.zoom, next.offset_x, next.offset_y
            );
        }
        self.transform = next;
        changed
    }

    /// Set one offset, clamped against the current zoom's permitted
    /// travel. Returns whether the stored transform changed.
    pub fn set_offset(&mut self, axis: Axis, value: f32) -> bool {
        let bounds = self.bounds_at(self.transform.zoom);
        let next = self.transform.with_offset(axis, bounds.clamp(axis, value));
        let changed = next != self.transform;
        self.transform = next;
        changed
    }

    /// Commit the session: hand the current transform to the caller and
    /// make it the baseline a later cancel restores.
    pub fn commit(&mut self) -> Event {
        debug!(
            "committed zoom {} offsets ({}, {})",
            self.transform.zoom, self.transform.offset_x, self.transform.offset_y
        );
        self.baseline = self.transform;
        Event::Committed(self.transform)
    }

    /// Discard the session's accumulated state, mid-drag included. The
    /// caller's stored transform is untouched; the in-progress value
    /// returns to the last committed baseline.
    pub fn cancel(&mut self) {
        debug!("session cancelled");
        self.drag.end();
        self.transform = self.baseline.reconcile(&self.bounds_at(self.baseline.zoom));
    }

    fn handle_key(&mut self, key: Key) -> Event {
        if self.mode == CommitMode::Continuous {
            return Event::Ignored;
        }
        match key {
            Key::Enter => self.commit(),
            Key::Escape if self.cancellable => {
                self.cancel();
                Event::Cancelled
            }
            Key::Escape => Event::Ignored,
        }
    }

    fn bounds_at(&self, zoom: f32) -> OffsetBounds {
        OffsetBounds::from_ratios(self.aspects.ratios(), zoom)
    }

    /// Apply a pointer delta in pixels to both offsets. Movement requires
    /// a measured container; otherwise nothing moves (pan stays locked).
    fn apply_pan_delta(&mut self, dx: f32, dy: f32) -> bool {
        let Some((width, height)) = self.aspects.container_size() else {
            return false;
        };
        let zoom = self.transform.zoom;
        let x = self.transform.offset_x + drag_delta_percent(dx, width, zoom);
        let y = self.transform.offset_y + drag_delta_percent(dy, height, zoom);
        let x_changed = self.set_offset(Axis::X, x);
        let y_changed = self.set_offset(Axis::Y, y);
        x_changed || y_changed
    }

    /// Re-clamp the whole transform after a measurement change.
    ///
    /// Runs only once both ratios are available: caller-supplied offsets
    /// must survive the unmeasured period and be re-clamped the moment
    /// measurement completes. (Mutations during that period still clamp
    /// against zero bounds and zero the offsets — panning is disabled,
    /// not deferred.)
    fn reclamp(&mut self) -> bool {
        if !self.aspects.is_ready() {
            return false;
        }
        let next = self.transform.reconcile(&self.bounds_at(self.transform.zoom));
        let changed = next != self.transform;
        if changed {
            trace!(
                "re-clamped offsets ({}, {}) -> ({}, {})",
                self.transform.offset_x, self.transform.offset_y, next.offset_x, next.offset_y
            );
        }
        self.transform = next;
        changed
    }

    /// Mode-dependent result for a consumed mutation: continuous mode
    /// forwards value changes immediately, everything else just reports
    /// the input as consumed.
    fn acknowledge(&self, changed: bool) -> Event {
        if changed && self.mode == CommitMode::Continuous {
            Event::Committed(self.transform)
        } else {
            Event::Handled
        }
    }
}
