//! Property sweeps for the cover contract.
//!
//! The rendered image box is simulated directly from the fill
//! percentages: the image is centered in the container and displaced by
//! the offset, all in percent of the container's reference box. Any
//! constraint error shows up as an edge of the container left uncovered.

use coverfit::*;

/// Rendered image box edges in container-percent coordinates:
/// `(left, top, right, bottom)`. The container spans 0..100 on each axis.
fn rendered_box(image_ratio: f32, container_ratio: f32, zoom: f32, x: f32, y: f32) -> (f32, f32, f32, f32) {
    let (fw, fh) = fill_percentages(image_ratio, container_ratio, zoom);
    (
        50.0 - fw / 2.0 + x,
        50.0 - fh / 2.0 + y,
        50.0 + fw / 2.0 + x,
        50.0 + fh / 2.0 + y,
    )
}

/// Assert the rendered box contains the container box on both axes.
fn assert_covers(image_ratio: f32, container_ratio: f32, zoom: f32, x: f32, y: f32) {
    let (left, top, right, bottom) = rendered_box(image_ratio, container_ratio, zoom, x, y);
    const EPS: f32 = 1e-3;
    assert!(
        left <= EPS && top <= EPS && right >= 100.0 - EPS && bottom >= 100.0 - EPS,
        "under-cover at image {image_ratio} container {container_ratio} zoom {zoom} \
         offset ({x}, {y}): box ({left}, {top}, {right}, {bottom})"
    );
}

const IMAGE_RATIOS: [f32; 8] = [0.4, 0.5, 0.75, 1.0, 1.5, 16.0 / 9.0, 2.0, 3.0];
const CONTAINER_RATIOS: [f32; 5] = [0.5, 0.8, 1.0, 4.0 / 3.0, 16.0 / 9.0];

fn zoom_sweep() -> impl Iterator<Item = f32> {
    // 1.00, 1.25, ..., 3.00
    (0..=8).map(|i| 1.0 + i as f32 * 0.25)
}

#[test]
fn cover_holds_across_the_valid_offset_range() {
    for image in IMAGE_RATIOS {
        for container in CONTAINER_RATIOS {
            for zoom in zoom_sweep() {
                let bounds = OffsetBounds::compute(image, container, zoom);
                // Sample each axis at the boundary, partway, and center.
                let xs = [-bounds.x, -bounds.x / 2.0, 0.0, bounds.x / 2.0, bounds.x];
                let ys = [-bounds.y, -bounds.y / 2.0, 0.0, bounds.y / 2.0, bounds.y];
                for x in xs {
                    for y in ys {
                        assert_covers(image, container, zoom, x, y);
                    }
                }
            }
        }
    }
}

#[test]
fn boundary_offset_touches_the_container_edge() {
    // At |offset_x| = max the trailing image edge lands exactly on the
    // container edge — cover with equality, never slack at the boundary.
    for image in IMAGE_RATIOS {
        for container in CONTAINER_RATIOS {
            for zoom in zoom_sweep() {
                let bounds = OffsetBounds::compute(image, container, zoom);
                if bounds.x > 0.0 {
                    let (left, _, _, _) = rendered_box(image, container, zoom, bounds.x, 0.0);
                    assert!(left.abs() < 1e-3, "left edge {left} should touch 0");
                }
                if bounds.y > 0.0 {
                    let (_, top, _, _) = rendered_box(image, container, zoom, 0.0, bounds.y);
                    assert!(top.abs() < 1e-3, "top edge {top} should touch 0");
                }
            }
        }
    }
}

#[test]
fn clamping_is_idempotent_everywhere() {
    for image in IMAGE_RATIOS {
        for container in CONTAINER_RATIOS {
            for zoom in zoom_sweep() {
                let bounds = OffsetBounds::compute(image, container, zoom);
                for raw in [-500.0, -37.5, 0.0, 12.0, 80.0, 1e6] {
                    let once = bounds.clamp(Axis::X, raw);
                    assert_eq!(bounds.clamp(Axis::X, once), once);
                    let t = Transform::new(zoom, raw, raw).reconcile(&bounds);
                    assert_eq!(t.reconcile(&bounds), t);
                }
            }
        }
    }
}

#[test]
fn bounce_back_clamps_to_the_shrunken_boundary() {
    // An offset valid at a higher zoom snaps to the new boundary, sign
    // preserved, when the zoom drops below what that offset needs.
    for image in IMAGE_RATIOS {
        for container in CONTAINER_RATIOS {
            let wide = OffsetBounds::compute(image, container, 3.0);
            if wide.x == 0.0 {
                continue; // ratios match; no travel at any zoom
            }
            for sign in [1.0f32, -1.0] {
                let offset = sign * wide.x;
                for lower in [1.0, 1.5, 2.0] {
                    let narrow = OffsetBounds::compute(image, container, lower);
                    let t = Transform::new(lower, offset, 0.0).reconcile(&narrow);
                    if offset.abs() > narrow.x {
                        assert_eq!(t.offset_x, sign * narrow.x);
                    } else {
                        assert_eq!(t.offset_x, offset);
                    }
                }
            }
        }
    }
}

#[test]
fn symmetry_of_the_tight_dimension_rule() {
    // Swapping which ratio is larger (inverting both) swaps the axes but
    // yields identical travel: the construction covers in both regimes.
    for image in IMAGE_RATIOS {
        for container in CONTAINER_RATIOS {
            for zoom in zoom_sweep() {
                let x = max_offset(Axis::X, image, container, zoom);
                let y = max_offset(Axis::Y, 1.0 / image, 1.0 / container, zoom);
                assert!(
                    (x - y).abs() < 1e-2,
                    "image {image} container {container} zoom {zoom}: {x} vs {y}"
                );
            }
        }
    }
}

#[test]
fn zoom_domain_is_closed_under_any_request() {
    let mut editor = Editor::new(Transform::identity());
    editor.update(Input::ImageLoaded { width: 2000.0, height: 1000.0 });
    editor.update(Input::ContainerResized { width: 300.0, height: 300.0 });
    for request in [10.0, -1.0, 0.0, 2.2, f32::NAN, f32::INFINITY, 1e-9] {
        editor.update(Input::SetZoom(request));
        let zoom = editor.transform().zoom;
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom), "request {request} stored {zoom}");
    }
    // Wheel spam never escapes the domain either.
    for _ in 0..100 {
        editor.update(Input::Wheel { steps: 3 });
    }
    assert_eq!(editor.transform().zoom, MAX_ZOOM);
    for _ in 0..100 {
        editor.update(Input::Wheel { steps: -3 });
    }
    assert_eq!(editor.transform().zoom, MIN_ZOOM);
}

// ---- Fixed numeric scenarios ----

#[test]
fn landscape_two_to_one_in_square_at_zoom_one() {
    // fitToHeight: 200% × 100% → maxOffsetX 50, maxOffsetY 0.
    assert_eq!(fill_percentages(2.0, 1.0, 1.0), (200.0, 100.0));
    let bounds = OffsetBounds::compute(2.0, 1.0, 1.0);
    assert_eq!((bounds.x, bounds.y), (50.0, 0.0));
    assert_eq!(bounds.clamp(Axis::X, 80.0), 50.0);
    for y in [-100.0, -1.0, 0.5, 77.0] {
        assert_eq!(bounds.clamp(Axis::Y, y), 0.0);
    }
}

#[test]
fn landscape_two_to_one_in_square_at_zoom_two() {
    // 400% × 200% → maxOffsetX 150, maxOffsetY 50.
    assert_eq!(fill_percentages(2.0, 1.0, 2.0), (400.0, 200.0));
    let bounds = OffsetBounds::compute(2.0, 1.0, 2.0);
    assert_eq!((bounds.x, bounds.y), (150.0, 50.0));
}

#[test]
fn undefined_image_ratio_locks_and_zeroes() {
    // No image measurement: zero travel at every zoom, and the next
    // re-clamp pass reports previously set offsets as 0.
    for zoom in zoom_sweep() {
        assert_eq!(OffsetBounds::from_ratios(None, zoom), OffsetBounds::ZERO);
    }
    let mut editor = Editor::new(Transform::new(1.0, 35.0, -12.0));
    editor.update(Input::ContainerResized { width: 300.0, height: 300.0 });
    editor.update(Input::Wheel { steps: 1 }); // any mutation re-clamps
    assert_eq!(editor.transform().offset_x, 0.0);
    assert_eq!(editor.transform().offset_y, 0.0);
}
