use approx::assert_relative_eq;
use graph_rs::core::{Point, Projection, ScreenSize, WorldViewport};

#[test]
fn world_to_screen_matches_reference_corners() {
    let viewport = WorldViewport::default();
    let screen = ScreenSize::new(500, 400);

    let (sx, sy) = viewport
        .world_to_screen(Point::new(-10.0, -10.0), screen)
        .expect("mapping");
    assert_relative_eq!(sx, 0.0);
    assert_relative_eq!(sy, 400.0);

    let (sx, sy) = viewport
        .world_to_screen(Point::new(10.0, 10.0), screen)
        .expect("mapping");
    assert_relative_eq!(sx, 500.0);
    assert_relative_eq!(sy, 0.0);

    let (sx, sy) = viewport
        .world_to_screen(Point::new(0.0, 0.0), screen)
        .expect("mapping");
    assert_relative_eq!(sx, 250.0);
    assert_relative_eq!(sy, 200.0);
}

#[test]
fn screen_y_axis_is_inverted() {
    let viewport = WorldViewport::default();
    let screen = ScreenSize::new(500, 400);

    let (_, top) = viewport
        .world_to_screen(Point::new(0.0, 8.0), screen)
        .expect("mapping");
    let (_, bottom) = viewport
        .world_to_screen(Point::new(0.0, -8.0), screen)
        .expect("mapping");
    assert!(top < bottom);
}

#[test]
fn round_trip_stays_within_tolerance() {
    let viewport = WorldViewport::new(-3.5, 12.25, -0.5, 42.0).expect("valid viewport");
    let screen = ScreenSize::new(800, 600);

    let original = Point::new(4.125, 17.5);
    let (sx, sy) = viewport
        .world_to_screen(original, screen)
        .expect("to screen");
    let recovered = viewport
        .screen_to_world(sx, sy, screen)
        .expect("from screen");

    assert_relative_eq!(recovered.x, original.x, epsilon = 1e-9);
    assert_relative_eq!(recovered.y, original.y, epsilon = 1e-9);
}

#[test]
fn projection_validates_once_then_maps_infallibly() {
    let viewport = WorldViewport::default();
    let projection = Projection::new(viewport, ScreenSize::new(500, 400)).expect("valid inputs");

    let (sx, sy) = projection.world_to_screen(Point::new(5.0, 5.0));
    let recovered = projection.screen_to_world(sx, sy);
    assert_relative_eq!(recovered.x, 5.0, epsilon = 1e-9);
    assert_relative_eq!(recovered.y, 5.0, epsilon = 1e-9);
}

#[test]
fn degenerate_viewport_is_rejected() {
    assert!(WorldViewport::new(1.0, 1.0, -1.0, 1.0).is_err());
    assert!(WorldViewport::new(2.0, 1.0, -1.0, 1.0).is_err());
    assert!(WorldViewport::new(-1.0, 1.0, f64::NAN, 1.0).is_err());

    let flat = WorldViewport {
        x_min: 0.0,
        x_max: 0.0,
        y_min: 0.0,
        y_max: 1.0,
    };
    assert!(flat.world_to_screen(Point::new(0.0, 0.0), ScreenSize::default()).is_err());
}

#[test]
fn zero_pixel_screen_is_rejected() {
    let viewport = WorldViewport::default();
    assert!(
        viewport
            .world_to_screen(Point::new(0.0, 0.0), ScreenSize::new(0, 400))
            .is_err()
    );
    assert!(viewport.screen_to_world(1.0, 1.0, ScreenSize::new(500, 0)).is_err());
}

#[test]
fn pan_inverts_horizontal_drag_and_uses_the_baseline() {
    let baseline = WorldViewport::default();
    let screen = ScreenSize::new(500, 400);

    // Drag 50px right, 40px down: window moves left 2 world units and up 2.
    let panned = baseline
        .panned_by_screen_delta(50.0, 40.0, screen)
        .expect("pan");
    assert_relative_eq!(panned.x_min, -12.0, epsilon = 1e-9);
    assert_relative_eq!(panned.x_max, 8.0, epsilon = 1e-9);
    assert_relative_eq!(panned.y_min, -8.0, epsilon = 1e-9);
    assert_relative_eq!(panned.y_max, 12.0, epsilon = 1e-9);

    // Re-deriving a larger delta from the same baseline equals one jump;
    // it does not compound through the intermediate viewport.
    let farther = baseline
        .panned_by_screen_delta(100.0, 80.0, screen)
        .expect("pan");
    let compounded = panned
        .panned_by_screen_delta(50.0, 40.0, screen)
        .expect("pan");
    assert_relative_eq!(farther.x_min, compounded.x_min, epsilon = 1e-9);
    assert_relative_eq!(farther.y_min, compounded.y_min, epsilon = 1e-9);
}

#[test]
fn zoom_in_then_out_is_approximately_identity() {
    let viewport = WorldViewport::new(-4.0, 6.0, -2.0, 3.0).expect("valid viewport");
    let center = viewport.center();

    let zoomed = viewport
        .zoomed_about(0.8, center)
        .expect("zoom in")
        .zoomed_about(1.25, center)
        .expect("zoom out");

    assert_relative_eq!(zoomed.x_min, viewport.x_min, epsilon = 1e-9);
    assert_relative_eq!(zoomed.x_max, viewport.x_max, epsilon = 1e-9);
    assert_relative_eq!(zoomed.y_min, viewport.y_min, epsilon = 1e-9);
    assert_relative_eq!(zoomed.y_max, viewport.y_max, epsilon = 1e-9);
}

#[test]
fn zoom_scales_spans_around_the_center() {
    let viewport = WorldViewport::default();
    let zoomed = viewport
        .zoomed_about(0.5, Point::new(2.0, 2.0))
        .expect("zoom");

    assert_relative_eq!(zoomed.x_span(), 10.0, epsilon = 1e-9);
    assert_relative_eq!(zoomed.y_span(), 10.0, epsilon = 1e-9);
    let center = zoomed.center();
    assert_relative_eq!(center.x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(center.y, 2.0, epsilon = 1e-9);
}

#[test]
fn invalid_zoom_factors_are_rejected() {
    let viewport = WorldViewport::default();
    let center = viewport.center();
    assert!(viewport.zoomed_about(0.0, center).is_err());
    assert!(viewport.zoomed_about(-1.0, center).is_err());
    assert!(viewport.zoomed_about(f64::INFINITY, center).is_err());
    assert!(viewport.zoomed_about(1.0, Point::new(f64::NAN, 0.0)).is_err());
}

#[test]
fn reset_yields_the_fixed_default_range() {
    assert_eq!(
        WorldViewport::reset(),
        WorldViewport {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    );
    assert_eq!(WorldViewport::reset(), WorldViewport::default());
}

#[test]
fn spans_are_unclamped_by_design() {
    // Nothing stops the range from collapsing toward zero or exploding;
    // repeated zooms stay valid as long as floating point keeps min < max.
    let mut viewport = WorldViewport::default();
    for _ in 0..40 {
        viewport = viewport
            .zoomed_about(0.5, viewport.center())
            .expect("zoom in");
    }
    assert!(viewport.is_valid());
    assert!(viewport.x_span() < 1e-7);

    for _ in 0..80 {
        viewport = viewport
            .zoomed_about(2.0, viewport.center())
            .expect("zoom out");
    }
    assert!(viewport.is_valid());
    assert!(viewport.x_span() > 1e7);
}
