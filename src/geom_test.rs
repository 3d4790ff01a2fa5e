#![allow(clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_serializes_as_pair() {
    let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
    assert_eq!(json, "[1.5,-2.0]");
}

#[test]
fn point_deserializes_from_pair() {
    let p: Point = serde_json::from_str("[10, 20]").unwrap();
    assert_eq!(p, Point::new(10.0, 20.0));
}

#[test]
fn point_serde_roundtrip() {
    let p = Point::new(123.456, -789.012);
    let back: Point = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
    assert_eq!(back, p);
}

#[test]
fn point_rejects_triple() {
    assert!(serde_json::from_str::<Point>("[1, 2, 3]").is_err());
}

// --- Bounds ---

#[test]
fn bounds_of_empty_is_none() {
    assert!(Bounds::of(std::iter::empty::<Point>()).is_none());
}

#[test]
fn bounds_of_single_point_is_degenerate() {
    let b = Bounds::of([Point::new(5.0, 7.0)]).unwrap();
    assert_eq!(b.min_x, 5.0);
    assert_eq!(b.max_x, 5.0);
    assert_eq!(b.width(), 0.0);
    assert_eq!(b.height(), 0.0);
}

#[test]
fn bounds_of_scattered_points() {
    let b = Bounds::of([
        Point::new(10.0, -5.0),
        Point::new(-3.0, 8.0),
        Point::new(4.0, 2.0),
    ])
    .unwrap();
    assert_eq!(b.min_x, -3.0);
    assert_eq!(b.max_x, 10.0);
    assert_eq!(b.min_y, -5.0);
    assert_eq!(b.max_y, 8.0);
    assert_eq!(b.width(), 13.0);
    assert_eq!(b.height(), 13.0);
}

// --- centroid ---

#[test]
fn centroid_of_empty_is_none() {
    assert!(centroid(&[]).is_none());
}

#[test]
fn centroid_of_square_is_center() {
    let c = centroid(&[
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ])
    .unwrap();
    assert_eq!(c, Point::new(50.0, 50.0));
}

#[test]
fn centroid_of_single_point_is_that_point() {
    assert_eq!(centroid(&[Point::new(7.0, 9.0)]).unwrap(), Point::new(7.0, 9.0));
}

// --- PlotDimensions ---

#[test]
fn plot_dimensions_default() {
    let plot = PlotDimensions::default();
    assert_eq!(plot.width, 1000.0);
    assert_eq!(plot.height, 800.0);
}

#[test]
fn plot_dimensions_clamped_raises_small_axes() {
    let plot = PlotDimensions::clamped(50.0, 3000.0);
    assert_eq!(plot.width, 100.0);
    assert_eq!(plot.height, 3000.0);
}

#[test]
fn plot_dimensions_clamped_keeps_large_axes() {
    let plot = PlotDimensions::clamped(1000.0, 800.0);
    assert_eq!(plot.width, 1000.0);
    assert_eq!(plot.height, 800.0);
}
