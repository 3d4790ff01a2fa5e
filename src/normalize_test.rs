#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn plot() -> PlotDimensions {
    PlotDimensions { width: 1000.0, height: 800.0 }
}

// --- basic mapping ---

#[test]
fn single_room_fills_the_plot() {
    let raw = RawLayout(vec![Room::rect("room1", 0.0, 0.0, 100.0, 100.0)]);
    let rooms = normalize(raw, plot());
    assert_eq!(rooms.len(), 1);
    let b = rooms[0].bounds().unwrap();
    assert_eq!(b.min_x, 0.0);
    assert_eq!(b.min_y, 0.0);
    assert_eq!(b.max_x, 1000.0);
    assert_eq!(b.max_y, 800.0);
}

#[test]
fn offset_coordinates_are_shifted_to_origin() {
    let raw = RawLayout(vec![Room::rect("r", 50.0, 70.0, 100.0, 100.0)]);
    let rooms = normalize(raw, plot());
    let b = rooms[0].bounds().unwrap();
    assert_eq!(b.min_x, 0.0);
    assert_eq!(b.min_y, 0.0);
    assert_eq!(b.max_x, 1000.0);
    assert_eq!(b.max_y, 800.0);
}

#[test]
fn union_of_rooms_spans_the_plot() {
    let raw = RawLayout(vec![
        Room::rect("a", 0.0, 0.0, 50.0, 40.0),
        Room::rect("b", 150.0, 60.0, 50.0, 40.0),
    ]);
    let rooms = normalize(raw, plot());
    // Union spans 0..200 x 0..100.
    let a = rooms[0].bounds().unwrap();
    assert_eq!(a.min_x, 0.0);
    assert!(approx_eq(a.max_x, 250.0)); // 50/200 * 1000
    assert!(approx_eq(a.max_y, 320.0)); // 40/100 * 800
    let b = rooms[1].bounds().unwrap();
    assert!(approx_eq(b.min_x, 750.0));
    assert!(approx_eq(b.max_x, 1000.0));
    assert!(approx_eq(b.max_y, 800.0));
}

#[test]
fn axes_are_fitted_independently() {
    // A wide, flat strip: aspect ratio is not preserved.
    let raw = RawLayout(vec![Room::rect("strip", 0.0, 0.0, 1000.0, 10.0)]);
    let rooms = normalize(raw, plot());
    let b = rooms[0].bounds().unwrap();
    assert!(approx_eq(b.max_x, 1000.0));
    assert!(approx_eq(b.max_y, 800.0));
}

#[test]
fn names_and_point_counts_survive() {
    let raw = RawLayout(vec![Room::new(
        "kitchen",
        vec![
            Point::new(165.0, 187.0),
            Point::new(106.0, 187.0),
            Point::new(106.0, 157.0),
            Point::new(121.0, 157.0),
            Point::new(121.0, 143.0),
            Point::new(165.0, 143.0),
        ],
    )]);
    let rooms = normalize(raw, plot());
    assert_eq!(rooms[0].name, "kitchen");
    assert_eq!(rooms[0].points.len(), 6);
}

// --- degenerate extents ---

#[test]
fn zero_width_layout_collapses_to_a_strip() {
    // All points share x = 5; the denominator substitution keeps the map
    // finite.
    let raw = RawLayout(vec![Room::new(
        "line",
        vec![Point::new(5.0, 0.0), Point::new(5.0, 10.0), Point::new(5.0, 20.0)],
    )]);
    let rooms = normalize(raw, plot());
    for p in &rooms[0].points {
        assert_eq!(p.x, 0.0);
        assert!(p.x.is_finite());
    }
    assert_eq!(rooms[0].points[2].y, 800.0);
}

#[test]
fn single_point_layout_maps_to_origin() {
    let raw = RawLayout(vec![Room::new("dot", vec![Point::new(42.0, 17.0)])]);
    let rooms = normalize(raw, plot());
    assert_eq!(rooms[0].points[0], Point::new(0.0, 0.0));
}

// --- empty inputs ---

#[test]
fn empty_layout_maps_to_empty_layout() {
    let rooms = normalize(RawLayout::default(), plot());
    assert!(rooms.is_empty());
}

#[test]
fn pointless_rooms_pass_through() {
    let raw = RawLayout(vec![Room::new("bare", vec![])]);
    let rooms = normalize(raw, plot());
    assert_eq!(rooms.len(), 1);
    assert!(rooms[0].points.is_empty());
}

// --- invalid rooms still contribute to the union ---

#[test]
fn invalid_rooms_are_normalized_too() {
    let raw = RawLayout(vec![
        Room::rect("valid", 0.0, 0.0, 100.0, 100.0),
        Room::new("stub", vec![Point::new(200.0, 200.0)]),
    ]);
    let rooms = normalize(raw, plot());
    // The stub's far point defines the union corner and lands on the plot
    // corner.
    assert_eq!(rooms[1].points[0], Point::new(1000.0, 800.0));
    // The valid room now covers only half the plot.
    assert_eq!(rooms[0].bounds().unwrap().max_x, 500.0);
}
