//! Bezier curve flattening
//!
//! Curves are sampled at a fixed parametric step, independent of their
//!   length or curvature.

use crate::path_storage::Point;

/// Parametric step between samples
pub const CURVE_STEP : f64 = 0.005;

/// Number of samples per curve, including both end points
pub const CURVE_SAMPLES : usize = 201;

/// Sample parameters `0`, `CURVE_STEP`, ... `1`
fn steps() -> impl Iterator<Item = f64> {
    let n = (1.0 / CURVE_STEP).round();
    (0 .. CURVE_SAMPLES).map(move |i| i as f64 / n)
}

/// Sample a quadratic Bezier curve
///
///     use svgpix::{flatten_quadratic,Point,CURVE_SAMPLES};
///
///     let pts = flatten_quadratic(Point::new(0.,0.), Point::new(50.,100.), Point::new(100.,0.));
///     assert_eq!(pts.len(), CURVE_SAMPLES);
///     assert_eq!(pts[100], Point::new(50.,50.));
///
pub fn flatten_quadratic(p0: Point, p1: Point, p2: Point) -> Vec<Point> {
    steps().map(|t| {
        let u = 1.0 - t;
        let (a, b, c) = (u * u, 2.0 * u * t, t * t);
        Point::new(a * p0.x + b * p1.x + c * p2.x,
                   a * p0.y + b * p1.y + c * p2.y)
    }).collect()
}

/// Sample a cubic Bezier curve
pub fn flatten_cubic(p0: Point, p1: Point, p2: Point, p3: Point) -> Vec<Point> {
    steps().map(|t| {
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        Point::new(a * p0.x + b * p1.x + c * p2.x + d * p3.x,
                   a * p0.y + b * p1.y + c * p2.y + d * p3.y)
    }).collect()
}
