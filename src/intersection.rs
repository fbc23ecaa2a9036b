// src/intersection.rs

use glam::DVec2;

use crate::error::Result;
use crate::geometry::{BoundedPolygon, Point, Polygon, PolygonVertices};

/// Signed position of `point` relative to the directed edge `edge_start -> edge_end`.
/// Negative is inside (right of the edge for clockwise winding in a y-up frame);
/// zero, on the boundary, counts as outside.
#[inline(always)]
fn side(point: Point, edge_start: Point, edge_end: Point) -> f64 {
    let start = DVec2::from(edge_start);
    (DVec2::from(edge_end) - start).perp_dot(DVec2::from(point) - start)
}

/// Intersection of the infinite line through `p1, p2` with the one through `p3, p4`.
///
/// Parallel lines give non-finite coordinates. Callers only ask for crossings
/// they have already detected, but nearly parallel edges can still lose precision.
pub fn line_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> Point {
    let a = p1.x * p2.y - p1.y * p2.x;
    let b = p3.x * p4.y - p3.y * p4.x;
    let den = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    let num_x = a * (p3.x - p4.x) - (p1.x - p2.x) * b;
    let num_y = a * (p3.y - p4.y) - (p1.y - p2.y) * b;
    Point::new(num_x / den, num_y / den)
}

/// Cuts `polygon` by the half-plane of one clip edge.
///
/// `scratch` is cleared, filled with the cut polygon and then copied back into
/// `polygon`; nothing in it is read before being written.
pub fn clip_step<const N: usize>(
    polygon: &mut BoundedPolygon<N>,
    edge_start: Point,
    edge_end: Point,
    scratch: &mut BoundedPolygon<N>,
) -> Result<()> {
    scratch.clear();

    let vertices = polygon.vertices();
    let count = vertices.len();
    for i in 0..count {
        let current = vertices[i];
        let next = vertices[(i + 1) % count];

        let current_inside = side(current, edge_start, edge_end) < 0.0;
        let next_inside = side(next, edge_start, edge_end) < 0.0;

        match (current_inside, next_inside) {
            (true, true) => scratch.append(next)?,
            (false, true) => {
                scratch.append(line_intersect(edge_start, edge_end, current, next))?;
                scratch.append(next)?;
            }
            (true, false) => {
                scratch.append(line_intersect(edge_start, edge_end, current, next))?;
            }
            (false, false) => {}
        }
    }

    polygon.copy_from(scratch.vertices())
}

/// Sutherland-Hodgman intersection of `subject` with the convex `clip` polygon.
///
/// `result` receives the intersection in the subject's winding; fewer than
/// three surviving vertices leave it empty. Both buffers are overwritten before
/// they are read, so they can be reused across calls.
pub fn convex_clip<S, C, const N: usize>(
    subject: &S,
    clip: &C,
    result: &mut BoundedPolygon<N>,
    scratch: &mut BoundedPolygon<N>,
) -> Result<()>
where
    S: PolygonVertices + ?Sized,
    C: PolygonVertices + ?Sized,
{
    result.copy_from(subject.vertices())?;

    let edges = clip.vertices();
    for i in 0..edges.len() {
        let edge_start = edges[i];
        let edge_end = edges[(i + 1) % edges.len()];
        clip_step(result, edge_start, edge_end, scratch)?;
        log::trace!("clip edge {i}: {} vertices remain", result.len());
    }

    if result.len() < 3 {
        if result.len() > 0 {
            log::debug!("discarding degenerate intersection of {} vertices", result.len());
        }
        result.clear();
    }
    Ok(())
}

/// Allocating wrapper around [`convex_clip`] for one-off queries.
pub fn intersect<S, C>(subject: &S, clip: &C) -> Result<Polygon>
where
    S: PolygonVertices + ?Sized,
    C: PolygonVertices + ?Sized,
{
    let mut result = Polygon::new();
    let mut scratch = Polygon::new();
    convex_clip(subject, clip, &mut result, &mut scratch)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipError;
    use crate::rectangle::Rectangle;

    fn square(x0: f64, y0: f64, side: f64) -> Polygon {
        Polygon::from_points(&[
            Point::new(x0, y0),
            Point::new(x0, y0 + side),
            Point::new(x0 + side, y0 + side),
            Point::new(x0 + side, y0),
        ])
        .unwrap()
    }

    #[test]
    fn line_intersect_crossing_lines() {
        let p = line_intersect(
            Point::new(1.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 2.0),
        );
        assert_eq!(p, Point::new(1.0, 2.0));

        let diag = line_intersect(
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(4.0, 0.0),
        );
        assert_eq!(diag, Point::new(2.0, 2.0));
    }

    #[test]
    fn line_intersect_parallel_is_not_finite() {
        let p = line_intersect(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        );
        assert!(!p.x.is_finite() || !p.y.is_finite());
    }

    #[test]
    fn side_treats_boundary_as_outside() {
        let (a, b) = (Point::new(0.0, 0.0), Point::new(0.0, 1.0));
        assert!(side(Point::new(1.0, 0.5), a, b) < 0.0);
        assert!(side(Point::new(-1.0, 0.5), a, b) > 0.0);
        assert_eq!(side(Point::new(0.0, 5.0), a, b), 0.0);
    }

    #[test]
    fn clip_step_keeps_right_half() {
        let mut poly = square(0.0, 0.0, 2.0);
        let mut scratch = Polygon::new();
        clip_step(&mut poly, Point::new(1.0, 0.0), Point::new(1.0, 2.0), &mut scratch).unwrap();
        assert_eq!(
            poly.vertices(),
            &[
                Point::new(1.0, 2.0),
                Point::new(2.0, 2.0),
                Point::new(2.0, 0.0),
                Point::new(1.0, 0.0),
            ]
        );
        assert!((poly.area().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn clip_step_fully_outside_empties() {
        let mut poly = square(0.0, 0.0, 2.0);
        let mut scratch = Polygon::new();
        // Inside is x > 5 for this upward edge.
        clip_step(&mut poly, Point::new(5.0, 0.0), Point::new(5.0, 1.0), &mut scratch).unwrap();
        assert!(poly.is_empty());
    }

    #[test]
    fn clip_step_reports_scratch_overflow() {
        let mut poly = BoundedPolygon::<4>::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 0.0),
        ])
        .unwrap();
        let mut scratch = BoundedPolygon::<4>::new();
        // Cutting a corner off a square yields five vertices.
        let result = clip_step(
            &mut poly,
            Point::new(0.0, 1.0),
            Point::new(1.0, 2.0),
            &mut scratch,
        );
        assert_eq!(result, Err(ClipError::CapacityExceeded { capacity: 4 }));
    }

    #[test]
    fn overlapping_squares() {
        let a = square(0.0, 0.0, 4.0);
        let b = square(2.0, 2.0, 4.0);
        let out = intersect(&a, &b).unwrap();
        assert_eq!(out.len(), 4);
        assert!((out.area().unwrap() - 4.0).abs() < 1e-12);
        assert_eq!(out.centroid().unwrap(), Point::new(3.0, 3.0));
    }

    #[test]
    fn contained_subject_is_unchanged() {
        let inner = Rectangle::new(0.0, 0.0, 2.0, 2.0, 30.0).unwrap();
        let outer = Rectangle::new(0.0, 0.0, 10.0, 10.0, 0.0).unwrap();
        let out = intersect(&inner, &outer).unwrap();
        assert_eq!(out.vertices().len(), 4);
        for (got, want) in out.iter().zip(inner.vertices()) {
            assert!((got.x - want.x).abs() < 1e-12 && (got.y - want.y).abs() < 1e-12);
        }
    }

    #[test]
    fn oversized_subject_is_rejected() {
        let mut big = BoundedPolygon::<12>::new();
        for i in 0..9 {
            let angle = -(i as f64) * std::f64::consts::TAU / 9.0;
            big.push_xy(angle.cos(), angle.sin()).unwrap();
        }
        let clip = Rectangle::new(0.0, 0.0, 1.0, 1.0, 0.0).unwrap();
        let mut result = Polygon::new();
        let mut scratch = Polygon::new();
        assert_eq!(
            convex_clip(&big, &clip, &mut result, &mut scratch),
            Err(ClipError::CapacityExceeded { capacity: 8 })
        );
    }

    #[test]
    fn empty_clip_polygon_passes_subject_through() {
        let subject = square(0.0, 0.0, 1.0);
        let out = intersect(&subject, &Polygon::new()).unwrap();
        assert_eq!(out, subject);
    }
}
