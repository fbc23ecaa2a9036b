// src/geometry.rs

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

use crate::error::{ClipError, Result};

/// Capacity of [`Polygon`]. Two convex quadrilaterals intersect in at most 8 vertices.
pub const MAX_VERTICES: usize = 8;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// Read access shared by every vertex container the clipper accepts.
///
/// Vertices are expected in clockwise order; `area` is sign-agnostic but the
/// clipper's inside test is not.
pub trait PolygonVertices {
    /// The live vertices, in order.
    fn vertices(&self) -> &[Point];

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }

    fn vertex(&self, index: usize) -> Result<Point> {
        let vertices = self.vertices();
        vertices
            .get(index)
            .copied()
            .ok_or(ClipError::IndexOutOfRange { index, len: vertices.len() })
    }

    /// Area by fan triangulation from the first vertex. Only meaningful for
    /// simple polygons.
    fn area(&self) -> Result<f64> {
        let v = self.vertices();
        if v.len() < 3 {
            return Err(ClipError::InsufficientVertices { count: v.len() });
        }
        let origin = v[0];
        let area: f64 = v[1..]
            .windows(2)
            .map(|pair| {
                let (a, b) = (pair[0], pair[1]);
                0.5 * (origin.x * (a.y - b.y) + a.x * (b.y - origin.y) + b.x * (origin.y - a.y))
                    .abs()
            })
            .sum();
        Ok(area)
    }

    /// Mean of the vertex coordinates. This is not the area-weighted centroid;
    /// the two agree for rectangles and other centrally symmetric shapes.
    fn centroid(&self) -> Result<Point> {
        let v = self.vertices();
        if v.len() < 3 {
            return Err(ClipError::InsufficientVertices { count: v.len() });
        }
        let sum = v
            .iter()
            .fold(DVec2::ZERO, |acc, p| acc + DVec2::from(*p));
        Ok(Point::from(sum / v.len() as f64))
    }
}

/// Ordered point sequence with a fixed maximum length of `N`.
///
/// Only the first `len()` slots are meaningful; anything past them is stale
/// data from earlier use and is never read.
#[derive(Clone, Copy, Debug)]
pub struct BoundedPolygon<const N: usize> {
    vertices: [Point; N],
    count: usize,
}

/// General-purpose clip buffer.
pub type Polygon = BoundedPolygon<MAX_VERTICES>;

impl<const N: usize> BoundedPolygon<N> {
    pub fn new() -> Self {
        Self {
            vertices: [Point::ORIGIN; N],
            count: 0,
        }
    }

    pub fn from_points(points: &[Point]) -> Result<Self> {
        let mut polygon = Self::new();
        polygon.copy_from(points)?;
        Ok(polygon)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn append(&mut self, point: Point) -> Result<()> {
        if self.count >= N {
            return Err(ClipError::CapacityExceeded { capacity: N });
        }
        self.vertices[self.count] = point;
        self.count += 1;
        Ok(())
    }

    pub fn push_xy(&mut self, x: f64, y: f64) -> Result<()> {
        self.append(Point::new(x, y))
    }

    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Replaces the contents with `points`. On error the polygon is left untouched.
    pub fn copy_from(&mut self, points: &[Point]) -> Result<()> {
        if points.len() > N {
            return Err(ClipError::CapacityExceeded { capacity: N });
        }
        self.vertices[..points.len()].copy_from_slice(points);
        self.count = points.len();
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.vertices[..self.count].iter()
    }

    /// Live vertices as interleaved `x, y` coordinates.
    pub fn as_flat(&self) -> &[f64] {
        bytemuck::cast_slice(&self.vertices[..self.count])
    }
}

impl<const N: usize> Default for BoundedPolygon<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PolygonVertices for BoundedPolygon<N> {
    fn vertices(&self) -> &[Point] {
        &self.vertices[..self.count]
    }
}

impl<const N: usize> PartialEq for BoundedPolygon<N> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices() == other.vertices()
    }
}

impl<'a, const N: usize> IntoIterator for &'a BoundedPolygon<N> {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
