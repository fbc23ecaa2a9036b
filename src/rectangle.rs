// src/rectangle.rs

use glam::{DMat2, DVec2};

use crate::error::{ClipError, Result};
use crate::geometry::{BoundedPolygon, Point, PolygonVertices};

/// A rotated rectangle whose four vertices are derived from its center, size
/// and rotation. The vertices are regenerated on every [`Rectangle::set`], so
/// they always match the parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    polygon: BoundedPolygon<4>,
    center_x: f64,
    center_y: f64,
    width: f64,
    height: f64,
    angle_degrees: f64,
}

impl Rectangle {
    pub fn new(center_x: f64, center_y: f64, width: f64, height: f64, angle_degrees: f64) -> Result<Self> {
        let mut rect = Self {
            polygon: BoundedPolygon::new(),
            center_x: 0.0,
            center_y: 0.0,
            width: 0.0,
            height: 0.0,
            angle_degrees: 0.0,
        };
        rect.set(center_x, center_y, width, height, angle_degrees)?;
        Ok(rect)
    }

    /// Rewrites all five parameters and regenerates the vertices.
    ///
    /// `angle_degrees` must lie in `[0, 360)`. On error nothing is modified.
    pub fn set(
        &mut self,
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
        angle_degrees: f64,
    ) -> Result<()> {
        if !(0.0..360.0).contains(&angle_degrees) {
            log::warn!("rejecting rectangle angle {angle_degrees}");
            return Err(ClipError::InvalidAngle { angle: angle_degrees });
        }

        let (hw, hh) = (width / 2.0, height / 2.0);
        // Clockwise for a y-up frame.
        let local = [
            DVec2::new(-hw, -hh),
            DVec2::new(-hw, hh),
            DVec2::new(hw, hh),
            DVec2::new(hw, -hh),
        ];
        let rotation = DMat2::from_angle(angle_degrees.to_radians());
        let center = DVec2::new(center_x, center_y);
        let corners = local.map(|corner| Point::from(rotation * corner + center));

        self.polygon.copy_from(&corners)?;
        self.center_x = center_x;
        self.center_y = center_y;
        self.width = width;
        self.height = height;
        self.angle_degrees = angle_degrees;
        Ok(())
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    pub fn polygon(&self) -> &BoundedPolygon<4> {
        &self.polygon
    }
}

impl Default for Rectangle {
    /// Zero-sized rectangle at the origin: four vertices, all at `(0, 0)`.
    fn default() -> Self {
        Self {
            polygon: BoundedPolygon::from_points(&[Point::ORIGIN; 4]).unwrap_or_default(),
            center_x: 0.0,
            center_y: 0.0,
            width: 0.0,
            height: 0.0,
            angle_degrees: 0.0,
        }
    }
}

impl PolygonVertices for Rectangle {
    fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }
}
