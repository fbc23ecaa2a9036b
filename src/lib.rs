// src/lib.rs

pub mod error;
pub mod generator;
pub mod geometry;
pub mod intersection;
pub mod rectangle;

pub use error::{ClipError, Result};
pub use generator::RectangleGenerator;
pub use geometry::{BoundedPolygon, Point, Polygon, PolygonVertices, MAX_VERTICES};
pub use intersection::{clip_step, convex_clip, intersect, line_intersect};
pub use rectangle::Rectangle;
