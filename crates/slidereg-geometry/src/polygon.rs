use crate::point::Point2;
use crate::rect::Rect;

/// An ordered, closed sequence of vertices.
///
/// No implicit closing edge is stored beyond the explicit vertex list. The
/// empty polygon (zero vertices) is the degenerate case produced by empty
/// rectangles; every transform routine passes it through unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Create a polygon from an ordered vertex list.
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// The empty polygon.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Convert an axis-aligned rectangle to a four-vertex polygon.
    ///
    /// Vertices are ordered (minX,maxY), (maxX,maxY), (maxX,minY),
    /// (minX,minY) — top-left first in the inverted-y image convention,
    /// proceeding clockwise. An empty rectangle yields an empty polygon.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidereg_geometry::{Polygon, Rect};
    ///
    /// let poly = Polygon::from_rect(&Rect::new(0.0, 0.0, 2.0, 3.0));
    /// assert_eq!(poly.len(), 4);
    /// assert!(Polygon::from_rect(&Rect::empty()).is_empty());
    /// ```
    pub fn from_rect(rect: &Rect) -> Self {
        if rect.is_empty() {
            return Self::empty();
        }
        Self::new(vec![
            Point2::new(rect.min_x(), rect.max_y()),
            Point2::new(rect.max_x(), rect.max_y()),
            Point2::new(rect.max_x(), rect.min_y()),
            Point2::new(rect.min_x(), rect.min_y()),
        ])
    }

    /// The ordered vertices.
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Build a new polygon by mapping every vertex, preserving order and
    /// count.
    pub fn map_vertices<F>(&self, f: F) -> Polygon
    where
        F: Fn(Point2) -> Point2,
    {
        Polygon::new(self.vertices.iter().copied().map(f).collect())
    }

    /// The axis-aligned bounding rectangle of the vertices.
    ///
    /// Empty polygon yields an empty rectangle.
    pub fn bounding_rect(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::empty();
        };
        let mut min = *first;
        let mut max = *first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Rect::from_min_max(min, max)
    }
}
