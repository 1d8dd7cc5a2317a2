use crate::point::Point2;

/// An axis-aligned rectangle in double precision.
///
/// A rectangle with non-positive width or height is empty; the intersection
/// of two disjoint rectangles is empty. Empty rectangles flow through the
/// geometry routines unchanged rather than erroring.
///
/// # Examples
///
/// ```
/// use slidereg_geometry::Rect;
///
/// let r = Rect::new(10.0, 20.0, 30.0, 40.0);
/// assert_eq!(r.max_x(), 40.0);
/// assert_eq!(r.max_y(), 60.0);
/// assert!(!r.is_empty());
/// assert!(Rect::empty().is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Minimum x coordinate.
    pub x: f64,
    /// Minimum y coordinate.
    pub y: f64,
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its minimum corner and extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The empty rectangle at the origin.
    pub fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Create a rectangle spanning two corner points.
    pub fn from_min_max(min: Point2, max: Point2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Minimum x coordinate.
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Minimum y coordinate.
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Maximum x coordinate.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Maximum y coordinate.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Whether this rectangle encloses no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Intersect with another rectangle.
    ///
    /// Returns the overlapping region, or [`Rect::empty`] when the two
    /// rectangles are disjoint or either input is empty.
    pub fn intersect(&self, other: &Rect) -> Rect {
        if self.is_empty() || other.is_empty() {
            return Rect::empty();
        }
        let min_x = self.min_x().max(other.min_x());
        let min_y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        if max_x <= min_x || max_y <= min_y {
            return Rect::empty();
        }
        Rect::from_min_max(Point2::new(min_x, min_y), Point2::new(max_x, max_y))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rect {{ x: {}, y: {}, width: {}, height: {} }}",
            self.x, self.y, self.width, self.height
        )
    }
}
