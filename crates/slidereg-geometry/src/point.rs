use std::ops;

/// A 2D point in double precision.
///
/// Used for both pixel coordinates and physical (micrometer) coordinates;
/// the surrounding operation defines which frame a point lives in.
///
/// # Examples
///
/// ```
/// use slidereg_geometry::Point2;
///
/// let p = Point2::new(3.0, 4.0);
/// assert_eq!(p.x, 3.0);
/// assert_eq!(p.y, 4.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2 {
    /// Create a new point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl ops::Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from(p: (f64, f64)) -> Self {
        Point2::new(p.0, p.1)
    }
}

/// A 2D extent in double precision, width and height kept independent.
///
/// Also used for per-axis pixel spacing, where `width` is the physical size
/// of one pixel along x and `height` along y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size2 {
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
}

impl Size2 {
    /// Create a new size from its extents.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A unit size, the default pixel spacing when none is recorded.
    pub fn unit() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Default for Size2 {
    fn default() -> Self {
        Self::unit()
    }
}

impl std::fmt::Display for Size2 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

impl From<(f64, f64)> for Size2 {
    fn from(s: (f64, f64)) -> Self {
        Size2::new(s.0, s.1)
    }
}
