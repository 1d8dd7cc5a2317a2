//! Reframing: carrying points and polygons from one image's pixel space into
//! another's, correcting only for pixel-size ratio and the disagreement
//! between the two images' center conventions. Placement rotation and scale
//! are deliberately not applied here; see [`crate::compose`] for the full
//! composition.

use crate::point::{Point2, Size2};
use crate::polygon::Polygon;
use crate::rect::Rect;
use crate::transform::SrtTransform;

/// The geometric description of one image's coordinate frame: its placement
/// transform, the intrinsic physical size of one pixel, and its pixel grid
/// dimensions at full resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageFrame {
    /// User-adjustable placement from raw pixel space to the displayed frame.
    pub placement: SrtTransform,
    /// Intrinsic physical size of one pixel (x, y), from image metadata.
    pub pixel_size: Size2,
    /// Full-resolution pixel grid dimensions (width, height).
    pub pixel_dims: (u32, u32),
}

impl ImageFrame {
    /// The image's full-resolution bounding rectangle in its own raw pixel
    /// space.
    pub fn footprint(&self) -> Rect {
        Rect::new(0.0, 0.0, self.pixel_dims.0 as f64, self.pixel_dims.1 as f64)
    }
}

/// Resolve an image's effective center in physical units.
///
/// Viewers sometimes store a placement center of (0, 0) when no center was
/// ever recorded. Each axis is treated independently: a stored coordinate of
/// exactly zero is replaced by half the image's physical extent on that axis
/// (`pixel_size * pixel_dims / 2`), otherwise the stored value is used
/// verbatim. A legitimately placed center at exactly the origin is
/// indistinguishable from "unset" and is silently overridden.
pub fn resolve_center(frame: &ImageFrame) -> Point2 {
    let center = frame.placement.center;
    let x = if center.x == 0.0 {
        frame.pixel_size.width * frame.pixel_dims.0 as f64 / 2.0
    } else {
        center.x
    };
    let y = if center.y == 0.0 {
        frame.pixel_size.height * frame.pixel_dims.1 as f64 / 2.0
    } else {
        center.y
    };
    Point2::new(x, y)
}

/// The offset between two images' resolved centers, expressed in `target`'s
/// pixel units.
///
/// Both centers are resolved via [`resolve_center`] (physical units),
/// subtracted `target − initial` per axis, and divided by `target`'s intrinsic
/// pixel size. Placement rotation and scale do not participate; this captures
/// only the translational disagreement between the two center conventions.
pub fn center_offset(initial: &ImageFrame, target: &ImageFrame) -> Point2 {
    let initial_center = resolve_center(initial);
    let target_center = resolve_center(target);
    Point2::new(
        (target_center.x - initial_center.x) / target.pixel_size.width,
        (target_center.y - initial_center.y) / target.pixel_size.height,
    )
}

/// Express a point given in `initial`'s pixel space in `target`'s pixel space.
///
/// Corrects for the pixel-size ratio and the center offset only — a
/// translation-only reframe used where placement rotation/scale is not
/// relevant (overlay anchoring and the like).
pub fn reframe_point(p: Point2, initial: &ImageFrame, target: &ImageFrame) -> Point2 {
    let offset = center_offset(initial, target);
    Point2::new(
        p.x * initial.pixel_size.width / target.pixel_size.width + offset.x,
        p.y * initial.pixel_size.height / target.pixel_size.height + offset.y,
    )
}

/// Reframe every vertex of a polygon via [`reframe_point`], preserving vertex
/// order and count. Empty in, empty out.
pub fn reframe_polygon(poly: &Polygon, initial: &ImageFrame, target: &ImageFrame) -> Polygon {
    poly.map_vertices(|p| reframe_point(p, initial, target))
}
