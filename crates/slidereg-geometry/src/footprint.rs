//! Footprint overlap between two images expressed in one common frame.

use crate::compose::transform_polygon;
use crate::polygon::Polygon;
use crate::rect::Rect;
use crate::reframe::{reframe_polygon, ImageFrame};

/// The result of carrying one image's footprint into another's space.
#[derive(Clone, Debug, PartialEq)]
pub struct FootprintOverlap {
    /// `initial`'s footprint outline expressed in `target`'s displayed space,
    /// suitable for overlay rendering.
    pub outline: Polygon,
    /// Axis-aligned overlap between the carried outline and `target`'s own
    /// footprint, in `target`'s pixel space. Empty when the images do not
    /// overlap spatially — a recognized state, not an error.
    pub intersection: Rect,
}

/// Carry `initial`'s full-resolution footprint into `target`'s space and
/// intersect it with `target`'s footprint.
///
/// The footprint rectangle is converted to a polygon, reframed for pixel-size
/// and center disagreement, then carried through the full placement
/// composition. The overlap is computed between the carried outline's
/// axis-aligned bounding rectangle and `target`'s footprint.
pub fn footprint_overlap(initial: &ImageFrame, target: &ImageFrame) -> FootprintOverlap {
    let footprint = Polygon::from_rect(&initial.footprint());
    let reframed = reframe_polygon(&footprint, initial, target);
    let outline = transform_polygon(&reframed, initial, target);
    let intersection = outline.bounding_rect().intersect(&target.footprint());
    FootprintOverlap {
        outline,
        intersection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{Point2, Size2};
    use crate::transform::SrtTransform;

    fn plain_frame(width: u32, height: u32) -> ImageFrame {
        ImageFrame {
            placement: SrtTransform::identity(),
            pixel_size: Size2::unit(),
            pixel_dims: (width, height),
        }
    }

    #[test]
    fn identical_frames_fully_overlap() {
        let f = plain_frame(100, 80);
        let overlap = footprint_overlap(&f, &f);
        assert_eq!(overlap.outline.len(), 4);
        assert_eq!(overlap.intersection, f.footprint());
    }

    #[test]
    fn disjoint_frames_have_empty_intersection() {
        // push the initial image far outside the target footprint
        let initial = ImageFrame {
            placement: SrtTransform {
                translation: Point2::new(10_000.0, 10_000.0),
                ..SrtTransform::identity()
            },
            pixel_size: Size2::unit(),
            pixel_dims: (50, 50),
        };
        let target = plain_frame(100, 100);
        let overlap = footprint_overlap(&initial, &target);
        assert_eq!(overlap.outline.len(), 4);
        assert!(overlap.intersection.is_empty());
    }

    #[test]
    fn partial_overlap_is_clipped_to_target_footprint() {
        let initial = ImageFrame {
            placement: SrtTransform {
                translation: Point2::new(75.0, 0.0),
                ..SrtTransform::identity()
            },
            pixel_size: Size2::unit(),
            pixel_dims: (100, 100),
        };
        let target = plain_frame(100, 100);
        let overlap = footprint_overlap(&initial, &target);
        assert!(!overlap.intersection.is_empty());
        assert!(overlap.intersection.max_x() <= target.footprint().max_x() + 1e-9);
        assert!(overlap.intersection.max_y() <= target.footprint().max_y() + 1e-9);
    }
}
