//! Full transform composition between two displayed image spaces.
//!
//! A polygon defined in the initial image's raw pixel space is carried into
//! the target image's displayed space by first undoing the target image's own
//! placement (inverse) and then applying the initial image's placement
//! (forward), with translations reinterpreted in the target image's pixel
//! units. This is the companion to [`crate::reframe`], which handles only the
//! translational center disagreement.

use crate::point::Point2;
use crate::polygon::Polygon;
use crate::reframe::ImageFrame;
use crate::transform::{SrtTransform, TransformDirection};

/// Build the composite transform pair carrying geometry from `initial`'s
/// space into `target`'s space.
///
/// Returns `(target_space, initial_space)`, both pivoted at the origin:
///
/// * `target_space` copies `target`'s placement scale and rotation verbatim and
///   rescales its translation into `target`'s pixel units. It is applied to
///   the polygon in the **inverse** direction, undisplaying the target image's
///   own placement.
/// * `initial_space` copies `initial`'s placement scale and rotation verbatim;
///   its translation is rescaled into `target`'s pixel units with the
///   `(scale − 1) * center` pivot correction pre-subtracted, compensating for
///   scaling being pivoted at the placement center rather than the origin.
///   It is applied in the **forward** direction.
pub fn compose_transforms(
    initial: &ImageFrame,
    target: &ImageFrame,
) -> (SrtTransform, SrtTransform) {
    let initial_placement = initial.placement;
    let target_placement = target.placement;
    let target_pixel_size = target.pixel_size;

    let target_space = SrtTransform {
        translation: Point2::new(
            target_placement.translation.x / target_pixel_size.width,
            target_placement.translation.y / target_pixel_size.height,
        ),
        center: Point2::default(),
        scale: target_placement.scale,
        rotation: target_placement.rotation,
    };

    let initial_space = SrtTransform {
        translation: Point2::new(
            initial_placement.translation.x / target_pixel_size.width
                - (initial_placement.scale.width - 1.0) * initial_placement.center.x,
            initial_placement.translation.y / target_pixel_size.height
                - (initial_placement.scale.height - 1.0) * initial_placement.center.y,
        ),
        center: Point2::default(),
        scale: initial_placement.scale,
        rotation: initial_placement.rotation,
    };

    (target_space, initial_space)
}

/// Carry a polygon from `initial`'s raw pixel space into `target`'s displayed
/// space.
///
/// Applies the pair from [`compose_transforms`]: `target_space` inverse first,
/// then `initial_space` forward. The empty polygon is returned unchanged
/// before any transform math.
pub fn transform_polygon(poly: &Polygon, initial: &ImageFrame, target: &ImageFrame) -> Polygon {
    if poly.is_empty() {
        return Polygon::empty();
    }
    let (target_space, initial_space) = compose_transforms(initial, target);
    let undisplayed = target_space.apply_polygon(poly, TransformDirection::Inverse);
    initial_space.apply_polygon(&undisplayed, TransformDirection::Forward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Size2;
    use crate::rect::Rect;
    use approx::assert_relative_eq;
    use rand::Rng;

    fn frame(placement: SrtTransform, pixel_size: Size2) -> ImageFrame {
        ImageFrame {
            placement,
            pixel_size,
            pixel_dims: (100, 100),
        }
    }

    fn assert_polygon_eq(a: &Polygon, b: &Polygon, epsilon: f64) {
        assert_eq!(a.len(), b.len());
        for (va, vb) in a.vertices().iter().zip(b.vertices()) {
            assert_relative_eq!(va.x, vb.x, epsilon = epsilon);
            assert_relative_eq!(va.y, vb.y, epsilon = epsilon);
        }
    }

    #[test]
    fn empty_polygon_short_circuits() {
        let f = frame(SrtTransform::identity(), Size2::unit());
        assert!(transform_polygon(&Polygon::empty(), &f, &f).is_empty());
    }

    #[test]
    fn preserves_vertex_count() {
        let initial = frame(
            SrtTransform {
                translation: Point2::new(12.0, -3.0),
                center: Point2::new(50.0, 50.0),
                scale: Size2::new(1.25, 1.25),
                rotation: 10.0,
            },
            Size2::new(0.5, 0.5),
        );
        let target = frame(SrtTransform::identity(), Size2::unit());
        let poly = Polygon::from_rect(&Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(transform_polygon(&poly, &initial, &target).len(), 4);
    }

    #[test]
    fn identical_unit_scale_placements_are_identity() {
        // with unit scale the pivot correction vanishes, so equal placements
        // on both sides cancel exactly
        let placement = SrtTransform {
            translation: Point2::new(40.0, -15.0),
            center: Point2::new(30.0, 20.0),
            scale: Size2::unit(),
            rotation: 25.0,
        };
        let f = frame(placement, Size2::new(2.0, 2.0));
        let poly = Polygon::from_rect(&Rect::new(5.0, 5.0, 20.0, 10.0));
        let out = transform_polygon(&poly, &f, &f);
        assert_polygon_eq(&out, &poly, 1e-10);
    }

    #[test]
    fn translation_rescaled_into_target_pixel_units() {
        let initial = frame(
            SrtTransform {
                translation: Point2::new(10.0, 20.0),
                ..SrtTransform::identity()
            },
            Size2::unit(),
        );
        let target = frame(SrtTransform::identity(), Size2::new(2.0, 4.0));
        let poly = Polygon::new(vec![Point2::new(0.0, 0.0)]);
        let out = transform_polygon(&poly, &initial, &target);
        // target placement is identity, so only the rescaled initial
        // translation remains
        assert_relative_eq!(out.vertices()[0].x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(out.vertices()[0].y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn round_trip_recovers_polygon() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let initial = frame(
                SrtTransform {
                    translation: Point2::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)),
                    center: Point2::new(rng.random_range(1.0..80.0), rng.random_range(1.0..80.0)),
                    scale: Size2::new(rng.random_range(0.5..2.0), rng.random_range(0.5..2.0)),
                    rotation: rng.random_range(0.0..360.0),
                },
                Size2::new(rng.random_range(0.25..4.0), rng.random_range(0.25..4.0)),
            );
            let target = frame(
                SrtTransform {
                    translation: Point2::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0)),
                    center: Point2::new(rng.random_range(1.0..80.0), rng.random_range(1.0..80.0)),
                    scale: Size2::new(rng.random_range(0.5..2.0), rng.random_range(0.5..2.0)),
                    rotation: rng.random_range(0.0..360.0),
                },
                Size2::new(rng.random_range(0.25..4.0), rng.random_range(0.25..4.0)),
            );
            let poly = Polygon::from_rect(&Rect::new(3.0, 7.0, 64.0, 32.0));

            let carried = transform_polygon(&poly, &initial, &target);

            // invert the composition: undo initial_space, redo target_space
            let (target_space, initial_space) = compose_transforms(&initial, &target);
            let recovered = target_space.apply_polygon(
                &initial_space.apply_polygon(&carried, TransformDirection::Inverse),
                TransformDirection::Forward,
            );
            assert_polygon_eq(&recovered, &poly, 1e-8);
        }
    }
}
