use std::f64::consts::PI;

use crate::point::{Point2, Size2};
use crate::polygon::Polygon;

/// Direction in which an [`SrtTransform`] is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformDirection {
    /// Raw space to placed space.
    Forward,
    /// Placed space back to raw space.
    Inverse,
}

/// A user-adjustable placement transform: non-uniform scale and rotation
/// pivoted at `center`, followed by a translation.
///
/// The forward mapping of a point `p` is
///
/// ```text
/// p' = R(rotation) * S(scale) * (p - center) + center + translation
/// ```
///
/// with `rotation` in degrees. Scale components are expected to be strictly
/// positive; rotation is conceptually in `[0, 360)` but no wraparound is
/// enforced. Composition across two image spaces is done by copying
/// scale/rotation and recomputing the translation (see
/// [`compose_transforms`](crate::compose::compose_transforms)), not by a
/// generic matrix multiply — valid because the pivot is handled separately
/// from the linear part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SrtTransform {
    /// Translation applied after rotation and scale, in physical units.
    pub translation: Point2,
    /// Pivot for rotation and scale, in physical units.
    pub center: Point2,
    /// Non-uniform scale factors, strictly positive.
    pub scale: Size2,
    /// Rotation about `center`, in degrees.
    pub rotation: f64,
}

impl SrtTransform {
    /// The identity placement: no translation, unit scale, zero rotation,
    /// pivot at the origin.
    pub fn identity() -> Self {
        Self {
            translation: Point2::default(),
            center: Point2::default(),
            scale: Size2::unit(),
            rotation: 0.0,
        }
    }

    /// Apply the forward mapping to a point.
    pub fn apply_point(&self, p: Point2) -> Point2 {
        let theta = self.rotation * PI / 180.0;
        let (sin, cos) = theta.sin_cos();
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        // scale about the pivot, then rotate about it
        let sx = dx * self.scale.width;
        let sy = dy * self.scale.height;
        Point2::new(
            cos * sx - sin * sy + self.center.x + self.translation.x,
            sin * sx + cos * sy + self.center.y + self.translation.y,
        )
    }

    /// Apply the inverse mapping to a point, undoing [`Self::apply_point`].
    pub fn apply_point_inverse(&self, p: Point2) -> Point2 {
        let theta = self.rotation * PI / 180.0;
        let (sin, cos) = theta.sin_cos();
        let dx = p.x - self.translation.x - self.center.x;
        let dy = p.y - self.translation.y - self.center.y;
        // rotate back, then unscale
        let rx = cos * dx + sin * dy;
        let ry = -sin * dx + cos * dy;
        Point2::new(
            rx / self.scale.width + self.center.x,
            ry / self.scale.height + self.center.y,
        )
    }

    /// Apply the transform to every vertex of a polygon in the given
    /// direction. The empty polygon passes through unchanged.
    pub fn apply_polygon(&self, poly: &Polygon, direction: TransformDirection) -> Polygon {
        match direction {
            TransformDirection::Forward => poly.map_vertices(|p| self.apply_point(p)),
            TransformDirection::Inverse => poly.map_vertices(|p| self.apply_point_inverse(p)),
        }
    }
}

impl Default for SrtTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_leaves_points_alone() {
        let t = SrtTransform::identity();
        let p = Point2::new(3.5, -2.0);
        assert_eq!(t.apply_point(p), p);
        assert_eq!(t.apply_point_inverse(p), p);
    }

    #[test]
    fn rotation_about_center() {
        let t = SrtTransform {
            translation: Point2::default(),
            center: Point2::new(1.0, 1.0),
            scale: Size2::unit(),
            rotation: 90.0,
        };
        let out = t.apply_point(Point2::new(2.0, 1.0));
        assert_relative_eq!(out.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(out.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn scale_pivots_at_center() {
        let t = SrtTransform {
            translation: Point2::default(),
            center: Point2::new(10.0, 10.0),
            scale: Size2::new(2.0, 3.0),
            rotation: 0.0,
        };
        let out = t.apply_point(Point2::new(11.0, 12.0));
        assert_relative_eq!(out.x, 12.0, epsilon = 1e-12);
        assert_relative_eq!(out.y, 16.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_undoes_forward() {
        let t = SrtTransform {
            translation: Point2::new(5.0, -7.0),
            center: Point2::new(2.0, 3.0),
            scale: Size2::new(1.5, 0.75),
            rotation: 33.0,
        };
        let p = Point2::new(-4.0, 9.0);
        let back = t.apply_point_inverse(t.apply_point(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-10);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-10);
    }

    #[test]
    fn polygon_application_preserves_count_and_empty() {
        let t = SrtTransform {
            translation: Point2::new(1.0, 2.0),
            center: Point2::default(),
            scale: Size2::unit(),
            rotation: 0.0,
        };
        let poly = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ]);
        let out = t.apply_polygon(&poly, TransformDirection::Forward);
        assert_eq!(out.len(), poly.len());
        assert!(t
            .apply_polygon(&Polygon::empty(), TransformDirection::Inverse)
            .is_empty());
    }
}
