#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// 2D point and size value types.
pub mod point;

/// axis-aligned rectangles.
pub mod rect;

/// ordered vertex polygons.
pub mod polygon;

/// scale/rotation/translation placement transforms.
pub mod transform;

/// frame reconciliation between two image coordinate spaces.
pub mod reframe;

/// composition of placement transforms across two image spaces.
pub mod compose;

/// footprint overlap between two images in a common frame.
pub mod footprint;

pub use crate::compose::{compose_transforms, transform_polygon};
pub use crate::footprint::{footprint_overlap, FootprintOverlap};
pub use crate::point::{Point2, Size2};
pub use crate::polygon::Polygon;
pub use crate::rect::Rect;
pub use crate::reframe::{center_offset, reframe_point, reframe_polygon, resolve_center, ImageFrame};
pub use crate::transform::{SrtTransform, TransformDirection};
