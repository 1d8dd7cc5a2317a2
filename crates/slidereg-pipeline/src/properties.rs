use std::path::{Path, PathBuf};

use slidereg_geometry::{ImageFrame, Size2, SrtTransform};

use crate::error::PipelineError;
use crate::roles::{ImageRole, RolePair};

/// Color model of an image's pixel data. Descriptive only; the geometry core
/// never inspects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorModel {
    /// Single-channel intensity.
    Grayscale,
    /// Three-channel red/green/blue.
    #[default]
    Rgb,
    /// Red/green/blue with alpha.
    Rgba,
}

impl std::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ColorModel::Grayscale => write!(f, "grayscale"),
            ColorModel::Rgb => write!(f, "RGB"),
            ColorModel::Rgba => write!(f, "RGBA"),
        }
    }
}

/// Per-channel pixel representation. Descriptive only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelType {
    /// 8-bit unsigned channels.
    #[default]
    Uint8,
    /// 16-bit unsigned channels.
    Uint16,
    /// 32-bit floating point channels.
    Float32,
}

impl std::fmt::Display for PixelType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PixelType::Uint8 => write!(f, "uint8"),
            PixelType::Uint16 => write!(f, "uint16"),
            PixelType::Float32 => write!(f, "float32"),
        }
    }
}

/// Raw metadata handed over by the image-decoding collaborator for one image.
///
/// Optional fields cover metadata the backing file may simply not carry;
/// their defaults are applied when building [`ImageProperties`].
#[derive(Clone, Debug, PartialEq)]
pub struct ImageMetadata {
    /// Path of the backing image file.
    pub location: PathBuf,
    /// The image's placement transform as adjusted in the viewer.
    pub placement: SrtTransform,
    /// Physical size of one pixel reported by the image's own metadata, if
    /// present.
    pub intrinsic_pixel_size: Option<Size2>,
    /// User-entered pixel spacing stored in session state, if any.
    pub override_pixel_spacing: Option<Size2>,
    /// Full-resolution pixel grid dimensions (width, height).
    pub pixel_dims: (u32, u32),
    /// Number of resolution levels available.
    pub level_count: u32,
    /// Color model of the pixel data.
    pub color_model: ColorModel,
    /// Per-channel pixel representation.
    pub pixel_type: PixelType,
    /// Display opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether the image is currently shown.
    pub visibility: bool,
}

/// An immutable-after-construction snapshot of one image's placement, spacing
/// and size metadata.
///
/// Rebuilt wholesale whenever the controller detects a relevant change, never
/// mutated in place. The intrinsic pixel size and the user-entered override
/// spacing are independent fields: the intrinsic size drives all geometry,
/// the override is tracked and reported separately. Conflating them is a
/// correctness bug.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageProperties {
    /// Path of the backing image, used for diagnostics and reopening only.
    pub location: PathBuf,
    /// Placement transform, intrinsic pixel size and pixel dimensions — the
    /// part of the snapshot the geometry core consumes.
    pub frame: ImageFrame,
    /// User-entered pixel spacing, `(1, 1)` when never set.
    pub override_pixel_spacing: Size2,
    /// Number of resolution levels available.
    pub level_count: u32,
    /// Color model of the pixel data. Not used by the geometry core.
    pub color_model: ColorModel,
    /// Per-channel pixel representation. Not used by the geometry core.
    pub pixel_type: PixelType,
    /// Display opacity. Not used by the geometry core.
    pub opacity: f64,
    /// Display visibility. Not used by the geometry core.
    pub visibility: bool,
}

impl ImageProperties {
    /// Build a snapshot from collaborator-provided metadata, applying the
    /// `(1, 1)` defaults for absent pixel sizes.
    pub fn from_metadata(meta: ImageMetadata) -> Self {
        Self {
            location: meta.location,
            frame: ImageFrame {
                placement: meta.placement,
                pixel_size: meta.intrinsic_pixel_size.unwrap_or(Size2::unit()),
                pixel_dims: meta.pixel_dims,
            },
            override_pixel_spacing: meta.override_pixel_spacing.unwrap_or(Size2::unit()),
            level_count: meta.level_count,
            color_model: meta.color_model,
            pixel_type: meta.pixel_type,
            opacity: meta.opacity,
            visibility: meta.visibility,
        }
    }
}

/// The collaborator that re-opens an image file and reads its metadata and
/// session state. Implemented outside this crate by the decoding layer.
pub trait MetadataSource {
    /// Read the metadata record for the image at `location`.
    fn read(&self, location: &Path) -> Result<ImageMetadata, std::io::Error>;
}

/// Build fresh property snapshots for a role-assigned pair of image
/// locations.
///
/// An image that is open in the host but cannot be re-opened here is fatal
/// for the rebuild cycle: geometry computed from substituted defaults would
/// be meaningless, so the failure is surfaced instead.
pub fn load_pair<R: MetadataSource>(
    reader: &R,
    locations: &RolePair<PathBuf>,
) -> Result<RolePair<ImageProperties>, PipelineError> {
    let open = |role: ImageRole| -> Result<ImageProperties, PipelineError> {
        let location = locations.get(role);
        let meta = reader
            .read(location)
            .map_err(|source| PipelineError::OpenImage {
                role,
                location: location.clone(),
                source,
            })?;
        Ok(ImageProperties::from_metadata(meta))
    };
    Ok(RolePair::new(open(ImageRole::Source)?, open(ImageRole::Mask)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidereg_geometry::Point2;

    fn metadata() -> ImageMetadata {
        ImageMetadata {
            location: PathBuf::from("slide.tif"),
            placement: SrtTransform {
                translation: Point2::new(10.0, 20.0),
                ..SrtTransform::identity()
            },
            intrinsic_pixel_size: None,
            override_pixel_spacing: None,
            pixel_dims: (1024, 768),
            level_count: 3,
            color_model: ColorModel::Rgb,
            pixel_type: PixelType::Uint8,
            opacity: 1.0,
            visibility: true,
        }
    }

    #[test]
    fn absent_pixel_sizes_default_to_unit() {
        let props = ImageProperties::from_metadata(metadata());
        assert_eq!(props.frame.pixel_size, Size2::unit());
        assert_eq!(props.override_pixel_spacing, Size2::unit());
    }

    struct FakeReader {
        fail_on: Option<PathBuf>,
    }

    impl MetadataSource for FakeReader {
        fn read(&self, location: &Path) -> Result<ImageMetadata, std::io::Error> {
            if self.fail_on.as_deref() == Some(location) {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such image",
                ));
            }
            let mut meta = metadata();
            meta.location = location.to_path_buf();
            Ok(meta)
        }
    }

    #[test]
    fn load_pair_snapshots_both_roles() {
        let reader = FakeReader { fail_on: None };
        let locations = RolePair::new(PathBuf::from("source.tif"), PathBuf::from("mask.tif"));
        let pair = load_pair(&reader, &locations).unwrap();
        assert_eq!(pair.source().location, PathBuf::from("source.tif"));
        assert_eq!(pair.mask().location, PathBuf::from("mask.tif"));
    }

    #[test]
    fn load_pair_surfaces_unopenable_image() {
        let reader = FakeReader {
            fail_on: Some(PathBuf::from("mask.tif")),
        };
        let locations = RolePair::new(PathBuf::from("source.tif"), PathBuf::from("mask.tif"));
        let err = load_pair(&reader, &locations).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::OpenImage {
                role: ImageRole::Mask,
                ..
            }
        ));
    }

    #[test]
    fn intrinsic_and_override_stay_independent() {
        let mut meta = metadata();
        meta.intrinsic_pixel_size = Some(Size2::new(0.25, 0.25));
        meta.override_pixel_spacing = Some(Size2::new(0.5, 0.5));
        let props = ImageProperties::from_metadata(meta);
        assert_eq!(props.frame.pixel_size, Size2::new(0.25, 0.25));
        assert_eq!(props.override_pixel_spacing, Size2::new(0.5, 0.5));
    }
}
