use std::path::Path;

use crate::error::PipelineError;
use crate::properties::ImageProperties;

/// Role an image plays in the two-image set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageRole {
    /// The image being processed; the one selected as active in the host.
    Source,
    /// The image whose thresholded pixels mask the source.
    Mask,
}

impl std::fmt::Display for ImageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ImageRole::Source => write!(f, "source"),
            ImageRole::Mask => write!(f, "mask"),
        }
    }
}

/// An explicit two-slot map keyed by [`ImageRole`].
///
/// Replaces positional `1 − index` arithmetic over the host's image list with
/// a lookup that cannot be off by one.
#[derive(Clone, Debug, PartialEq)]
pub struct RolePair<T> {
    source: T,
    mask: T,
}

impl<T> RolePair<T> {
    /// Create a pair from its two role-bound values.
    pub fn new(source: T, mask: T) -> Self {
        Self { source, mask }
    }

    /// Borrow the value bound to `role`.
    pub fn get(&self, role: ImageRole) -> &T {
        match role {
            ImageRole::Source => &self.source,
            ImageRole::Mask => &self.mask,
        }
    }

    /// Mutably borrow the value bound to `role`.
    pub fn get_mut(&mut self, role: ImageRole) -> &mut T {
        match role {
            ImageRole::Source => &mut self.source,
            ImageRole::Mask => &mut self.mask,
        }
    }

    /// The source-bound value.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// The mask-bound value.
    pub fn mask(&self) -> &T {
        &self.mask
    }
}

/// Assign source and mask roles within a loaded image set.
///
/// Requires exactly two images. The one whose location matches
/// `active_location` (the image highlighted in the host) becomes the source;
/// the other becomes the mask. Any other count, or an active location that
/// matches neither image, is a configuration error for this cycle — reported,
/// not panicked on.
pub fn assign_roles(
    images: Vec<ImageProperties>,
    active_location: &Path,
) -> Result<RolePair<ImageProperties>, PipelineError> {
    let [first, second]: [ImageProperties; 2] = images
        .try_into()
        .map_err(|v: Vec<_>| PipelineError::ImageCount { found: v.len() })?;
    if first.location == active_location {
        Ok(RolePair::new(first, second))
    } else if second.location == active_location {
        Ok(RolePair::new(second, first))
    } else {
        Err(PipelineError::ActiveImageNotFound {
            location: active_location.to_path_buf(),
        })
    }
}
