use std::path::PathBuf;

/// An error type for the pipeline module.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// The viewer must have exactly two images loaded: a source and a mask.
    #[error(
        "this pipeline requires exactly two images to be loaded (found {found}); \
         load a source image and a mask image, then select the source image so \
         its location appears as the active image"
    )]
    ImageCount {
        /// Number of images actually loaded.
        found: usize,
    },

    /// The active image location did not match either loaded image.
    #[error("the active image {location:?} is not part of the loaded image pair")]
    ActiveImageNotFound {
        /// Location reported as active by the host.
        location: PathBuf,
    },

    /// An image that is currently open could not be re-opened for metadata.
    ///
    /// Fatal for the rebuild cycle: geometry computed from missing metadata
    /// would be meaningless, so no defaults are substituted.
    #[error("could not open the {role} image at {location:?}")]
    OpenImage {
        /// Role the unopenable image was assigned.
        role: crate::roles::ImageRole,
        /// Location of the backing file.
        location: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
