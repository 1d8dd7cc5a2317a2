#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the pipeline module.
pub mod error;

/// Per-image placement and spacing snapshots.
pub mod properties;

/// Source/mask role assignment for a loaded image pair.
pub mod roles;

/// The change-gated rebuild controller.
pub mod controller;

/// Human-readable reporting of image properties and output size estimates.
pub mod report;

pub use crate::controller::{
    CancelToken, ControllerPhase, PipelineController, PipelineInputs, PipelineState,
};
pub use crate::error::PipelineError;
pub use crate::properties::{
    load_pair, ColorModel, ImageMetadata, ImageProperties, MetadataSource, PixelType,
};
pub use crate::roles::{assign_roles, ImageRole, RolePair};
