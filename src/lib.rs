//! figure-gallery: synthetic datasets and navigation for a fixed gallery of
//! supplementary research figures.
//!
//! The crate owns three concerns: per-figure data synthesis, a static figure
//! registry pairing each generator with a declarative chart spec, and a
//! clamped navigation state machine. Drawing is delegated to a
//! [`render::RenderAdapter`].

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod navigation;
pub mod registry;
pub mod render;
pub mod telemetry;

pub use api::{ActiveFigure, Gallery, GalleryConfig};
pub use crate::core::{FigureId, TOTAL_FIGURES};
pub use error::{GalleryError, GalleryResult};
pub use registry::{FigureDescriptor, FigureRegistry};
