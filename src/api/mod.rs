mod gallery;
mod gallery_config;
mod json_contract;

pub use gallery::{ActiveFigure, Gallery};
pub use gallery_config::GalleryConfig;
pub use json_contract::{
    FIGURE_SNAPSHOT_JSON_SCHEMA_V1, FigureSnapshot, FigureSnapshotJsonContractV1,
};
