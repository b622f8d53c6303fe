use serde::Serialize;

use crate::core::{FigureId, Record};
use crate::error::{GalleryError, GalleryResult};
use crate::registry::{ChartSpec, FigureDescriptor};

use super::ActiveFigure;

pub const FIGURE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of one rendered figure: descriptor plus dataset rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureSnapshot {
    pub id: FigureId,
    pub title: &'static str,
    pub caption: &'static str,
    pub chart: ChartSpec,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureSnapshotJsonContractV1<'a> {
    pub schema_version: u32,
    pub snapshot: &'a FigureSnapshot,
}

impl FigureSnapshot {
    #[must_use]
    pub fn new(descriptor: &'static FigureDescriptor, records: Vec<Record>) -> Self {
        Self {
            id: descriptor.id,
            title: descriptor.title,
            caption: descriptor.caption,
            chart: descriptor.chart,
            records,
        }
    }

    fn contract(&self) -> FigureSnapshotJsonContractV1<'_> {
        FigureSnapshotJsonContractV1 {
            schema_version: FIGURE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self,
        }
    }

    pub fn to_json_contract_v1(&self) -> GalleryResult<String> {
        serde_json::to_string(&self.contract()).map_err(|e| {
            GalleryError::InvalidData(format!("failed to serialize figure snapshot v1: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> GalleryResult<String> {
        serde_json::to_string_pretty(&self.contract()).map_err(|e| {
            GalleryError::InvalidData(format!("failed to serialize figure snapshot v1: {e}"))
        })
    }
}

impl ActiveFigure {
    #[must_use]
    pub fn snapshot(&self) -> FigureSnapshot {
        FigureSnapshot::new(self.descriptor, self.dataset.records())
    }
}
