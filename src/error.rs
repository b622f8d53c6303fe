use thiserror::Error;

pub type GalleryResult<T> = Result<T, GalleryError>;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("figure not found: id={id} (valid range is 1..={total})")]
    FigureNotFound { id: i64, total: u8 },

    #[error("figure {figure}: chart spec references unknown field `{field}`")]
    UnboundField { figure: u8, field: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
