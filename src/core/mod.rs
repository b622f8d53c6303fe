pub mod field;
pub mod random;
pub mod types;

pub use field::{FieldKind, FieldSchema, FieldValue, Record, find_field, record};
pub use random::{entropy_rng, rng_for, seeded_rng};
pub use types::{FigureId, TOTAL_FIGURES};
