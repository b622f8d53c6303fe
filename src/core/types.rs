use serde::Serialize;

use crate::error::{GalleryError, GalleryResult};

/// Number of figures in the gallery.
pub const TOTAL_FIGURES: u8 = 15;

/// Figure identifier, always inside `1..=TOTAL_FIGURES`.
///
/// Construction goes through [`FigureId::new`] (fallible) or
/// [`FigureId::clamped`] (total), so registry lookups keyed by a `FigureId`
/// can never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FigureId(u8);

impl FigureId {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(TOTAL_FIGURES);

    pub fn new(raw: i64) -> GalleryResult<Self> {
        if (1..=i64::from(TOTAL_FIGURES)).contains(&raw) {
            // Range-checked above, the cast cannot truncate.
            Ok(Self(raw as u8))
        } else {
            Err(GalleryError::FigureNotFound {
                id: raw,
                total: TOTAL_FIGURES,
            })
        }
    }

    /// Compile-time constructor for literal tables.
    pub(crate) const fn literal(raw: u8) -> Self {
        assert!(raw >= 1 && raw <= TOTAL_FIGURES, "figure id out of range");
        Self(raw)
    }

    /// Clamps any integer into the valid id range.
    #[must_use]
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(1, i64::from(TOTAL_FIGURES)) as u8)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position in the registry table.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[must_use]
    pub fn saturating_next(self) -> Self {
        Self(self.0.saturating_add(1).min(TOTAL_FIGURES))
    }

    #[must_use]
    pub fn saturating_previous(self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        self.0 == 1
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == TOTAL_FIGURES
    }

    /// All ids in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=TOTAL_FIGURES).map(Self)
    }
}

impl Default for FigureId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for FigureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FigureId> for u8 {
    fn from(id: FigureId) -> Self {
        id.0
    }
}

impl TryFrom<i64> for FigureId {
    type Error = GalleryError;

    fn try_from(raw: i64) -> GalleryResult<Self> {
        Self::new(raw)
    }
}
