//! Disk provisioning modes understood by `ovftool --diskMode`.

use super::ParseDiskModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target disk provisioning mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DiskMode {
    /// Single growable file.
    MonolithicSparse,
    /// Single preallocated file.
    MonolithicFlat,
    /// Growable file split into 2GB extents.
    TwoGbMaxExtentSparse,
    /// Preallocated file split into 2GB extents.
    TwoGbMaxExtentFlat,
    /// Space-efficient sparse format.
    SeSparse,
    /// Thick, zeroed on creation.
    EagerZeroedThick,
    /// Thin provisioned.
    Thin,
    /// Thick provisioned, lazily zeroed.
    Thick,
    /// Sparse, host chooses the concrete layout.
    Sparse,
    /// Flat, host chooses the concrete layout.
    Flat,
}

impl DiskMode {
    /// Returns the spelling `ovftool` accepts for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MonolithicSparse => "monolithicSparse",
            Self::MonolithicFlat => "monolithicFlat",
            Self::TwoGbMaxExtentSparse => "twoGbMaxExtentSparse",
            Self::TwoGbMaxExtentFlat => "twoGbMaxExtentFlat",
            Self::SeSparse => "seSparse",
            Self::EagerZeroedThick => "eagerZeroedThick",
            Self::Thin => "thin",
            Self::Thick => "thick",
            Self::Sparse => "sparse",
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for DiskMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiskMode {
    type Err = ParseDiskModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "monolithicSparse" => Ok(Self::MonolithicSparse),
            "monolithicFlat" => Ok(Self::MonolithicFlat),
            "twoGbMaxExtentSparse" => Ok(Self::TwoGbMaxExtentSparse),
            "twoGbMaxExtentFlat" => Ok(Self::TwoGbMaxExtentFlat),
            "seSparse" => Ok(Self::SeSparse),
            "eagerZeroedThick" => Ok(Self::EagerZeroedThick),
            "thin" => Ok(Self::Thin),
            "thick" => Ok(Self::Thick),
            "sparse" => Ok(Self::Sparse),
            "flat" => Ok(Self::Flat),
            _ => Err(ParseDiskModeError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for DiskMode {
    type Error = ParseDiskModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DiskMode> for String {
    fn from(mode: DiskMode) -> Self {
        mode.as_str().to_owned()
    }
}
