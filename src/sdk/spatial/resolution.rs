use super::error::SpatialError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Grid precision level. Higher values mean smaller cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellResolution(u8);

impl CellResolution {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 15;
    pub const DEFAULT: Self = Self(8);

    pub fn new(value: u8) -> Result<Self, SpatialError> {
        if value > Self::MAX {
            return Err(SpatialError::InvalidResolution {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for CellResolution {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for CellResolution {
    type Error = SpatialError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CellResolution> for u8 {
    fn from(resolution: CellResolution) -> Self {
        resolution.0
    }
}

impl fmt::Display for CellResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CellResolution {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u8>().map_err(|_| SpatialError::InvalidResolution {
            value: s.to_string(),
        })?;
        Self::new(value)
    }
}

impl Serialize for CellResolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}
