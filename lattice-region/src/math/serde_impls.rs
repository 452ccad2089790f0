#![allow(clippy::missing_inline_in_public_items)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::{IntVector3, LatticeCoordinate, Region3i};

#[derive(Debug, Deserialize, Serialize)]
struct Region3iSer {
    // Not a versioned enum; the min/size representation is not expected to change.
    min: [LatticeCoordinate; 3],
    size: [LatticeCoordinate; 3],
}

impl Serialize for IntVector3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let &IntVector3 { x, y, z } = self;

        [x, y, z].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IntVector3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y, z] = <[LatticeCoordinate; 3]>::deserialize(deserializer)?;
        Ok(IntVector3::new(x, y, z))
    }
}

impl Serialize for Region3i {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Region3iSer {
            min: self.min().into(),
            size: self.size().into(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Region3i {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Region3iSer { min, size } = Region3iSer::deserialize(deserializer)?;
        Region3i::checked_from_min_and_size(min, size).map_err(serde::de::Error::custom)
    }
}
