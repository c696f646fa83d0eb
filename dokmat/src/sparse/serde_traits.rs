//! Serialization as `{ rows, cols, entries: [[row, col, value], ...] }`,
//! with deserialization checking the shape of every entry.

use num_traits::Num;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::errors::DokError;
use crate::sparse::DokMat;

#[derive(Deserialize)]
pub(crate) struct DokMatShadow<N> {
    rows: usize,
    cols: usize,
    entries: Vec<(usize, usize, N)>,
}

impl<N: Num + Copy> TryFrom<DokMatShadow<N>> for DokMat<N> {
    type Error = DokError;

    fn try_from(val: DokMatShadow<N>) -> Result<Self, Self::Error> {
        let DokMatShadow {
            rows,
            cols,
            entries,
        } = val;
        DokMat::from_triplets((rows, cols), entries)
    }
}

impl<N: Serialize> Serialize for DokMat<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries: Vec<(usize, usize, &N)> = self
            .iter()
            .map(|(coord, val)| (coord.row, coord.col, val))
            .collect();
        let mut state = serializer.serialize_struct("DokMat", 3)?;
        state.serialize_field("rows", &self.nrows)?;
        state.serialize_field("cols", &self.ncols)?;
        state.serialize_field("entries", &entries)?;
        state.end()
    }
}

impl<'de, N> Deserialize<'de> for DokMat<N>
where
    N: Deserialize<'de> + Num + Copy,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let shadow = DokMatShadow::<N>::deserialize(deserializer)?;
        DokMat::try_from(shadow).map_err(de::Error::custom)
    }
}
