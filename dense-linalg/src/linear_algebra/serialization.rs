use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::linear_algebra::{Matrix, Vector};

/// A matrix is serialized as its list of rows.
impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

/// Deserialization goes through [`Matrix::from_rows`], so ragged or empty input is rejected.
impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        Matrix::from_rows(rows).map_err(D::Error::custom)
    }
}

impl Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<f64>::deserialize(deserializer).map(Vector::from)
    }
}
