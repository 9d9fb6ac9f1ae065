//! Serde adapters for costs that may be infinite.
//!
//! An unreachable vertex has cost `f64::INFINITY`, which JSON cannot
//! represent. These adapters write it as `null` and read `null` back as
//! infinity, so results survive a JSON round trip.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

fn to_option(cost: f64) -> Option<f64> {
    cost.is_finite().then_some(cost)
}

fn from_option(cost: Option<f64>) -> f64 {
    cost.unwrap_or(f64::INFINITY)
}

/// A single cost.
pub(crate) mod cost {
    use super::*;

    pub fn serialize<S: Serializer>(cost: &f64, s: S) -> Result<S::Ok, S::Error> {
        to_option(*cost).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Option::<f64>::deserialize(d).map(from_option)
    }
}

/// A cost vector.
pub(crate) mod costs {
    use super::*;

    pub fn serialize<S: Serializer>(costs: &[f64], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(costs.iter().map(|&c| to_option(c)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
        let raw = Vec::<Option<f64>>::deserialize(d)?;
        Ok(raw.into_iter().map(from_option).collect())
    }
}

/// A cost matrix.
pub(crate) mod cost_matrix {
    use super::*;

    pub fn serialize<S: Serializer>(rows: &[Vec<f64>], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(
            rows.iter()
                .map(|row| row.iter().map(|&c| to_option(c)).collect::<Vec<_>>()),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Vec<f64>>, D::Error> {
        let raw = Vec::<Vec<Option<f64>>>::deserialize(d)?;
        Ok(raw
            .into_iter()
            .map(|row| row.into_iter().map(from_option).collect())
            .collect())
    }
}
