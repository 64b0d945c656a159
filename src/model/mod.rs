//! Wire types shared by the client and the server.
//!
//! Every payload of the `/api` contract lives here so both sides decode the same
//! shapes. Types are read-only snapshots of backend state; nothing in the client
//! mutates them after they are received.

pub mod api;
pub mod assignment;
pub mod crew;
pub mod dashboard;
pub mod flight;
pub mod recommendation;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Identifiers arrive either as JSON strings or as bare numbers depending on how
/// the roster was exported, so both are normalized to a string.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Treats an explicit `null` like a missing key. Exports fill unknown numbers
/// and states with `null` as often as they leave the key out.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Score maps whose individual values may be `null`; those read as 0.
pub(crate) fn deserialize_scores<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<f64>>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}
