//! Service record — one row of the remote salon catalog.
//!
//! Records are passed through from the catalog without schema validation.
//! Scalar fields keep whatever number or string the catalog sent. A field
//! that is missing, `null`, or of an unexpected JSON type is read as absent
//! and rendered as a placeholder later; it never fails the load.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::scalar::Scalar;

/// A salon service offering as published by the catalog endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub service_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub service_time: Option<ServiceTime>,
    /// Price in the catalog's implied currency.
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<Scalar>,
    /// Discount as a percentage.
    #[serde(default, deserialize_with = "lenient")]
    pub discount: Option<Scalar>,
    /// Free-form location label.
    #[serde(default, deserialize_with = "lenient")]
    pub area: Option<String>,
}

impl ServiceRecord {
    /// Read one element of the catalog array.
    ///
    /// Elements that are not JSON objects become a record with every field
    /// absent, so they still occupy a (blank) row.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Duration of a service. Components that are missing read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceTime {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub days: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub hours: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub minutes: u32,
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h {}m", self.days, self.hours, self.minutes)
    }
}

/// Decode a catalog response body.
///
/// # Errors
///
/// Returns the decoder error when the body is not JSON or is not an array.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<ServiceRecord>, serde_json::Error> {
    let items: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    Ok(items.into_iter().map(ServiceRecord::from_value).collect())
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}
