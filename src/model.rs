//! Typed mirror of the parsed project document.
//!
//! The upstream parser serializes its project model as one JSON object with
//! `info`, `devices`, `group_addresses`, `locations` and `group_ranges`
//! sections. Deserialization is lenient: unknown fields are ignored and
//! missing optional fields default, so documents from newer parser versions
//! still load.
//!
//! JSON object maps whose iteration order matters downstream (devices,
//! locations, nested spaces, group ranges) are deserialized into key/value
//! vectors so the document's own ordering survives; `group_addresses` is a
//! plain lookup table.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ReportError;

/// Parsed project document: the raw JSON value (kept for the lossless
/// snapshot dump) plus the typed model the pipeline works on.
#[derive(Debug)]
pub struct ProjectDocument {
    pub raw: Value,
    pub project: Project,
}

impl ProjectDocument {
    /// Load a project document from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ReportError> {
        let text = fs::read_to_string(path).map_err(|source| ReportError::ReadDocument {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: Value =
            serde_json::from_str(&text).map_err(|source| ReportError::ParseDocument {
                path: path.to_path_buf(),
                source,
            })?;
        let project =
            Project::deserialize(&raw).map_err(|source| ReportError::ParseDocument {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { raw, project })
    }
}

/// Top-level project model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub info: ProjectInfo,

    /// Device records keyed by individual address, in document order.
    #[serde(default, deserialize_with = "ordered_map")]
    pub devices: Vec<(String, Device)>,

    /// Group-address records keyed by address string (`"1/2/3"`).
    #[serde(default)]
    pub group_addresses: BTreeMap<String, GroupAddress>,

    /// Top-level spatial tree, in document order.
    #[serde(default, deserialize_with = "ordered_map")]
    pub locations: Vec<(String, Space)>,

    /// Top-level group-range tree, in document order.
    #[serde(default, deserialize_with = "ordered_map")]
    pub group_ranges: Vec<(String, GroupRange)>,
}

/// Project metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub name: String,
    /// RFC 3339 timestamp of the last modification, if the project has one.
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub tool_version: String,
    #[serde(default)]
    pub xknxproject_version: String,
}

impl ProjectInfo {
    /// Human rendering of the last-modified timestamp
    /// (`"September 13, 2023, 12:19:51 UTC"`). `None` when the field is
    /// absent or not valid RFC 3339.
    pub fn last_modified_display(&self) -> Option<String> {
        let raw = self.last_modified.as_deref()?;
        let parsed = DateTime::parse_from_rfc3339(raw).ok()?;
        Some(
            parsed
                .with_timezone(&Utc)
                .format("%B %d, %Y, %H:%M:%S UTC")
                .to_string(),
        )
    }
}

/// A bus device. Identity is the individual address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Device {
    pub individual_address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub manufacturer_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hardware_name: String,
    #[serde(default)]
    pub order_number: String,
}

/// Spatial level of a location node. Unknown tags map to [`SpaceType::Other`]
/// and leave the inherited context untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SpaceType {
    Building,
    Floor,
    Room,
    DistributionBoard,
    #[serde(other)]
    Other,
}

impl Default for SpaceType {
    fn default() -> Self {
        SpaceType::Other
    }
}

/// A node of the spatial tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Space {
    #[serde(rename = "type", default)]
    pub space_type: SpaceType,
    #[serde(default)]
    pub name: Option<String>,
    /// Individual addresses of devices placed directly in this space.
    #[serde(default)]
    pub devices: Vec<String>,
    /// Nested child spaces, in document order.
    #[serde(default, deserialize_with = "ordered_map")]
    pub spaces: Vec<(String, Space)>,
}

/// A node of the group-range tree, keyed in its parent by its own address
/// path (`"1"`, `"1/2"`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupRange {
    #[serde(default)]
    pub name: String,
    /// Leaf group addresses owned directly by this range.
    #[serde(default)]
    pub group_addresses: Vec<String>,
    /// Nested child ranges, in document order.
    #[serde(default, deserialize_with = "ordered_map")]
    pub group_ranges: Vec<(String, GroupRange)>,
}

/// A group address record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupAddress {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: String,
    /// Datapoint type, absent when the project assigns none.
    #[serde(default)]
    pub dpt: Option<DatapointType>,
}

/// Datapoint type as a main/sub pair (`1/1` = switching on-off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DatapointType {
    pub main: u16,
    #[serde(default)]
    pub sub: u16,
}

/// Deserialize a JSON object into a key/value vector, preserving the order
/// in which the entries appear in the document.
fn ordered_map<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedMap<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedMap<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedMap(PhantomData))
}
