use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::error::{JourneyError, JourneyResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One visual layer selection.
///
/// `trait_type` names the layer category (a directory under the layer root) and
/// `value` names the asset within it (a `.png` file in that directory).
pub struct Attribute {
    /// Layer category.
    pub trait_type: String,
    /// Asset name within the category.
    pub value: String,
}

impl Attribute {
    /// Build an attribute from its two fields.
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One unit of output: a named, ordered list of attributes.
pub struct JourneyItem {
    /// Output base name (`<name>.png`).
    pub name: String,
    /// Layers in painter's order (first drawn first).
    pub attributes: Vec<Attribute>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Parsed journey manifest (`{ "data": [ ... ] }`).
pub struct Manifest {
    /// Journey items in processing order.
    pub data: Vec<JourneyItem>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json_str(s: &str) -> JourneyResult<Self> {
        serde_json::from_str(s).map_err(|e| JourneyError::manifest_parse(e.to_string()))
    }

    /// Parse a manifest from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> JourneyResult<Self> {
        serde_json::from_reader(r).map_err(|e| JourneyError::manifest_parse(e.to_string()))
    }

    /// Read and parse a manifest file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> JourneyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| JourneyError::manifest_read(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Number of journey items.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when the manifest lists no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/manifest.rs"]
mod tests;
