use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use crate::{error::Result, types::PinRecord};

/// File name of the manifest written next to the extracted pins
pub const MANIFEST_FILE_NAME: &str = "extraction_metadata.json";

/// Summary of one extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub source: String,
    pub pins: Vec<PinRecord>,
    pub total: usize,
}

impl Manifest {
    pub fn new(source: impl Into<String>, pins: Vec<PinRecord>) -> Self {
        let total = pins.len();
        Self {
            source: source.into(),
            pins,
            total,
        }
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Write the manifest to `path`, replacing any previous file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
