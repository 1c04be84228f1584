use crate::constants::proc_set;
use crate::error::{PdfError, PdfResult};
use crate::types::PdfName;
use serde::{Deserialize, Serialize};

/// Options applied when a resource table is created for a new canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Write a `/ProcSet` array into new canvas resources
    pub write_proc_set: bool,
    /// Procedure sets to list when `write_proc_set` is on
    pub proc_set: Vec<PdfName>,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            write_proc_set: true,
            proc_set: proc_set::DEFAULT.to_vec(),
        }
    }
}

impl ResourcesConfig {
    /// No `/ProcSet`; PDF 1.4 and later readers ignore it anyway.
    pub fn minimal() -> Self {
        Self {
            write_proc_set: false,
            proc_set: Vec::new(),
        }
    }

    pub fn from_toml_str(source: &str) -> PdfResult<Self> {
        toml::from_str(source).map_err(|e| PdfError::Config(e.to_string()))
    }
}
