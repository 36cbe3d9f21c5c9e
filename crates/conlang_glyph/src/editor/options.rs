use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::glyph::Grid;
use crate::{Result, DEFAULT_RESOLUTION};

/// Construction options of a `GridEditor`
///
/// Stored as TOML; missing keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridEditorOptions {
    /// Grid side length in cells
    pub resolution: usize,

    /// Whether pointer input draws
    pub editable: bool,

    /// Whether the compressed string is shown next to the grid
    pub output_visible: bool,

    /// Maximum number of undo snapshots, unbounded if unset
    pub history_limit: Option<usize>,
}

impl Default for GridEditorOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            editable: true,
            output_visible: true,
            history_limit: None,
        }
    }
}

impl GridEditorOptions {
    pub fn with_resolution(resolution: usize) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Check the options can build an editor
    pub fn validate(&self) -> Result<()> {
        crate::glyph::validate_resolution(self.resolution)
    }

    /// Parse options from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: Self = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Load options from a file, a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No editor options at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// A blank grid of the configured resolution
    pub fn blank_grid(&self) -> Result<Grid> {
        Grid::new(self.resolution)
    }
}
