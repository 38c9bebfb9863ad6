//! In-memory program design: name, description, wrap width and arguments.
//!
//! A design can be seeded from a JSON file so the same starting point can be
//! reused across sessions; the design itself is only ever written out as
//! generated source.
use crate::registry::{ArgKind, ArgumentDescriptor, ArgumentRegistry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const MIN_WIDTH: u16 = 40;
pub const MAX_WIDTH: u16 = 120;
pub const DEFAULT_WIDTH: u16 = 80;

const DEFAULT_NAME: &str = "mycli";
const DEFAULT_DESCRIPTION: &str = "A sample CLI tool";

/// Full configuration driving preview and export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramSpec {
    pub name: String,
    pub description: String,
    width: u16,
    pub args: ArgumentRegistry,
}

impl Default for ProgramSpec {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            width: DEFAULT_WIDTH,
            args: ArgumentRegistry::from_entries(vec![ArgumentDescriptor::new(
                "verbose",
                "-v, --verbose",
                "Enable verbose output",
                ArgKind::Flag,
            )]),
        }
    }
}

impl ProgramSpec {
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Set the wrap width, clamped to the slider range.
    pub fn set_width(&mut self, width: u16) {
        self.width = width.clamp(MIN_WIDTH, MAX_WIDTH);
    }

    pub fn adjust_width(&mut self, delta: i32) {
        let next = (i32::from(self.width) + delta)
            .clamp(i32::from(MIN_WIDTH), i32::from(MAX_WIDTH));
        self.width = u16::try_from(next).unwrap_or(DEFAULT_WIDTH);
    }

    /// Descriptors that take part in rendering, in registry order.
    pub fn active_args(&self) -> impl Iterator<Item = (usize, &ArgumentDescriptor)> {
        self.args
            .iter()
            .enumerate()
            .filter(|(_, descriptor)| descriptor.has_flags())
    }
}

/// On-disk seed shape; every field is optional so partial files are accepted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub args: Option<Vec<ArgumentDescriptor>>,
}

impl SeedFile {
    pub fn apply(self, spec: &mut ProgramSpec) {
        if let Some(name) = self.name {
            spec.name = name;
        }
        if let Some(description) = self.description {
            spec.description = description;
        }
        if let Some(width) = self.width {
            spec.set_width(width);
        }
        if let Some(args) = self.args {
            spec.args = ArgumentRegistry::from_entries(args);
        }
    }
}

/// Load a seed file from disk.
pub fn load_seed(path: &Path) -> Result<SeedFile> {
    let bytes = fs::read(path).with_context(|| format!("read seed {}", path.display()))?;
    let seed: SeedFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse seed JSON {}", path.display()))?;
    Ok(seed)
}
