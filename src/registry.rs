//! Ordered registry of user-defined argument descriptors.
//!
//! The registry never shrinks below one entry so the designer always has a
//! row to edit.
use serde::{Deserialize, Serialize};

/// Whether an argument is a presence switch or takes a value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgKind {
    #[default]
    Flag,
    Option,
}

impl ArgKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArgKind::Flag => "flag",
            ArgKind::Option => "option",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ArgKind::Flag => ArgKind::Option,
            ArgKind::Option => ArgKind::Flag,
        }
    }
}

/// One argument definition as typed by the user.
///
/// `flags` is kept as raw text (e.g. `-v, --verbose`); it is only interpreted
/// when rendering or exporting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub flags: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub kind: ArgKind,
}

impl ArgumentDescriptor {
    pub fn new(name: &str, flags: &str, help: &str, kind: ArgKind) -> Self {
        Self {
            name: name.to_string(),
            flags: flags.to_string(),
            help: help.to_string(),
            kind,
        }
    }

    /// Descriptors with blank flag text are skipped by the renderer and exporter.
    pub fn has_flags(&self) -> bool {
        !self.flags.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentRegistry {
    entries: Vec<ArgumentDescriptor>,
}

impl Default for ArgumentRegistry {
    fn default() -> Self {
        Self {
            entries: vec![ArgumentDescriptor::default()],
        }
    }
}

impl ArgumentRegistry {
    /// Build a registry from existing descriptors; an empty list yields one blank row.
    pub fn from_entries(entries: Vec<ArgumentDescriptor>) -> Self {
        if entries.is_empty() {
            return Self::default();
        }
        Self { entries }
    }

    pub fn add(&mut self) -> usize {
        self.entries.push(ArgumentDescriptor::default());
        self.entries.len() - 1
    }

    /// Remove the entry at `index`. Returns false when the removal was refused.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.entries.len() <= 1 || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// Overwrite every field of the entry at `index`.
    pub fn update(&mut self, index: usize, descriptor: ArgumentDescriptor) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                *entry = descriptor;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&ArgumentDescriptor> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArgumentDescriptor> {
        self.entries.iter()
    }
}
