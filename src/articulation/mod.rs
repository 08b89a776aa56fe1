// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Keyswitch mapping tables.
//!
//! This module provides:
//! - Validated articulation profiles (keyswitch note -> articulation name)
//! - The profile table passed from startup to the emitter
//! - The built-in table of supported sample libraries

pub mod library;
pub mod table;

pub use table::{ProfileTable, ValidatedTable};

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::error::{ArticulationError, Result};
use crate::music::{note_name, MidiNote, MAX_NOTE};
use crate::plist::is_xml_text;

/// File extension of articulation set documents
pub const FILE_EXTENSION: &str = "plist";

/// A single keyswitch binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticulationEntry {
    /// Keyswitch note (0-127)
    pub note: MidiNote,
    /// Articulation name shown by the host
    pub label: String,
}

impl ArticulationEntry {
    /// Create a new entry
    pub fn new(note: MidiNote, label: impl Into<String>) -> Self {
        Self {
            note,
            label: label.into(),
        }
    }
}

/// The complete keyswitch mapping for one instrument or library.
///
/// Only constructible through [`ArticulationProfile::new`], so every value
/// holds unique, in-range notes and non-empty labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticulationProfile {
    name: String,
    group: Option<String>,
    entries: Vec<ArticulationEntry>,
}

impl ArticulationProfile {
    /// Create a validated profile.
    ///
    /// `group` is an optional sub-directory (usually the library vendor and
    /// product) the document is written under.
    pub fn new(
        name: impl Into<String>,
        group: Option<String>,
        entries: Vec<ArticulationEntry>,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        if let Some(ref group) = group {
            validate_group(&name, group)?;
        }
        validate_entries(&name, &entries)?;

        Ok(Self {
            name,
            group,
            entries,
        })
    }

    /// Profile name, also the document name and file stem
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output sub-directory, if any
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Entries in output order
    pub fn entries(&self) -> &[ArticulationEntry] {
        &self.entries
    }

    /// Number of articulations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated profile
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the articulation bound to a note
    pub fn label_for(&self, note: MidiNote) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.note == note)
            .map(|e| e.label.as_str())
    }

    /// File name of the emitted document
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, FILE_EXTENSION)
    }

    /// Path of the emitted document relative to the output directory
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        if let Some(ref group) = self.group {
            path.push(group);
        }
        path.push(self.file_name());
        path
    }

    /// Display name including the group, e.g. "Musio - CineStrings Solo/Viola"
    pub fn display_name(&self) -> String {
        match self.group {
            Some(ref group) => format!("{}/{}", group, self.name),
            None => self.name.clone(),
        }
    }

    /// Re-check the invariants. Used by the emitter before rendering.
    pub fn check(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_entries(&self.name, &self.entries)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ArticulationError::invalid(name, "profile name is empty"));
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ArticulationError::invalid(
            name,
            "profile name must not contain path separators",
        ));
    }
    if !is_xml_text(name) {
        return Err(ArticulationError::invalid(
            name,
            "profile name contains control characters",
        ));
    }
    Ok(())
}

fn validate_group(name: &str, group: &str) -> Result<()> {
    let path = Path::new(group);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if group.trim().is_empty() || escapes || !is_xml_text(group) {
        return Err(ArticulationError::invalid(
            name,
            format!("group '{}' is not a relative directory", group),
        ));
    }
    Ok(())
}

fn validate_entries(name: &str, entries: &[ArticulationEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(ArticulationError::invalid(name, "profile has no entries"));
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if entry.note > MAX_NOTE {
            return Err(ArticulationError::invalid(
                name,
                format!("note {} is out of range 0-{}", entry.note, MAX_NOTE),
            ));
        }
        if entry.label.trim().is_empty() {
            return Err(ArticulationError::invalid(
                name,
                format!("note {} has an empty label", entry.note),
            ));
        }
        if !is_xml_text(&entry.label) {
            return Err(ArticulationError::invalid(
                name,
                format!("label of note {} contains control characters", entry.note),
            ));
        }
        if !seen.insert(entry.note) {
            return Err(ArticulationError::invalid(
                name,
                format!("duplicate note {} ({})", entry.note, note_name(entry.note)),
            ));
        }
    }
    Ok(())
}
