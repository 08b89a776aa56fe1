// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Profile table files.
//!
//! This module provides the serde data structures for loading keyswitch
//! tables from YAML or TOML files. Definitions are kept unvalidated here so
//! that one malformed profile can be reported without rejecting the rest of
//! the file; [`ProfileDefinition::validate`] turns each into an
//! [`ArticulationProfile`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::articulation::{ArticulationEntry, ArticulationProfile, ProfileTable};
use crate::error::{ArticulationError, Result};
use crate::music::{parse_note_name, MidiNote, MAX_NOTE};

/// Root of a profile table file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TableFile {
    /// Output directory override (relative to the working directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Profile definitions, in output order
    #[serde(default)]
    pub profiles: Vec<ProfileDefinition>,
}

impl TableFile {
    /// Load a table file, choosing the format from the extension
    /// (`.toml` is TOML, anything else is YAML)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ArticulationError::Config(format!("Failed to read table file {:?}: {}", path, e))
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// Parse a table from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ArticulationError::Config(format!("Failed to parse YAML table: {}", e)))
    }

    /// Parse a table from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| ArticulationError::Config(format!("Failed to parse TOML table: {}", e)))
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ArticulationError::Config(format!("Failed to serialize table to YAML: {}", e))
        })
    }

    /// Build the profile table described by this file
    pub fn into_table(self) -> ProfileTable {
        ProfileTable::new(self.profiles)
    }
}

/// One profile as written in a table file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileDefinition {
    /// Profile name (document name and file stem)
    pub name: String,
    /// Output sub-directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Keyswitch bindings, in output order
    #[serde(default)]
    pub articulations: Vec<EntryDefinition>,
}

impl ProfileDefinition {
    /// Create a definition from (note, label) pairs
    pub fn new(name: impl Into<String>, group: Option<&str>, pairs: &[(i64, &str)]) -> Self {
        Self {
            name: name.into(),
            group: group.map(str::to_string),
            articulations: pairs
                .iter()
                .map(|(note, label)| EntryDefinition {
                    note: NoteSpec::Number(*note),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    /// Name including the group, e.g. "Musio - CineStrings Solo/Viola"
    pub fn display_name(&self) -> String {
        match self.group {
            Some(ref group) => format!("{}/{}", group, self.name),
            None => self.name.clone(),
        }
    }

    /// Resolve notes and validate into an immutable profile
    pub fn validate(&self) -> Result<ArticulationProfile> {
        let entries = self
            .articulations
            .iter()
            .map(|entry| {
                let note = entry.note.resolve(&self.name)?;
                Ok(ArticulationEntry::new(note, entry.label.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        ArticulationProfile::new(self.name.clone(), self.group.clone(), entries)
    }
}

impl From<&ArticulationProfile> for ProfileDefinition {
    fn from(profile: &ArticulationProfile) -> Self {
        Self {
            name: profile.name().to_string(),
            group: profile.group().map(str::to_string),
            articulations: profile
                .entries()
                .iter()
                .map(|e| EntryDefinition {
                    note: NoteSpec::Number(e.note as i64),
                    label: e.label.clone(),
                })
                .collect(),
        }
    }
}

/// A keyswitch binding as written in a table file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryDefinition {
    /// Keyswitch note, as a number or a name
    pub note: NoteSpec,
    /// Articulation name
    pub label: String,
}

/// Note value in a table file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NoteSpec {
    /// MIDI note number (range checked on validation)
    Number(i64),
    /// Note name such as "C1" or "F#5"
    Name(String),
}

impl NoteSpec {
    /// Resolve to a MIDI note, rejecting out-of-range numbers and bad names
    pub fn resolve(&self, profile: &str) -> Result<MidiNote> {
        match self {
            NoteSpec::Number(n) => {
                if (0..=MAX_NOTE as i64).contains(n) {
                    Ok(*n as MidiNote)
                } else {
                    Err(ArticulationError::invalid(
                        profile,
                        format!("note {} is out of range 0-{}", n, MAX_NOTE),
                    ))
                }
            }
            NoteSpec::Name(name) => parse_note_name(name).ok_or_else(|| {
                ArticulationError::invalid(profile, format!("'{}' is not a valid note", name))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_yaml_table() {
        let yaml = r#"
output_dir: build
profiles:
  - name: "Violin I"
    group: "Musio - CineStrings Solo"
    articulations:
      - { note: 24, label: "Legato - Performance" }
      - { note: "C#1", label: "Legato - Bow Change" }

  - name: "Essentials"
    articulations:
      - note: 0
        label: Legato
"#;

        let table = TableFile::from_yaml(yaml).unwrap();
        assert_eq!(table.output_dir, Some(PathBuf::from("build")));
        assert_eq!(table.profiles.len(), 2);
        assert_eq!(table.profiles[0].group.as_deref(), Some("Musio - CineStrings Solo"));
        assert_eq!(table.profiles[0].articulations[1].note, NoteSpec::Name("C#1".to_string()));
        assert_eq!(table.profiles[1].group, None);

        let violin = table.profiles[0].validate().unwrap();
        assert_eq!(violin.entries()[0].note, 24);
        assert_eq!(violin.entries()[1].note, 25);
    }

    #[test]
    fn test_parse_toml_table() {
        let text = r#"
[[profiles]]
name = "Bass"
group = "Musio - CineStrings Solo"
articulations = [
  { note = 72, label = "Legato - Performance" },
  { note = "C#5", label = "Legato - Bow Change" },
]
"#;

        let table = TableFile::from_toml(text).unwrap();
        assert_eq!(table.output_dir, None);
        let bass = table.profiles[0].validate().unwrap();
        assert_eq!(bass.name(), "Bass");
        assert_eq!(bass.entries()[1].note, 73);
    }

    #[test]
    fn test_out_of_range_numbers_are_invalid_profiles() {
        for note in [-1, 128] {
            let def = ProfileDefinition::new("Range", None, &[(note, "Sustain")]);
            let err = def.validate().unwrap_err();
            assert!(err.is_invalid_profile(), "note {} should be rejected", note);
        }
    }

    #[test]
    fn test_bad_note_name_is_invalid_profile() {
        let yaml = r#"
profiles:
  - name: Bad
    articulations:
      - { note: "X9", label: Sustain }
"#;
        let table = TableFile::from_yaml(yaml).unwrap();
        assert!(table.profiles[0].validate().unwrap_err().is_invalid_profile());
    }

    #[test]
    fn test_huge_octave_is_invalid_profile() {
        let yaml = r#"
profiles:
  - name: Overflow
    articulations:
      - { note: "C2730", label: Sustain }
"#;
        let table = TableFile::from_yaml(yaml).unwrap();
        assert!(table.profiles[0].validate().unwrap_err().is_invalid_profile());
    }

    #[test]
    fn test_malformed_yaml() {
        let result = TableFile::from_yaml("profiles: [");
        assert!(matches!(result, Err(ArticulationError::Config(_))));
    }

    #[test]
    fn test_round_trip_yaml() {
        let original = TableFile {
            output_dir: None,
            profiles: vec![ProfileDefinition::new(
                "Cello",
                Some("Musio - CineStrings Solo"),
                &[(24, "Legato - Performance"), (33, "Pizzicato")],
            )],
        };

        let yaml = original.to_yaml().unwrap();
        let parsed = TableFile::from_yaml(&yaml).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("table.yaml");
        fs::write(
            &yaml_path,
            "profiles:\n  - name: A\n    articulations:\n      - { note: 1, label: Long }\n",
        )
        .unwrap();
        assert_eq!(TableFile::load(&yaml_path).unwrap().profiles[0].name, "A");

        let toml_path = dir.path().join("table.toml");
        fs::write(
            &toml_path,
            "[[profiles]]\nname = \"B\"\narticulations = [{ note = 2, label = \"Short\" }]\n",
        )
        .unwrap();
        assert_eq!(TableFile::load(&toml_path).unwrap().profiles[0].name, "B");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = TableFile::load(dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(ArticulationError::Config(_))));
    }

    #[test]
    fn test_definition_from_profile() {
        let profile = ProfileDefinition::new("Viola", Some("Lib"), &[(30, "Marcato")])
            .validate()
            .unwrap();
        let def = ProfileDefinition::from(&profile);
        assert_eq!(def.display_name(), "Lib/Viola");
        assert_eq!(def.validate().unwrap(), profile);
    }
}
