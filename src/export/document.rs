// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Articulation set document layout.
//!
//! Mirrors the schema the host saves under "Articulation Settings": a root
//! dictionary whose keys are written alphabetically, with one articulation
//! dictionary per keyswitch triggered by a Note On of the keyswitch note.

use crate::articulation::{ArticulationEntry, ArticulationProfile};
use crate::music::{MidiNote, MAX_NOTE};
use crate::plist::{Dictionary, Value};

/// Root keys
pub mod keys {
    pub const ARTICULATIONS: &str = "Articulations";
    pub const INPUT_MIDI_CHANNEL: &str = "InputMidiChannel";
    pub const MULTIPLE_OUTPUTS_ACTIVE: &str = "MultipleOutputsActive";
    pub const NAME: &str = "Name";
    pub const OCTAVE_OFFSET: &str = "OctaveOffset";
    pub const SWITCHES: &str = "Switches";
    pub const SWITCHING_ENABLED: &str = "SwitchingEnabled";

    // Articulation keys
    pub const ARTICULATION_ID: &str = "ArticulationID";
    pub const ID: &str = "ID";
    pub const OUTPUT: &str = "Output";

    // Output keys
    pub const MB1: &str = "MB1";
    pub const STATUS: &str = "Status";
}

/// Output status that triggers a keyswitch
pub const STATUS_NOTE_ON: &str = "Note On";

/// Input channel value meaning "all channels"
pub const ALL_CHANNELS: i64 = -1;

/// Offset between an articulation's position-based ID and its unique ID
pub const ID_BASE: i64 = 1000;

/// Build the document for a profile
pub fn articulation_set(profile: &ArticulationProfile) -> Value {
    let articulations = profile
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| articulation(index as i64 + 1, entry))
        .collect::<Vec<_>>();

    Dictionary::new()
        .with(keys::ARTICULATIONS, articulations)
        .with(keys::INPUT_MIDI_CHANNEL, ALL_CHANNELS)
        .with(keys::MULTIPLE_OUTPUTS_ACTIVE, false)
        .with(keys::NAME, profile.file_name())
        .with(keys::OCTAVE_OFFSET, 0)
        .with(keys::SWITCHES, Vec::<Value>::new())
        .with(keys::SWITCHING_ENABLED, false)
        .into()
}

fn articulation(articulation_id: i64, entry: &ArticulationEntry) -> Value {
    let output = Dictionary::new()
        .with(keys::MB1, entry.note as i64)
        .with(keys::STATUS, STATUS_NOTE_ON);

    Dictionary::new()
        .with(keys::ARTICULATION_ID, articulation_id)
        .with(keys::ID, ID_BASE + articulation_id)
        .with(keys::NAME, entry.label.as_str())
        .with(keys::OUTPUT, vec![Value::from(output)])
        .into()
}

/// Keyswitch bindings read back from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticulationSet {
    /// Document name (the file name, as the host stores it)
    pub name: String,
    /// (note, label) pairs in document order
    pub bindings: Vec<(MidiNote, String)>,
}

impl ArticulationSet {
    /// Extract bindings from a parsed document, checking the schema.
    ///
    /// Returns a description of the first schema violation on failure.
    pub fn from_value(value: &Value) -> Result<Self, String> {
        let root = value.as_dictionary().ok_or("root is not a dictionary")?;

        for key in [keys::INPUT_MIDI_CHANNEL, keys::OCTAVE_OFFSET] {
            if root.get(key).and_then(Value::as_integer).is_none() {
                return Err(format!("missing integer key {}", key));
            }
        }
        for key in [keys::MULTIPLE_OUTPUTS_ACTIVE, keys::SWITCHING_ENABLED] {
            if root.get(key).and_then(Value::as_boolean).is_none() {
                return Err(format!("missing boolean key {}", key));
            }
        }
        if root.get(keys::SWITCHES).and_then(Value::as_array).is_none() {
            return Err(format!("missing array key {}", keys::SWITCHES));
        }

        let name = root
            .get(keys::NAME)
            .and_then(Value::as_str)
            .ok_or("missing string Name")?
            .to_string();

        let articulations = root
            .get(keys::ARTICULATIONS)
            .and_then(Value::as_array)
            .ok_or("missing array Articulations")?;

        let mut bindings = Vec::with_capacity(articulations.len());
        for (index, item) in articulations.iter().enumerate() {
            bindings.push(binding(item).map_err(|e| format!("articulation {}: {}", index + 1, e))?);
        }

        Ok(Self { name, bindings })
    }
}

fn binding(item: &Value) -> Result<(MidiNote, String), String> {
    let dict = item.as_dictionary().ok_or("not a dictionary")?;

    let label = dict
        .get(keys::NAME)
        .and_then(Value::as_str)
        .ok_or("missing string Name")?;

    let output = dict
        .get(keys::OUTPUT)
        .and_then(Value::as_array)
        .and_then(|outputs| outputs.first())
        .and_then(Value::as_dictionary)
        .ok_or("missing Output")?;

    let status = output.get(keys::STATUS).and_then(Value::as_str);
    if status != Some(STATUS_NOTE_ON) {
        return Err(format!("unsupported output status {:?}", status));
    }

    let note = output
        .get(keys::MB1)
        .and_then(Value::as_integer)
        .ok_or("missing integer MB1")?;
    if !(0..=MAX_NOTE as i64).contains(&note) {
        return Err(format!("MB1 {} out of range", note));
    }

    Ok((note as MidiNote, label.to_string()))
}
