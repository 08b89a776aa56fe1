// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note naming for keyswitch tables.
//!
//! Keyswitches are listed and written by name (e.g. "C1", "F#5") in
//! tables and CLI output, using the convention where MIDI note 24 is C1.

pub mod note;

pub use note::{note_name, parse_note_name, MidiNote, Note, MAX_NOTE};
