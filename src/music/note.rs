// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and MIDI note names.

use std::fmt;

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Highest valid MIDI note number
pub const MAX_NOTE: MidiNote = 127;

/// Octaves that hold MIDI notes (C-1 is note 0, G9 is note 127)
const OCTAVES: std::ops::RangeInclusive<i32> = -1..=9;

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get note from pitch class
    pub fn from_pitch_class(pc: u8) -> Self {
        Note::ALL[(pc % 12) as usize]
    }

    /// Get the pitch class of a MIDI note
    pub fn of_midi(note: MidiNote) -> Self {
        Note::from_pitch_class(note % 12)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Note::C => "C",
            Note::Cs => "C#",
            Note::D => "D",
            Note::Ds => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::G => "G",
            Note::Gs => "G#",
            Note::A => "A",
            Note::As => "A#",
            Note::B => "B",
        };
        f.write_str(name)
    }
}

/// Octave number of a MIDI note (note 24 is in octave 1)
fn octave(note: MidiNote) -> i8 {
    (note / 12) as i8 - 1
}

/// Format a MIDI note as a name, e.g. 24 -> "C1", 61 -> "C#4", 0 -> "C-1"
pub fn note_name(note: MidiNote) -> String {
    format!("{}{}", Note::of_midi(note), octave(note))
}

/// Parse a note name like "C1", "F#5", "Bb0", "Cs2" or "C-1" into a MIDI note.
///
/// Returns `None` for malformed names and for notes outside 0-127.
pub fn parse_note_name(s: &str) -> Option<MidiNote> {
    let s = s.trim();
    let mut chars = s.chars();

    let base: i32 = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest = chars.as_str();
    let (accidental, octave_str) = match rest.chars().next() {
        Some('#') | Some('s') | Some('S') => (1, &rest[1..]),
        Some('b') => (-1, &rest[1..]),
        _ => (0, rest),
    };

    let octave: i32 = octave_str.parse().ok()?;
    if !OCTAVES.contains(&octave) {
        return None;
    }
    let midi = (octave + 1) * 12 + base + accidental;

    if (0..=MAX_NOTE as i32).contains(&midi) {
        Some(midi as MidiNote)
    } else {
        None
    }
}
