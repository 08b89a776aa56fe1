// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Built-in keyswitch tables for supported sample libraries.

use crate::config::ProfileDefinition;

const MUSIO_CINESTRINGS_SOLO: &str = "Musio - CineStrings Solo";

const VIOLIN_I: &[(i64, &str)] = &[
    (24, "Legato - Performance"),   // C1
    (25, "Legato - Bow Change"),    // C#1
    (26, "Legato - Espressivo"),    // D1
    (27, "Sustain"),                // D#1
    (28, "Sustain - Espressivo"),   // E1
    (29, "Sustain - Infinite Bow"), // F1
    (30, "Marcato"),                // F#1
    (31, "Staccato"),               // G1
    (32, "Spiccato"),               // G#1
    (33, "Short Spiccato"),         // A1
    (34, "Pizzicato"),              // A#1
    (35, "Tremolo"),                // B1
];

// Library names the bow change articulation in lower case on this patch
const VIOLIN_II: &[(i64, &str)] = &[
    (24, "Legato - Performance"),
    (25, "Legato - Bow change"),
    (26, "Legato - Espressivo"),
    (27, "Sustain"),
    (28, "Sustain - Espressivo"),
    (29, "Sustain - Infinite Bow"),
    (30, "Marcato"),
    (31, "Staccato"),
    (32, "Spiccato"),
    (33, "Short Spiccato"),
    (34, "Pizzicato"),
    (35, "Bartok Pizzicato"),
    (36, "Tremolo"), // C2
];

const VIOLA: &[(i64, &str)] = &[
    (24, "Legato - Performance"),
    (25, "Legato - Bow Change"),
    (26, "Legato - Espressivo"),
    (27, "Sustain"),
    (28, "Sustain - Espressivo"),
    (29, "Sustain - Infinite Bow"),
    (30, "Marcato"),
    (31, "Staccato"),
    (32, "Spiccato"),
    (33, "Short Spiccato"),
    (34, "Pizzicato"),
    (35, "Bartok Pizzicato"),
    (36, "Tremolo"),
];

const CELLO: &[(i64, &str)] = &[
    (24, "Legato - Performance"),
    (25, "Legato - Bow Change"),
    (26, "Legato - Espressivo"),
    (27, "Sustain"),
    (28, "Sustain - Espressivo"),
    (29, "Sustain - Infinite Bow"),
    (30, "Marcato"),
    (31, "Staccato"),
    (32, "Spiccato"),
    (33, "Pizzicato"),
];

// Bass keyswitches sit above the playable range, starting at C5
const BASS: &[(i64, &str)] = &[
    (72, "Legato - Performance"),
    (73, "Legato - Bow Change"),
    (74, "Legato - Espressivo"),
    (75, "Sustain"),
    (76, "Sustain - Espressivo"),
    (77, "Sustain - Infinite Bow"),
    (78, "Marcato"),
    (79, "Staccato"),
    (80, "Spiccato"),
    (81, "Pizzicato"),
    (82, "Bartok Pizzicato"),
];

const SPITFIRE_CHAMBER_STRINGS_ESSENTIALS: &[(i64, &str)] = &[
    (0, "Legato"),
    (1, "Long"),
    (2, "Spiccato"),
    (3, "Staccato"),
    (4, "Pizzicato"),
    (5, "Long Harmonics"),
    (6, "Tremolo"),
    (7, "Trill Minor 2nd"),
    (8, "Trill Major 2nd"),
];

/// Definitions for every built-in profile, in output order
pub fn builtin_profiles() -> Vec<ProfileDefinition> {
    vec![
        ProfileDefinition::new("Violin I", Some(MUSIO_CINESTRINGS_SOLO), VIOLIN_I),
        ProfileDefinition::new("Violin II", Some(MUSIO_CINESTRINGS_SOLO), VIOLIN_II),
        ProfileDefinition::new("Viola", Some(MUSIO_CINESTRINGS_SOLO), VIOLA),
        ProfileDefinition::new("Cello", Some(MUSIO_CINESTRINGS_SOLO), CELLO),
        ProfileDefinition::new("Bass", Some(MUSIO_CINESTRINGS_SOLO), BASS),
        ProfileDefinition::new(
            "Spitfire - Chamber Strings Essentials",
            None,
            SPITFIRE_CHAMBER_STRINGS_ESSENTIALS,
        ),
    ]
}
