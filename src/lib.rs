// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! ARTSET - articulation set generator.
//!
//! Turns keyswitch tables (MIDI note -> articulation name) into Logic Pro
//! articulation set documents, one file per instrument profile.

pub mod articulation;
pub mod config;
pub mod error;
pub mod export;
pub mod music;
pub mod plist;

pub use articulation::{ArticulationEntry, ArticulationProfile, ProfileTable};
pub use config::{ProfileDefinition, TableFile};
pub use error::{ArticulationError, Result};
pub use export::{render, ArticulationExporter, GenerationReport};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";
