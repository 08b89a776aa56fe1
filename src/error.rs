// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for articulation set generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Articulation error type
#[derive(Error, Debug)]
pub enum ArticulationError {
    /// Malformed profile: duplicate or out-of-range note, empty label, no entries
    #[error("Invalid profile '{profile}': {reason}")]
    InvalidProfile {
        /// Profile name
        profile: String,
        /// What was wrong with it
        reason: String,
    },

    /// The destination could not be written
    #[error("Failed to write {path:?}: {source}")]
    WriteFailure {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Profile table file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// A selected profile name does not exist in the table
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// A written document does not read back as its profile
    #[error("Verification of {path:?} failed: {reason}")]
    Verification {
        /// Document path
        path: PathBuf,
        /// First mismatch found
        reason: String,
    },
}

impl ArticulationError {
    /// Build an `InvalidProfile` error
    pub fn invalid(profile: impl Into<String>, reason: impl Into<String>) -> Self {
        ArticulationError::InvalidProfile {
            profile: profile.into(),
            reason: reason.into(),
        }
    }

    /// Build a `WriteFailure` error
    pub fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ArticulationError::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Check if this error was caused by bad profile data
    pub fn is_invalid_profile(&self) -> bool {
        matches!(self, ArticulationError::InvalidProfile { .. })
    }

    /// Check if this error was caused by the filesystem
    pub fn is_write_failure(&self) -> bool {
        matches!(self, ArticulationError::WriteFailure { .. })
    }
}

/// Result type for articulation operations
pub type Result<T> = std::result::Result<T, ArticulationError>;
