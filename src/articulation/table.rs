// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Profile table: the set of profiles one run emits.

use std::collections::HashMap;

use tracing::debug;

use super::library;
use super::ArticulationProfile;
use crate::config::ProfileDefinition;
use crate::error::{ArticulationError, Result};

/// Ordered collection of profile definitions.
///
/// Built once at startup (from the built-in library or a table file) and
/// passed explicitly to the emitter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileTable {
    definitions: Vec<ProfileDefinition>,
}

impl ProfileTable {
    /// Create a table from definitions
    pub fn new(definitions: Vec<ProfileDefinition>) -> Self {
        Self { definitions }
    }

    /// The built-in table of supported libraries
    pub fn builtin() -> Self {
        Self::new(library::builtin_profiles())
    }

    /// Get definitions
    pub fn definitions(&self) -> &[ProfileDefinition] {
        &self.definitions
    }

    /// Number of profiles
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the table has no profiles
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Keep only the named profiles, in table order.
    ///
    /// A name matches either the bare profile name or "group/name".
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        for name in names {
            let name = name.as_ref();
            if !self.definitions.iter().any(|d| matches_name(d, name)) {
                return Err(ArticulationError::UnknownProfile(name.to_string()));
            }
        }

        let definitions = self
            .definitions
            .iter()
            .filter(|d| names.iter().any(|n| matches_name(d, n.as_ref())))
            .cloned()
            .collect();

        Ok(Self { definitions })
    }

    /// Validate every profile before anything is written.
    ///
    /// Profiles that would be written to the same file are all rejected.
    /// Paths are compared case-insensitively since the usual destination
    /// file systems are case-insensitive.
    pub fn validate(&self) -> ValidatedTable {
        let mut validated = ValidatedTable::default();
        let mut valid = Vec::new();

        for definition in &self.definitions {
            match definition.validate() {
                Ok(profile) => valid.push(profile),
                Err(e) => validated.rejected.push((definition.display_name(), e)),
            }
        }

        let mut uses: HashMap<String, usize> = HashMap::new();
        for profile in &valid {
            *uses.entry(path_key(profile)).or_default() += 1;
        }

        for profile in valid {
            let key = path_key(&profile);
            if uses[&key] > 1 {
                let e = ArticulationError::invalid(
                    profile.name(),
                    format!(
                        "output path {} is shared with another profile",
                        profile.relative_path().display()
                    ),
                );
                validated.rejected.push((profile.display_name(), e));
            } else {
                debug!(profile = %profile.display_name(), articulations = profile.len(), "Profile valid");
                validated.profiles.push(profile);
            }
        }

        validated
    }
}

fn path_key(profile: &ArticulationProfile) -> String {
    profile.relative_path().to_string_lossy().to_lowercase()
}

fn matches_name(definition: &ProfileDefinition, name: &str) -> bool {
    definition.name == name || definition.display_name() == name
}

/// Result of validating a table
#[derive(Debug, Default)]
pub struct ValidatedTable {
    /// Profiles that passed validation, in table order
    pub profiles: Vec<ArticulationProfile>,
    /// Profiles that failed, with their display name
    pub rejected: Vec<(String, ArticulationError)>,
}

impl ValidatedTable {
    /// Check if every profile was valid
    pub fn all_valid(&self) -> bool {
        self.rejected.is_empty()
    }
}
