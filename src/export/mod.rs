// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Articulation set export.
//!
//! Renders validated profiles as articulation set documents and writes one
//! file per profile under an output directory. Each file is written to a
//! temporary file in its destination directory and renamed into place, so a
//! failed write never leaves a partial document behind.

pub mod document;

pub use document::{articulation_set, ArticulationSet};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

use crate::articulation::{ArticulationProfile, ProfileTable};
use crate::error::{ArticulationError, Result};
use crate::plist;

/// Render a profile to document text
pub fn render(profile: &ArticulationProfile) -> Result<String> {
    profile.check()?;
    Ok(plist::to_xml_string(&articulation_set(profile)))
}

/// Articulation set exporter
#[derive(Debug, Clone)]
pub struct ArticulationExporter {
    /// Directory documents are written under
    output_dir: PathBuf,
    /// Read every written document back and compare with its profile
    verify: bool,
    /// Remove the output directory before writing a fully valid table
    clean: bool,
}

impl ArticulationExporter {
    /// Create a new exporter writing under `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            verify: false,
            clean: false,
        }
    }

    /// Enable read-back verification
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Remove the output directory in [`export_all`](Self::export_all)
    /// once the whole table has validated
    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Get output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Destination path of a profile's document
    pub fn path_for(&self, profile: &ArticulationProfile) -> PathBuf {
        self.output_dir.join(profile.relative_path())
    }

    /// Remove the output directory and everything in it
    pub fn clean(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = ?self.output_dir, "Removing output directory");
            fs::remove_dir_all(&self.output_dir)
                .map_err(|e| ArticulationError::write_failure(&self.output_dir, e))?;
        }
        Ok(())
    }

    /// Write one profile, overwriting any existing document. Returns the path written.
    pub fn export(&self, profile: &ArticulationProfile) -> Result<PathBuf> {
        let text = render(profile)?;
        let path = self.path_for(profile);

        write_atomic(&path, text.as_bytes())?;
        info!(
            path = ?path,
            articulations = profile.len(),
            "Generated articulation set {}",
            profile.display_name()
        );

        if self.verify {
            verify(&path, profile)?;
            debug!(path = ?path, "Verified");
        }

        Ok(path)
    }

    /// Validate every profile in the table, then write each valid one.
    ///
    /// Failures are collected per profile; one failure never stops the rest.
    /// With cleaning enabled the output directory is only removed when every
    /// profile validated.
    pub fn export_all(&self, table: &ProfileTable) -> GenerationReport {
        let validated = table.validate();
        let mut report = GenerationReport::default();

        if self.clean {
            if validated.all_valid() {
                if let Err(e) = self.clean() {
                    error!("{}", e);
                    report.failures.push((self.output_dir.display().to_string(), e));
                    return report;
                }
            } else {
                warn!(dir = ?self.output_dir, "Table has invalid profiles, not cleaning");
            }
        }

        for (name, e) in validated.rejected {
            warn!(profile = %name, "Skipping profile: {}", e);
            report.failures.push((name, e));
        }

        for profile in &validated.profiles {
            match self.export(profile) {
                Ok(path) => report.written.push(path),
                Err(e) => {
                    error!(profile = %profile.display_name(), "{}", e);
                    report.failures.push((profile.display_name(), e));
                }
            }
        }

        report
    }
}

/// Outcome of exporting a table
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Documents written, in table order
    pub written: Vec<PathBuf>,
    /// Profiles that failed, with their display name
    pub failures: Vec<(String, ArticulationError)>,
}

impl GenerationReport {
    /// Check if every profile was written
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of failed profiles
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Write `contents` to `path` via a temporary file in the same directory
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir).map_err(|e| ArticulationError::write_failure(dir, e))?;

    let mut file =
        NamedTempFile::new_in(dir).map_err(|e| ArticulationError::write_failure(path, e))?;
    file.write_all(contents)
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| ArticulationError::write_failure(path, e))?;

    // Dropping an unpersisted temp file deletes it
    file.persist(path)
        .map_err(|e| ArticulationError::write_failure(path, e.error))?;

    Ok(())
}

/// Read a written document back and check it matches the profile
pub fn verify(path: &Path, profile: &ArticulationProfile) -> Result<()> {
    let fail = |reason: String| ArticulationError::Verification {
        path: path.to_path_buf(),
        reason,
    };

    let text = fs::read_to_string(path).map_err(|e| fail(e.to_string()))?;
    let value = plist::from_xml_str(&text).map_err(|e| fail(e.to_string()))?;
    let set = ArticulationSet::from_value(&value).map_err(fail)?;

    if set.name != profile.file_name() {
        return Err(fail(format!(
            "name is '{}', expected '{}'",
            set.name,
            profile.file_name()
        )));
    }

    let expected: Vec<_> = profile
        .entries()
        .iter()
        .map(|e| (e.note, e.label.clone()))
        .collect();
    if set.bindings != expected {
        return Err(fail(format!(
            "{} bindings do not match the {} expected",
            set.bindings.len(),
            expected.len()
        )));
    }

    Ok(())
}
