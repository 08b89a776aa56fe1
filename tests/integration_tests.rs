// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for ARTSET
//!
//! These tests run whole tables through validation, rendering and export
//! and read the results back from disk.

use std::fs;
use std::process::Command;

use artset::export::{verify, ArticulationSet};
use artset::plist::from_xml_str;
use artset::{
    render, ArticulationEntry, ArticulationError, ArticulationExporter, ArticulationProfile,
    ProfileDefinition, ProfileTable, TableFile,
};
use tempfile::tempdir;

fn cine_strings_solo() -> ArticulationProfile {
    ArticulationProfile::new(
        "CineStringsSolo",
        None,
        vec![
            ArticulationEntry::new(60, "Sustain"),
            ArticulationEntry::new(61, "Pizzicato"),
            ArticulationEntry::new(62, "Staccato"),
        ],
    )
    .unwrap()
}

/// Emitted documents parse back to the same bindings
#[test]
fn test_round_trip_fidelity() {
    let dir = tempdir().unwrap();
    let exporter = ArticulationExporter::new(dir.path());
    let table = ProfileTable::builtin();

    let report = exporter.export_all(&table);
    assert!(report.is_success());
    assert_eq!(report.written.len(), table.len());

    for definition in table.definitions() {
        let profile = definition.validate().unwrap();
        let text = fs::read_to_string(exporter.path_for(&profile)).unwrap();
        let set = ArticulationSet::from_value(&from_xml_str(&text).unwrap()).unwrap();

        let expected: Vec<_> = profile
            .entries()
            .iter()
            .map(|e| (e.note, e.label.clone()))
            .collect();
        assert_eq!(set.name, profile.file_name());
        assert_eq!(set.bindings, expected);
    }
}

/// Same profile, same bytes
#[test]
fn test_determinism() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    let profile = cine_strings_solo();

    let a = ArticulationExporter::new(first.path()).export(&profile).unwrap();
    let b = ArticulationExporter::new(second.path()).export(&profile).unwrap();
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());

    // Re-emitting over the existing file gives the same bytes again
    let again = ArticulationExporter::new(first.path()).export(&profile).unwrap();
    assert_eq!(fs::read(&again).unwrap(), fs::read(&b).unwrap());
}

/// Duplicate notes are rejected before anything is written
#[test]
fn test_duplicate_note_rejected_before_write() {
    let dir = tempdir().unwrap();
    let table = ProfileTable::new(vec![ProfileDefinition::new(
        "Dupes",
        None,
        &[(24, "Legato"), (25, "Sustain"), (24, "Staccato")],
    )]);

    let report = ArticulationExporter::new(dir.path()).export_all(&table);
    assert_eq!(report.failure_count(), 1);
    assert!(report.failures[0].1.is_invalid_profile());
    assert!(report.written.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// Notes outside 0-127 are rejected
#[test]
fn test_out_of_range_notes() {
    for note in [128, -1] {
        let definition = ProfileDefinition::new("Range", None, &[(60, "Sustain"), (note, "Bad")]);
        let err = definition.validate().unwrap_err();
        assert!(
            matches!(err, ArticulationError::InvalidProfile { .. }),
            "note {} gave {:?}",
            note,
            err
        );
    }
}

/// The worked example: three bindings in order plus the metadata keys
#[test]
fn test_cine_strings_solo_document() {
    let text = render(&cine_strings_solo()).unwrap();

    assert_eq!(text.matches("<key>ArticulationID</key>").count(), 3);
    assert!(text.contains("<key>InputMidiChannel</key>\n\t<integer>-1</integer>"));
    assert!(text.contains("<key>SwitchingEnabled</key>\n\t<false/>"));
    assert!(text.contains("<key>Name</key>\n\t<string>CineStringsSolo.plist</string>"));

    let sustain = text.find("<string>Sustain</string>").unwrap();
    let pizzicato = text.find("<string>Pizzicato</string>").unwrap();
    let staccato = text.find("<string>Staccato</string>").unwrap();
    assert!(sustain < pizzicato && pizzicato < staccato);

    let set = ArticulationSet::from_value(&from_xml_str(&text).unwrap()).unwrap();
    assert_eq!(
        set.bindings,
        vec![
            (60, "Sustain".to_string()),
            (61, "Pizzicato".to_string()),
            (62, "Staccato".to_string()),
        ]
    );
}

/// An unwritable destination fails cleanly
#[test]
fn test_write_failure_leaves_no_file() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-directory");
    fs::write(&blocker, "").unwrap();

    let exporter = ArticulationExporter::new(&blocker);
    let err = exporter.export(&cine_strings_solo()).unwrap_err();
    assert!(err.is_write_failure());

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["not-a-directory"]);
}

/// An invalid profile does not stop a valid one from being written
#[test]
fn test_invalid_then_valid_profile() {
    let dir = tempdir().unwrap();
    let yaml = r#"
profiles:
  - name: Broken
    articulations:
      - { note: 200, label: Sustain }
  - name: CineStringsSolo
    articulations:
      - { note: 60, label: Sustain }
      - { note: 61, label: Pizzicato }
      - { note: 62, label: Staccato }
"#;
    let table = TableFile::from_yaml(yaml).unwrap().into_table();

    let report = ArticulationExporter::new(dir.path()).export_all(&table);
    assert!(!report.is_success());
    assert_eq!(report.failures[0].0, "Broken");
    assert_eq!(report.written.len(), 1);

    let path = dir.path().join("CineStringsSolo.plist");
    assert_eq!(report.written[0], path);
    assert!(verify(&path, &cine_strings_solo()).is_ok());
}

/// Table files can select a subset of profiles
#[test]
fn test_select_builtin_profiles() {
    let dir = tempdir().unwrap();
    let table = ProfileTable::builtin()
        .select(&["Cello", "Spitfire - Chamber Strings Essentials"])
        .unwrap();

    let report = ArticulationExporter::new(dir.path())
        .with_verify(true)
        .export_all(&table);
    assert!(report.is_success());
    assert_eq!(
        report.written,
        vec![
            dir.path().join("Musio - CineStrings Solo").join("Cello.plist"),
            dir.path().join("Spitfire - Chamber Strings Essentials.plist"),
        ]
    );
}

fn artset() -> Command {
    Command::new(env!("CARGO_BIN_EXE_artset"))
}

/// The binary exits non-zero when a profile fails but still writes the rest
#[test]
fn test_binary_invalid_then_valid_profile() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("table.yaml");
    let out = dir.path().join("out");
    fs::write(
        &config,
        r#"
profiles:
  - name: Broken
    articulations:
      - { note: 200, label: Sustain }
  - name: CineStringsSolo
    articulations:
      - { note: 60, label: Sustain }
      - { note: 61, label: Pizzicato }
      - { note: 62, label: Staccato }
"#,
    )
    .unwrap();

    let output = artset()
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&out)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Broken"));
    assert!(!out.join("Broken.plist").exists());
    assert!(verify(&out.join("CineStringsSolo.plist"), &cine_strings_solo()).is_ok());
}

/// A fully valid run exits zero
#[test]
fn test_binary_success() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");

    let status = artset()
        .args(["--profile", "Cello", "--verify", "--output"])
        .arg(&out)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(out.join("Musio - CineStrings Solo").join("Cello.plist").is_file());
}

/// Asking for a profile that does not exist fails before anything is written
#[test]
fn test_binary_unknown_profile() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");

    let output = artset()
        .args(["--profile", "Harp", "--output"])
        .arg(&out)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Harp"));
    assert!(!out.exists());
}

/// Labels that cannot be written as XML text are rejected before writing
#[test]
fn test_control_character_label_rejected() {
    let dir = tempdir().unwrap();
    let table = ProfileTable::new(vec![ProfileDefinition::new(
        "Controls",
        None,
        &[(24, "Leg\u{1}ato")],
    )]);

    let report = ArticulationExporter::new(dir.path()).export_all(&table);
    assert!(report.failures[0].1.is_invalid_profile());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
